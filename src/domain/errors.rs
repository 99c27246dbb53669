/// Every failure the dashboard can produce. Only `Http` on a history request
/// is turned into a user-facing alert; the rest propagate and get logged.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    Http { status: u16, url: String },
    Network(String),
    Decode(String),
    Rendering(String),
    Config(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Http { status, url } => write!(f, "HTTP {} from {}", status, url),
            DashboardError::Network(msg) => write!(f, "Network Error: {}", msg),
            DashboardError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            DashboardError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
            DashboardError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
