//! Chart aggregate: the series to draw, its options and the backend port.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::ChartBackend;
pub use value_objects::*;
