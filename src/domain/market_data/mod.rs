//! Market data aggregate: companies, history rows, stats and the repository port.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::MarketDataRepository;
pub use value_objects::*;
