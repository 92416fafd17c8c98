pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod projector;
pub mod resolver;
pub mod severity;

pub use crate::domain::model::{ForecastMode, RiskBoard, ScoredZone, Severity, Zone};
pub use crate::domain::ports::{ConfigProvider, ZoneSource};
pub use crate::utils::error::Result;
