pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpZoneSource;
pub use config::TomlConfig;
pub use crate::core::{
    engine::{RiskEngine, Snapshot},
    pipeline::ScoringPipeline,
    projector::AdjustmentTable,
};
pub use domain::model::{ForecastMode, RiskBoard, ScoredZone, Severity, Zone};
pub use utils::error::{Result, RiskError};
