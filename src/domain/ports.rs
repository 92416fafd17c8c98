use crate::domain::model::{Zone, ZoneId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn headers(&self) -> HashMap<String, String>;
    /// Forecast shift per zone id. Zones missing here are not shifted.
    fn adjustments(&self) -> HashMap<ZoneId, i32>;
}

/// Supplier of zone snapshots.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    async fn fetch_zones(&self) -> Result<Vec<Zone>>;

    fn describe(&self) -> String;
}
