use crate::domain::model::Zone;
use crate::domain::ports::{ConfigProvider, ZoneSource};
use crate::utils::error::{Result, RiskError};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the zone snapshot with a GET on the configured endpoint.
pub struct HttpZoneSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpZoneSource<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: ConfigProvider> ZoneSource for HttpZoneSource<C> {
    async fn fetch_zones(&self) -> Result<Vec<Zone>> {
        let endpoint = self.config.api_endpoint();
        tracing::debug!("Making API request to: {}", endpoint);

        let mut request = self.client.get(endpoint);
        for (name, value) in self.config.headers() {
            request = request.header(name, value);
        }
        let response = request.send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(RiskError::StatusError {
                status: response.status().as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let json_data: serde_json::Value = response.json().await?;
        Ok(zones_from_json(json_data))
    }

    fn describe(&self) -> String {
        self.config.api_endpoint().to_string()
    }
}

/// Anything but an array is an empty snapshot. Items that do not decode as a
/// zone are skipped.
pub fn zones_from_json(json_data: serde_json::Value) -> Vec<Zone> {
    let serde_json::Value::Array(items) = json_data else {
        tracing::warn!("Zone payload is not a JSON array, using an empty snapshot");
        return Vec::new();
    };

    let mut zones = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Zone>(item) {
            Ok(zone) => zones.push(zone),
            Err(e) => tracing::warn!("Skipping zone record #{}: {}", index, e),
        }
    }
    zones
}
