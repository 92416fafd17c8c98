use crate::core::pipeline::ScoringPipeline;
use crate::domain::model::{ForecastMode, RiskBoard, Zone, ZoneId};
use crate::domain::ports::ZoneSource;
use serde::Serialize;

/// Shown to the user when the zone source could not be reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectivityNotice {
    pub source: String,
    pub message: String,
}

/// Zones fetched for one evaluation pass.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub zones: Vec<Zone>,
    pub notice: Option<ConnectivityNotice>,
}

impl Snapshot {
    pub fn find(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineReport {
    pub board: RiskBoard,
    pub notice: Option<ConnectivityNotice>,
}

pub struct RiskEngine<S: ZoneSource> {
    source: S,
    pipeline: ScoringPipeline,
}

impl<S: ZoneSource> RiskEngine<S> {
    pub fn new(source: S, pipeline: ScoringPipeline) -> Self {
        Self { source, pipeline }
    }

    pub fn pipeline(&self) -> &ScoringPipeline {
        &self.pipeline
    }

    /// Never fails: a fetch error becomes a notice and an empty snapshot.
    pub async fn load_snapshot(&self) -> Snapshot {
        let source = self.source.describe();
        tracing::debug!("Fetching zones from {}", source);

        match self.source.fetch_zones().await {
            Ok(zones) => {
                tracing::info!("Loaded {} zones from {}", zones.len(), source);
                Snapshot { zones, notice: None }
            }
            Err(e) => {
                tracing::error!(
                    "Zone fetch failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                Snapshot {
                    zones: Vec::new(),
                    notice: Some(ConnectivityNotice {
                        source,
                        message: e.user_friendly_message(),
                    }),
                }
            }
        }
    }

    pub fn evaluate(
        &self,
        snapshot: &Snapshot,
        mode: ForecastMode,
        current_hour: u32,
    ) -> RiskBoard {
        self.pipeline.evaluate(&snapshot.zones, mode, current_hour)
    }

    pub async fn run(&self, mode: ForecastMode, current_hour: u32) -> EngineReport {
        let snapshot = self.load_snapshot().await;
        let board = self.evaluate(&snapshot, mode, current_hour);
        EngineReport {
            board,
            notice: snapshot.notice,
        }
    }
}
