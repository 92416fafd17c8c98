use crate::core::classifier::classify;
use crate::core::projector::{project, AdjustmentTable};
use crate::core::resolver::resolve;
use crate::domain::model::{ForecastMode, RiskBoard, ScoredZone, Severity, Zone};

/// Resolve, optionally project, then classify.
///
/// Holds no per-call state; every evaluation works on a fresh copy of the
/// zones it is handed.
#[derive(Debug, Clone, Default)]
pub struct ScoringPipeline {
    adjustments: AdjustmentTable,
}

impl ScoringPipeline {
    pub fn new(adjustments: AdjustmentTable) -> Self {
        Self { adjustments }
    }

    pub fn adjustments(&self) -> &AdjustmentTable {
        &self.adjustments
    }

    pub fn score_zone(&self, zone: &Zone, mode: ForecastMode, current_hour: u32) -> ScoredZone {
        let resolved = resolve(zone, current_hour);
        let score = match mode {
            ForecastMode::Now => resolved,
            ForecastMode::NextHour => project(&self.adjustments, zone.id, resolved),
        };

        let mut zone = zone.clone();
        zone.risk_score = score;
        ScoredZone {
            zone,
            severity: Severity::from_score(score),
        }
    }

    /// Scores in input order.
    pub fn score_all(
        &self,
        zones: &[Zone],
        mode: ForecastMode,
        current_hour: u32,
    ) -> Vec<ScoredZone> {
        zones
            .iter()
            .map(|zone| self.score_zone(zone, mode, current_hour))
            .collect()
    }

    pub fn evaluate(&self, zones: &[Zone], mode: ForecastMode, current_hour: u32) -> RiskBoard {
        let scored = self.score_all(zones, mode, current_hour);
        let (threats, safe_places) = classify(&scored);
        tracing::debug!(
            "Scored {} zones ({:?}, hour {}): {} threats, {} safe",
            scored.len(),
            mode,
            current_hour,
            threats.len(),
            safe_places.len()
        );

        RiskBoard {
            mode,
            threats,
            safe_places,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{TimeSeries, TimeSeriesEntry, ZoneId};
    use serde_json::json;

    fn zone(id: ZoneId, score: i32) -> Zone {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("Zone {}", id),
            "risk_score": score
        }))
        .unwrap()
    }

    fn ids_and_scores(zones: &[ScoredZone]) -> Vec<(ZoneId, i32)> {
        zones.iter().map(|z| (z.id(), z.risk_score())).collect()
    }

    #[test]
    fn test_forecast_end_to_end() {
        let zones = vec![zone(1, 40), zone(2, 80), zone(3, 20), zone(4, 55)];
        let pipeline = ScoringPipeline::default();

        let scored = pipeline.score_all(&zones, ForecastMode::NextHour, 12);
        assert_eq!(
            ids_and_scores(&scored),
            vec![(1, 52), (2, 65), (3, 10), (4, 60)]
        );

        let board = pipeline.evaluate(&zones, ForecastMode::NextHour, 12);
        assert_eq!(ids_and_scores(&board.threats), vec![(2, 65), (4, 60), (1, 52)]);
        assert_eq!(ids_and_scores(&board.safe_places), vec![(3, 10)]);
        assert_eq!(board.threats[0].severity, Severity::Warning);
        assert_eq!(board.safe_places[0].severity, Severity::Safe);
    }

    #[test]
    fn test_now_mode_skips_projection() {
        let zones = vec![zone(1, 40), zone(2, 80), zone(3, 20), zone(4, 55)];
        let board = ScoringPipeline::default().evaluate(&zones, ForecastMode::Now, 12);

        assert_eq!(ids_and_scores(&board.threats), vec![(2, 80), (4, 55)]);
        assert_eq!(ids_and_scores(&board.safe_places), vec![(3, 20), (1, 40)]);
        assert_eq!(board.threats[0].severity, Severity::Severe);
    }

    #[test]
    fn test_projection_applies_to_resolved_score() {
        let mut z = zone(1, 10);
        z.time_series = Some(TimeSeries::from_entries(vec![
            TimeSeriesEntry::new("09:00", 60),
            TimeSeriesEntry::new("18:00", 88),
        ]));
        let pipeline = ScoringPipeline::default();

        assert_eq!(pipeline.score_zone(&z, ForecastMode::Now, 9).risk_score(), 60);
        assert_eq!(pipeline.score_zone(&z, ForecastMode::NextHour, 9).risk_score(), 72);
        assert_eq!(pipeline.score_zone(&z, ForecastMode::NextHour, 12).risk_score(), 95);
        assert_eq!(pipeline.score_zone(&z, ForecastMode::NextHour, 19).risk_score(), 22);
    }

    #[test]
    fn test_input_zone_is_not_modified() {
        let zones = vec![zone(1, 40)];
        let _ = ScoringPipeline::default().evaluate(&zones, ForecastMode::NextHour, 0);
        assert_eq!(zones[0].risk_score, 40);
    }

    #[test]
    fn test_empty_snapshot() {
        let board = ScoringPipeline::default().evaluate(&[], ForecastMode::NextHour, 5);
        assert!(board.is_empty());
        assert_eq!(board.mode, ForecastMode::NextHour);
    }
}
