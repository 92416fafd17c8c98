//! One-hour forecast heuristic.
//!
//! Not a predictive model: a fixed shift per zone, clamped to a band.

use crate::domain::model::{Score, ZoneId};
use std::collections::HashMap;

pub const FORECAST_MIN_SCORE: Score = 10;
pub const FORECAST_MAX_SCORE: Score = 95;

/// Forecast shift per zone id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentTable {
    shifts: HashMap<ZoneId, i32>,
}

impl AdjustmentTable {
    pub fn new(shifts: HashMap<ZoneId, i32>) -> Self {
        Self { shifts }
    }

    /// Zero for ids the table does not know.
    pub fn shift_for(&self, zone_id: ZoneId) -> i32 {
        self.shifts.get(&zone_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl Default for AdjustmentTable {
    fn default() -> Self {
        Self::new(default_shifts())
    }
}

pub fn default_shifts() -> HashMap<ZoneId, i32> {
    HashMap::from([(1, 12), (2, -15), (3, -15), (4, 5)])
}

/// Forecast score for `zone_id`, always within
/// `FORECAST_MIN_SCORE..=FORECAST_MAX_SCORE`.
pub fn project(table: &AdjustmentTable, zone_id: ZoneId, resolved: Score) -> Score {
    resolved
        .saturating_add(table.shift_for(zone_id))
        .clamp(FORECAST_MIN_SCORE, FORECAST_MAX_SCORE)
}
