//! Current-hour score lookup.

use crate::domain::model::{Score, TimeSeries, Zone};

/// Score of `zone` at `current_hour`.
///
/// Picks the first series entry whose hour is at or after `current_hour`.
/// Falls back to the baseline `risk_score` when the zone has no series or the
/// hour is past every entry.
pub fn resolve(zone: &Zone, current_hour: u32) -> Score {
    zone.time_series
        .as_ref()
        .and_then(|series| first_at_or_after(series, current_hour))
        .unwrap_or(zone.risk_score)
}

/// Relies on the `TimeSeries` ordering invariant: parsable hours ascend and
/// precede unparsable ones, so "hour < current" holds for a prefix only.
fn first_at_or_after(series: &TimeSeries, current_hour: u32) -> Option<Score> {
    let entries = series.entries();
    let idx = entries
        .partition_point(|entry| matches!(entry.hour(), Some(hour) if hour < current_hour));

    let entry = entries.get(idx)?;
    // Unparsable hours never match.
    entry.hour().map(|_| entry.risk_score)
}
