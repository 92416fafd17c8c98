//! Threat / safe split of scored zones.

use crate::domain::model::{Score, ScoredZone};

/// Scores at or above this are threats.
pub const THREAT_THRESHOLD: Score = 50;

/// Returns `(threats, safe_places)`.
///
/// Threats are ordered by score descending, safe places ascending. Both sorts
/// are stable, so zones with equal scores keep their input order.
pub fn classify(scored: &[ScoredZone]) -> (Vec<ScoredZone>, Vec<ScoredZone>) {
    let (mut threats, mut safe_places): (Vec<ScoredZone>, Vec<ScoredZone>) = scored
        .iter()
        .cloned()
        .partition(|zone| zone.risk_score() >= THREAT_THRESHOLD);

    threats.sort_by(|a, b| b.risk_score().cmp(&a.risk_score()));
    safe_places.sort_by_key(ScoredZone::risk_score);

    (threats, safe_places)
}
