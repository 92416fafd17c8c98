use serde::{Deserialize, Deserializer, Serialize};

pub type ZoneId = i64;

/// Risk score on the 0..=100 scale.
pub type Score = i32;

/// A risk zone as served by the zone backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub walk_time_from_nis: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    /// Baseline score, used whenever the time series has no answer.
    #[serde(default, deserialize_with = "deserialize_score")]
    pub risk_score: Score,
    #[serde(
        default,
        deserialize_with = "deserialize_time_series",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_series: Option<TimeSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safest_route_from_nis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_risk: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

/// A nearby place suggested instead of the zone itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub risk_score: Score,
    #[serde(default)]
    pub safe_time: String,
    #[serde(default)]
    pub walk_time: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub ai_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    /// Wall-clock label, normally "HH:MM".
    #[serde(default)]
    pub time: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub risk_score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowd_density: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_chaos: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_factor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_peak_factor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

impl TimeSeriesEntry {
    pub fn new(time: impl Into<String>, risk_score: Score) -> Self {
        Self {
            time: time.into(),
            risk_score,
            crowd_density: None,
            movement_chaos: None,
            weather_factor: None,
            time_peak_factor: None,
            risk_level: None,
        }
    }

    /// Hour of day read from the text before the first `:`.
    ///
    /// Leading whitespace and an optional sign are skipped, then the longest
    /// run of ASCII digits is taken, so "8am" and "14h00" read as 8 and 14.
    /// `None` when there are no digits or the value is negative. An entry
    /// without an hour never matches during resolution.
    pub fn hour(&self) -> Option<u32> {
        let head = self.time.split(':').next().unwrap_or_default().trim_start();
        let (negative, rest) = match head.as_bytes().first() {
            Some(b'-') => (true, &head[1..]),
            Some(b'+') => (false, &head[1..]),
            _ => (false, head),
        };
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }

        // Digits only, so a failed parse means overflow.
        let hour = rest[..end].parse().unwrap_or(u32::MAX);
        if negative && hour != 0 {
            None
        } else {
            Some(hour)
        }
    }
}

/// Hourly scores of a zone.
///
/// Invariant: entries with a parsable hour are ordered by non-decreasing hour
/// and come before every entry whose hour cannot be parsed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TimeSeries {
    entries: Vec<TimeSeriesEntry>,
}

impl TimeSeries {
    /// Builds a series, stably sorting it by hour if it arrives out of order.
    pub fn from_entries(mut entries: Vec<TimeSeriesEntry>) -> Self {
        if !is_hour_ordered(&entries) {
            tracing::warn!(
                "Time series with {} entries is not ordered by hour, sorting it",
                entries.len()
            );
            entries.sort_by_key(|entry| match entry.hour() {
                Some(hour) => (false, hour),
                None => (true, 0),
            });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[TimeSeriesEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_hour_ordered(entries: &[TimeSeriesEntry]) -> bool {
    let mut last = None;
    let mut seen_unparsable = false;
    for hour in entries.iter().map(TimeSeriesEntry::hour) {
        match hour {
            None => seen_unparsable = true,
            Some(_) if seen_unparsable => return false,
            Some(h) => {
                if last.is_some_and(|prev| h < prev) {
                    return false;
                }
                last = Some(h);
            }
        }
    }
    true
}

/// Whether the board shows the present or the one-hour forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMode {
    #[default]
    Now,
    NextHour,
}

impl ForecastMode {
    pub fn from_future_flag(future: bool) -> Self {
        if future {
            ForecastMode::NextHour
        } else {
            ForecastMode::Now
        }
    }

    pub fn is_forecast(self) -> bool {
        self == ForecastMode::NextHour
    }
}

/// Display bucket of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Severe,
    Warning,
    Safe,
}

/// A zone carrying the score computed for the requested mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredZone {
    #[serde(flatten)]
    pub zone: Zone,
    pub severity: Severity,
}

impl ScoredZone {
    pub fn id(&self) -> ZoneId {
        self.zone.id
    }

    pub fn risk_score(&self) -> Score {
        self.zone.risk_score
    }
}

/// Zones split for display: threats highest first, safe places lowest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RiskBoard {
    pub mode: ForecastMode,
    pub threats: Vec<ScoredZone>,
    pub safe_places: Vec<ScoredZone>,
}

impl RiskBoard {
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty() && self.safe_places.is_empty()
    }
}

/// Accepts integer or fractional JSON numbers; fractions are rounded.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Score, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as Score)
}

/// Anything other than a JSON array means "no series". Array items that do
/// not decode as an entry are dropped.
fn deserialize_time_series<'de, D>(deserializer: D) -> Result<Option<TimeSeries>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(None);
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<TimeSeriesEntry>(item) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!("Dropping malformed time series entry: {}", e),
        }
    }
    Ok(Some(TimeSeries::from_entries(entries)))
}
