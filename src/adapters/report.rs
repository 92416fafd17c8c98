//! Board rendering for the terminal.

use crate::core::engine::ConnectivityNotice;
use crate::domain::model::{ForecastMode, RiskBoard, ScoredZone};
use crate::utils::error::Result;
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Clock shown in the header. A pinned hour replaces the wall-clock hour so the
/// header matches the hour the board was scored for.
pub fn header_time(now: NaiveDateTime, pinned_hour: Option<u32>) -> NaiveDateTime {
    pinned_hour
        .and_then(|hour| now.with_hour(hour))
        .unwrap_or(now)
}

/// "Now: 13:05" or, in forecast mode, "Forecast for 14:05".
pub fn header_line(mode: ForecastMode, now: NaiveDateTime) -> String {
    match mode {
        ForecastMode::Now => format!("Now: {}", now.format("%H:%M")),
        ForecastMode::NextHour => {
            format!("Forecast for {}", (now + Duration::hours(1)).format("%H:%M"))
        }
    }
}

pub fn threats_title(mode: ForecastMode) -> &'static str {
    match mode {
        ForecastMode::Now => "High Risk Areas",
        ForecastMode::NextHour => "Predicted Threats",
    }
}

pub fn write_board<W: Write>(
    out: &mut W,
    board: &RiskBoard,
    format: OutputFormat,
    now: NaiveDateTime,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, board, now),
        OutputFormat::Json => write_json(out, board, now),
        OutputFormat::Csv => write_csv(out, board),
    }
}

fn write_text<W: Write>(out: &mut W, board: &RiskBoard, now: NaiveDateTime) -> Result<()> {
    writeln!(out, "{}", header_line(board.mode, now))?;
    writeln!(out)?;
    writeln!(out, "{}", threats_title(board.mode).to_uppercase())?;
    if board.threats.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for zone in &board.threats {
        write_zone_line(out, zone)?;
    }
    writeln!(out)?;
    writeln!(out, "SAFE ZONES")?;
    if board.safe_places.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for zone in &board.safe_places {
        write_zone_line(out, zone)?;
    }
    Ok(())
}

fn write_zone_line<W: Write>(out: &mut W, zone: &ScoredZone) -> Result<()> {
    writeln!(
        out,
        "  {:<32} {:>3}%  [{}]",
        zone.zone.name,
        zone.risk_score(),
        zone.severity
    )?;
    if !zone.zone.description.is_empty() {
        writeln!(out, "      {}", zone.zone.description)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonBoard<'a> {
    header: String,
    #[serde(flatten)]
    board: &'a RiskBoard,
}

fn write_json<W: Write>(out: &mut W, board: &RiskBoard, now: NaiveDateTime) -> Result<()> {
    let doc = JsonBoard {
        header: header_line(board.mode, now),
        board,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, board: &RiskBoard) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["bucket", "id", "name", "risk_score", "severity"])?;

    let rows = board
        .threats
        .iter()
        .map(|zone| ("threat", zone))
        .chain(board.safe_places.iter().map(|zone| ("safe", zone)));
    for (bucket, zone) in rows {
        writer.write_record([
            bucket.to_string(),
            zone.id().to_string(),
            zone.zone.name.clone(),
            zone.risk_score().to_string(),
            zone.severity.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Detail view of one zone, with its suggested alternatives.
pub fn write_zone_detail<W: Write>(
    out: &mut W,
    zone: &ScoredZone,
    mode: ForecastMode,
) -> Result<()> {
    let label = match mode {
        ForecastMode::Now => "Current risk",
        ForecastMode::NextHour => "Forecast risk",
    };
    let z = &zone.zone;
    writeln!(out, "{} (#{})", z.name, z.id)?;
    writeln!(out, "{}: {}% [{}]", label, zone.risk_score(), zone.severity)?;
    if !z.description.is_empty() {
        writeln!(out, "{}", z.description)?;
    }
    if !z.walk_time_from_nis.is_empty() {
        writeln!(out, "Walk time from NIS: {}", z.walk_time_from_nis)?;
    }
    if let Some(route) = z.safest_route_from_nis.as_deref().filter(|r| !r.is_empty()) {
        writeln!(out, "Safest route: {}", route)?;
    }
    if let Some(safe_time) = z.safe_time.as_deref().filter(|t| !t.is_empty()) {
        writeln!(out, "Safe time: {}", safe_time)?;
    }
    if !z.alternatives.is_empty() {
        writeln!(out, "Alternatives:")?;
        for alt in &z.alternatives {
            writeln!(
                out,
                "  {} ({}) {}%  {}",
                alt.name, alt.kind, alt.risk_score, alt.ai_reason
            )?;
        }
    }
    Ok(())
}

pub fn write_notice<W: Write>(out: &mut W, notice: &ConnectivityNotice) -> Result<()> {
    writeln!(out, "No connection to the zone server ({}): {}", notice.source, notice.message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::ScoringPipeline;
    use crate::domain::model::Zone;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn board(mode: ForecastMode) -> RiskBoard {
        let zones: Vec<Zone> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "Station", "risk_score": 40, "description": "Busy at rush hour"},
            {"id": 2, "name": "Market", "risk_score": 80},
            {"id": 3, "name": "Park", "risk_score": 20},
            {"id": 4, "name": "Mall", "risk_score": 55}
        ]))
        .unwrap();
        ScoringPipeline::default().evaluate(&zones, mode, 12)
    }

    #[test]
    fn test_header_line() {
        assert_eq!(header_line(ForecastMode::Now, noon()), "Now: 12:30");
        assert_eq!(header_line(ForecastMode::NextHour, noon()), "Forecast for 13:30");

        let late = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(23, 15, 0)
            .unwrap();
        assert_eq!(header_line(ForecastMode::NextHour, late), "Forecast for 00:15");
    }

    #[test]
    fn test_header_follows_pinned_hour() {
        let pinned = header_time(noon(), Some(3));
        assert_eq!(header_line(ForecastMode::Now, pinned), "Now: 03:30");
        assert_eq!(header_line(ForecastMode::NextHour, pinned), "Forecast for 04:30");
        assert_eq!(header_time(noon(), None), noon());
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_board(&mut out, &board(ForecastMode::NextHour), OutputFormat::Text, noon()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Forecast for 13:30"));
        assert!(text.contains("PREDICTED THREATS"));
        let market = text.find("Market").unwrap();
        let mall = text.find("Mall").unwrap();
        let safe = text.find("SAFE ZONES").unwrap();
        let park = text.find("Park").unwrap();
        assert!(market < mall && mall < safe && safe < park);
        assert!(text.contains("[warning]"));
    }

    #[test]
    fn test_csv_report() {
        let mut out = Vec::new();
        write_board(&mut out, &board(ForecastMode::Now), OutputFormat::Csv, noon()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "bucket,id,name,risk_score,severity");
        assert_eq!(lines[1], "threat,2,Market,80,severe");
        assert_eq!(lines[2], "threat,4,Mall,55,warning");
        assert_eq!(lines[3], "safe,3,Park,20,safe");
        assert_eq!(lines[4], "safe,1,Station,40,safe");
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_board(&mut out, &board(ForecastMode::NextHour), OutputFormat::Json, noon()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["header"], "Forecast for 13:30");
        assert_eq!(value["mode"], "next_hour");
        assert_eq!(value["threats"][0]["id"], 2);
        assert_eq!(value["threats"][0]["risk_score"], 65);
        assert_eq!(value["safe_places"][0]["severity"], "safe");
    }

    #[test]
    fn test_zone_detail() {
        let zone: Zone = serde_json::from_value(serde_json::json!({
            "id": 2,
            "name": "Market",
            "risk_score": 80,
            "walk_time_from_nis": "9 min",
            "alternatives": [
                {"name": "Green Cafe", "type": "cafe", "risk_score": 12, "ai_reason": "quiet"}
            ]
        }))
        .unwrap();
        let scored = ScoringPipeline::default().score_zone(&zone, ForecastMode::NextHour, 10);

        let mut out = Vec::new();
        write_zone_detail(&mut out, &scored, ForecastMode::NextHour).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Market (#2)"));
        assert!(text.contains("Forecast risk: 65% [warning]"));
        assert!(text.contains("Walk time from NIS: 9 min"));
        assert!(text.contains("Green Cafe (cafe) 12%"));
    }
}
