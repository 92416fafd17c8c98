use chrono::{Local, Timelike};
use clap::Parser;
use std::io::Write;
use zone_risk::adapters::report;
use zone_risk::domain::ports::ConfigProvider;
use zone_risk::utils::error::ErrorSeverity;
use zone_risk::utils::{logger, validation::Validate};
use zone_risk::{
    AdjustmentTable, CliConfig, HttpZoneSource, RiskEngine, RiskError, ScoringPipeline,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ zone-risk failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> Result<(), RiskError> {
    let config = cli.load_config()?;

    if cli.json_logs || config.json_logs() {
        let level = if cli.verbose {
            Some("debug")
        } else {
            config.log_level()
        };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting zone-risk");
    tracing::debug!("CLI config: {:?}", cli);

    cli.validate()?;
    config.validate()?;

    let now = Local::now().naive_local();
    let current_hour = cli.hour.unwrap_or_else(|| now.hour());
    let mode = cli.mode();

    let pipeline = ScoringPipeline::new(AdjustmentTable::new(config.adjustments()));
    tracing::debug!(
        "Forecast table has {} zone adjustments",
        pipeline.adjustments().len()
    );

    let source = HttpZoneSource::new(config)?;
    let engine = RiskEngine::new(source, pipeline);
    let snapshot = engine.load_snapshot().await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(notice) = &snapshot.notice {
        report::write_notice(&mut std::io::stderr(), notice)?;
    }

    match cli.zone {
        Some(zone_id) => match snapshot.find(zone_id) {
            Some(zone) => {
                let scored = engine.pipeline().score_zone(zone, mode, current_hour);
                report::write_zone_detail(&mut out, &scored, mode)?;
            }
            None => {
                tracing::warn!("Zone {} not found in snapshot", zone_id);
                writeln!(out, "Zone {} not found", zone_id)?;
            }
        },
        None => {
            let board = engine.evaluate(&snapshot, mode, current_hour);
            let header_now = report::header_time(now, cli.hour);
            report::write_board(&mut out, &board, cli.format, header_now)?;
        }
    }

    tracing::info!("✅ Board rendered for hour {} ({:?})", current_hour, mode);
    Ok(())
}
