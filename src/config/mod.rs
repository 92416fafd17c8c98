pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::TomlConfig;
    use crate::adapters::report::OutputFormat;
    use crate::domain::model::{ForecastMode, ZoneId};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "zone-risk")]
    #[command(about = "Risk board for city zones, now or one hour ahead")]
    pub struct CliConfig {
        /// Zone endpoint; overrides the config file
        #[arg(long)]
        pub endpoint: Option<String>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Show the +1 hour forecast instead of the current view
        #[arg(long)]
        pub future: bool,

        /// Hour of day (0-23) to resolve scores for; defaults to local time
        #[arg(long)]
        pub hour: Option<u32>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Show a single zone in detail
        #[arg(long)]
        pub zone: Option<ZoneId>,

        /// Request timeout; overrides the config file
        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl CliConfig {
        pub fn mode(&self) -> ForecastMode {
            ForecastMode::from_future_flag(self.future)
        }

        /// Loads the config file (or defaults) and applies command-line
        /// overrides on top.
        pub fn load_config(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };
            self.apply_overrides(&mut config);
            Ok(config)
        }

        pub fn apply_overrides(&self, config: &mut TomlConfig) {
            if let Some(endpoint) = &self.endpoint {
                tracing::debug!("Endpoint overridden to: {}", endpoint);
                config.source.endpoint = endpoint.clone();
            }
            if let Some(timeout) = self.timeout_seconds {
                config.source.timeout_seconds = Some(timeout);
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(hour) = self.hour {
                validation::validate_range("hour", hour, 0, 23)?;
            }
            if let Some(endpoint) = &self.endpoint {
                validation::validate_url("endpoint", endpoint)?;
            }
            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
