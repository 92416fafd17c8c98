use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Zone source {endpoint} answered with status {status}")]
    StatusError { status: u16, endpoint: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RiskError::HttpError(_) | RiskError::StatusError { .. } => ErrorCategory::Network,
            RiskError::CsvError(_) | RiskError::SerializationError(_) => ErrorCategory::Data,
            RiskError::ConfigError { .. }
            | RiskError::ConfigValidationError { .. }
            | RiskError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RiskError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RiskError::HttpError(_) => "Check that the zone backend is running and reachable",
            RiskError::StatusError { .. } => {
                "Inspect the backend logs; the endpoint rejected the request"
            }
            RiskError::CsvError(_) | RiskError::SerializationError(_) => {
                "Retry with --format text to bypass the structured writer"
            }
            RiskError::IoError(_) => "Check file permissions and available disk space",
            RiskError::ConfigError { .. } | RiskError::ConfigValidationError { .. } => {
                "Fix the TOML configuration file and try again"
            }
            RiskError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value in the configuration or command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Zone server unreachable: {}", self),
            ErrorCategory::Data => format!("Could not render zone data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
