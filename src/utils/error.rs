use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeasonError {
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Duplicate team '{name}' at line {line}")]
    DuplicateKey { name: String, line: u64 },

    #[error("Unknown team '{name}' referenced at line {line}")]
    UnknownTeam { name: String, line: u64 },

    #[error("Malformed date '{value}' at line {line}, expected DD-MM-YYYY")]
    MalformedDate { value: String, line: u64 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SeasonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeasonError::MalformedRecord { .. }
            | SeasonError::DuplicateKey { .. }
            | SeasonError::UnknownTeam { .. }
            | SeasonError::MalformedDate { .. }
            | SeasonError::CsvError(_) => ErrorCategory::Data,
            SeasonError::IoError(_) | SeasonError::SerializationError(_) => ErrorCategory::Io,
            SeasonError::ConfigError { .. }
            | SeasonError::InvalidConfigValueError { .. }
            | SeasonError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 資料錯誤: 整季載入中止
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SeasonError::MalformedRecord { line, .. } => format!(
                "Check line {} has name, conference, division, latitude and longitude \
                 (or date, home, away for fixtures)",
                line
            ),
            SeasonError::DuplicateKey { name, .. } => {
                format!("Remove the repeated row for team '{}'", name)
            }
            SeasonError::UnknownTeam { name, .. } => format!(
                "Add '{}' to the teams file or fix the spelling in the schedule",
                name
            ),
            SeasonError::MalformedDate { line, .. } => {
                format!("Write the date on line {} as DD-MM-YYYY, e.g. 01-11-2023", line)
            }
            SeasonError::CsvError(_) => {
                "Make sure the file is comma-delimited UTF-8 text".to_string()
            }
            SeasonError::IoError(_) => "Check the file paths and permissions".to_string(),
            SeasonError::SerializationError(_) => "Check the report output settings".to_string(),
            SeasonError::ConfigError { .. }
            | SeasonError::InvalidConfigValueError { .. }
            | SeasonError::MissingConfigError { .. } => {
                "Review the TOML configuration or command line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("Season data could not be loaded: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

impl ErrorSeverity {
    /// Process exit code the CLI uses for this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeasonError>;
