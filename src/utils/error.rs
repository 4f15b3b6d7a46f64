use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Unknown pattern: {name}")]
    UnknownPatternError { name: String },

    #[error("{field} cannot be an empty string")]
    EmptyValueError { field: String },

    #[error("Observer {observer} failed: {message}")]
    ObserverError { observer: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Demonstration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ShowcaseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShowcaseError::IoError(_) | ShowcaseError::SerializationError(_) => {
                ErrorCategory::System
            }
            ShowcaseError::ConfigParseError { .. }
            | ShowcaseError::InvalidConfigValueError { .. }
            | ShowcaseError::UnknownPatternError { .. } => ErrorCategory::Configuration,
            ShowcaseError::MissingFieldError { .. }
            | ShowcaseError::EmptyValueError { .. }
            | ShowcaseError::ObserverError { .. } => ErrorCategory::Demonstration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Demonstration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShowcaseError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            ShowcaseError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
            ShowcaseError::ConfigParseError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            ShowcaseError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            ShowcaseError::MissingFieldError { field } => {
                format!("Set '{}' before reading it", field)
            }
            ShowcaseError::UnknownPatternError { .. } => {
                "Run with --list to see the available patterns".to_string()
            }
            ShowcaseError::EmptyValueError { field } => {
                format!("Provide a non-empty value for '{}'", field)
            }
            ShowcaseError::ObserverError { observer, .. } => {
                format!("Remove or fix the '{}' observer", observer)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::System => format!("System error: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Demonstration => format!("Demonstration aborted: {}", self),
        }
    }

    /// Process exit code for this error, following its severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
