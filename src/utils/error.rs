use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Movie with title '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("Movie with title '{title}' not found")]
    MovieNotFound { title: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GuideError {
    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GuideError::DuplicateTitle { title } => {
                format!("A movie titled '{}' is already in the guide", title)
            }
            GuideError::MovieNotFound { title } => {
                format!("No movie titled '{}' is in the guide", title)
            }
            GuideError::IoError(e) => format!("Could not read or write a file: {}", e),
            GuideError::SerializationError(_) | GuideError::CsvError(_) => {
                "Could not render the report".to_string()
            }
            GuideError::ConfigError { message } => format!("Configuration problem: {}", message),
            GuideError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GuideError::DuplicateTitle { .. } => {
                "Remove the existing entry first or use a distinct title"
            }
            GuideError::MovieNotFound { .. } => "Check the title spelling; lookups are exact",
            GuideError::IoError(_) => "Check that the path exists and is readable",
            GuideError::SerializationError(_) | GuideError::CsvError(_) => {
                "Try the plain text report format"
            }
            GuideError::ConfigError { .. } | GuideError::InvalidConfigValueError { .. } => {
                "Fix the catalog file or command line arguments and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
