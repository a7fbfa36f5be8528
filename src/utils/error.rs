use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Content source returned {status} for {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid rule pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Expected structural marker not found (rule '{rule}')")]
    MissingMarker { rule: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::RequestError(_) | ConvertError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            ConvertError::IoError(_) => ErrorCategory::Storage,
            ConvertError::PatternError(_) | ConvertError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ConvertError::MissingMarker { .. } => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::RequestError(_) | ConvertError::HttpStatusError { .. } => {
                ErrorSeverity::Medium
            }
            ConvertError::InvalidConfigValueError { .. } | ConvertError::MissingMarker { .. } => {
                ErrorSeverity::High
            }
            ConvertError::IoError(_) | ConvertError::PatternError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::RequestError(e) => format!("Could not reach the document host: {}", e),
            ConvertError::HttpStatusError { url, status } => {
                format!("Document could not be fetched ({}): {}", status, url)
            }
            ConvertError::IoError(e) => format!("Could not write the output file: {}", e),
            ConvertError::PatternError(e) => format!("A built-in rule failed to compile: {}", e),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid argument '{}': {}", field, reason)
            }
            ConvertError::MissingMarker { rule } => format!(
                "The page does not contain the markup expected by rule '{}'",
                rule
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::RequestError(_) => "Check your network connection and try again",
            ConvertError::HttpStatusError { status: 404, .. } => {
                "Check the --file name; it must match a Markdown file without the .md extension"
            }
            ConvertError::HttpStatusError { .. } => "The host may be unavailable; try again later",
            ConvertError::IoError(_) => "Check permissions and free space in the output directory",
            ConvertError::PatternError(_) => "This is a bug; please report it",
            ConvertError::InvalidConfigValueError { .. } => "Run with --help to see valid arguments",
            ConvertError::MissingMarker { .. } => {
                "The page layout may have changed; rerun without --strict to keep the raw content"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
