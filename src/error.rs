//! Error handling for ensguard

use thiserror::Error;

/// Main error type for ensguard
#[derive(Error, Debug, Clone)]
pub enum GuardError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl GuardError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Attach a path to an IO error, leaving other variants untouched
    pub fn with_path(self, path: impl Into<String>) -> Self {
        match self {
            Self::Io { message, .. } => Self::Io {
                message,
                path: Some(path.into()),
            },
            other => other,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Pass a non-empty label such as `vitalik`", message)
            }
            Self::Serialization { message } => {
                format!("❌ Could not serialize results: {}", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
        }
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for GuardError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GuardError>;

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::GuardError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::GuardError::validation(format!($fmt, $($arg)*))
    };
}
