use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("could not parse a birth date from {input:?}")]
    UnparseableDate { input: String },

    #[error("date {date} is out of range: {reason}")]
    DateOutOfRange { date: String, reason: String },

    #[error("no usable font in the configured search paths")]
    FontUnavailable,

    #[error("SVG build failed: {0}")]
    SvgError(#[from] usvg::Error),

    #[error("Rendering failed: {message}")]
    RenderFailure { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

impl MatrixError {
    /// Both date-failure kinds are reported to users identically; the
    /// distinction only exists for internal diagnostics.
    pub fn is_date_error(&self) -> bool {
        matches!(
            self,
            MatrixError::UnparseableDate { .. } | MatrixError::DateOutOfRange { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatrixError::UnparseableDate { .. } | MatrixError::DateOutOfRange { .. } => {
                "Не зміг прочитати дату 🤔 Спробуй так: 01.11.1998".to_string()
            }
            MatrixError::ConfigError { field, message } => {
                format!("Invalid configuration ({field}): {message}")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
