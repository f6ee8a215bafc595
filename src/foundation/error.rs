use std::path::PathBuf;

/// Convenience result type used across printcal.
pub type CalResult<T> = Result<T, CalError>;

/// Top-level error taxonomy used by layout, rendering and page APIs.
#[derive(thiserror::Error, Debug)]
pub enum CalError {
    /// Rejected caller input: bad month, page size, weekday or paper token.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface cannot honour a request (unknown font, unencodable text).
    #[error("render error: {0}")]
    Render(String),

    /// Reading or writing a file failed.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Errors when serializing or deserializing configuration data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalError {
    /// Build a [`CalError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CalError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CalError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`CalError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
