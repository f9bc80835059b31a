//! Error types for riffwave

use thiserror::Error;

/// Result type alias for riffwave operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for riffwave
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed container (bad magic, bad chunk layout, bad format tag)
    #[error("Format error: {0}")]
    Format(String),

    /// Recognized but unsupported stream parameters
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Invalid encode input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A read would pass the end of the buffer
    #[error("Truncated data: need {need} bytes, have {have}")]
    TruncatedData { need: usize, have: usize },
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
