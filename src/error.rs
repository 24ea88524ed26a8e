//! Error handling for the resume matcher

use crate::input::file_detector::DocumentFormat;
use thiserror::Error;

/// Boxed cause carried by extraction failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format} document: {source}")]
    ExtractionFailed {
        format: DocumentFormat,
        #[source]
        source: BoxError,
    },

    #[error("Could not extract text from {0}")]
    EmptyExtraction(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeMatcherError {
    pub(crate) fn extraction(format: DocumentFormat, source: impl Into<BoxError>) -> Self {
        ResumeMatcherError::ExtractionFailed {
            format,
            source: source.into(),
        }
    }

    /// Whether the error stems from bad caller input rather than a crash.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ResumeMatcherError::UnsupportedFormat(_)
                | ResumeMatcherError::EmptyExtraction(_)
                | ResumeMatcherError::EmptyInput(_)
                | ResumeMatcherError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::Processing(err.to_string())
    }
}
