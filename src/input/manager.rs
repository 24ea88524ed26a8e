//! Input manager for loading documents from disk

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::DocumentFormat;
use crate::processing::document::Document;
use log::info;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    max_document_bytes: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

    pub fn new() -> Self {
        Self {
            max_document_bytes: Self::DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    pub fn with_max_document_bytes(mut self, limit: u64) -> Self {
        self.max_document_bytes = limit;
        self
    }

    /// Read a resume document, deriving its format from the file extension.
    pub async fn load_document(&self, path: &Path) -> Result<Document> {
        // Refuse unsupported formats before touching the file
        let format = DocumentFormat::from_path(path)?;

        let metadata = fs::metadata(path).await.map_err(|_| {
            ResumeMatcherError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        if metadata.len() > self.max_document_bytes {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "{} is {} bytes, above the {} byte limit",
                path.display(),
                metadata.len(),
                self.max_document_bytes
            )));
        }

        info!("Reading {} document: {}", format, path.display());
        let content = fs::read(path).await?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Document::new(name, format, content))
    }

    /// Read a plain text job description.
    pub async fn read_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading job description: {}", path.display());
        let text = fs::read_to_string(path).await?;
        Ok(text)
    }
}
