//! Document format detection

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The closed set of document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 2] = [DocumentFormat::Pdf, DocumentFormat::Docx];

    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "'{}' (only PDF and DOCX files allowed)",
                other
            ))),
        }
    }

    pub fn from_content_type(content_type: &str) -> Result<Self> {
        // Ignore parameters such as "; charset=binary"
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match mime.as_str() {
            PDF_MIME => Ok(DocumentFormat::Pdf),
            DOCX_MIME => Ok(DocumentFormat::Docx),
            _ => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "content type '{}' (only PDF and DOCX files allowed)",
                content_type
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeMatcherError::UnsupportedFormat(format!(
                    "file has no extension: {}",
                    path.display()
                ))
            })?;

        Self::from_extension(extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => PDF_MIME,
            DocumentFormat::Docx => DOCX_MIME,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(DocumentFormat::from_extension("pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension(".docx").unwrap(), DocumentFormat::Docx);
    }

    #[test]
    fn test_unsupported_extensions() {
        for ext in ["txt", "md", "doc", ""] {
            let err = DocumentFormat::from_extension(ext).unwrap_err();
            assert!(matches!(err, ResumeMatcherError::UnsupportedFormat(_)), "{ext}");
        }
    }

    #[test]
    fn test_content_type_detection() {
        assert_eq!(
            DocumentFormat::from_content_type("application/pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_content_type(&format!("{}; charset=binary", DOCX_MIME)).unwrap(),
            DocumentFormat::Docx
        );
        assert!(DocumentFormat::from_content_type("text/plain").is_err());
    }

    #[test]
    fn test_path_detection() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv/Jane_Doe.Docx")).unwrap(),
            DocumentFormat::Docx
        );
        assert!(DocumentFormat::from_path(Path::new("resume")).is_err());
        assert!(DocumentFormat::from_path(Path::new("resume.txt")).is_err());
    }

    #[test]
    fn test_mime_round_trip() {
        for format in DocumentFormat::ALL {
            assert_eq!(DocumentFormat::from_content_type(format.mime_type()).unwrap(), format);
            assert_eq!(DocumentFormat::from_extension(format.extension()).unwrap(), format);
        }
    }
}
