//! Document structures shared by the extractor and the analyzer

use crate::error::Result;
use crate::input::file_detector::DocumentFormat;
use serde::Serialize;
use std::fmt;

/// An uploaded document: raw bytes plus the declared format.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    format: DocumentFormat,
    content: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, format: DocumentFormat, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            format,
            content,
        }
    }

    /// Build a document from a caller-supplied format tag (file extension or
    /// MIME type). Unknown tags are refused before any bytes are looked at.
    pub fn from_tag(name: impl Into<String>, tag: &str, content: Vec<u8>) -> Result<Self> {
        let format = if tag.contains('/') {
            DocumentFormat::from_content_type(tag)?
        } else {
            DocumentFormat::from_extension(tag)?
        };

        Ok(Self::new(name, format, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Lowercase printable-ASCII text with single-space separators and no
/// leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Only the normalizer may vouch for the invariants.
    pub(crate) fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn word_count(&self) -> usize {
        self.0.split(' ').filter(|w| !w.is_empty()).count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeMatcherError;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("resume.pdf", DocumentFormat::Pdf, b"%PDF-1.4".to_vec());

        assert_eq!(doc.name(), "resume.pdf");
        assert_eq!(doc.format(), DocumentFormat::Pdf);
        assert_eq!(doc.size(), 8);
    }

    #[test]
    fn test_document_from_tag() {
        let doc = Document::from_tag("cv", "DOCX", Vec::new()).unwrap();
        assert_eq!(doc.format(), DocumentFormat::Docx);

        let doc = Document::from_tag("cv", "application/pdf", Vec::new()).unwrap();
        assert_eq!(doc.format(), DocumentFormat::Pdf);
    }

    #[test]
    fn test_plain_text_tag_is_refused() {
        let err = Document::from_tag("notes.txt", "txt", b"python".to_vec()).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::UnsupportedFormat(_)));

        let err = Document::from_tag("notes.txt", "text/plain", b"python".to_vec()).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_normalized_text_accessors() {
        let text = NormalizedText::new_unchecked("rust and python".to_string());

        assert_eq!(text.word_count(), 3);
        assert_eq!(text.len(), 15);
        assert!(!text.is_empty());
        assert!(NormalizedText::default().is_empty());
        assert_eq!(NormalizedText::default().word_count(), 0);
    }
}
