//! Text extraction from the supported document formats

use crate::error::{BoxError, Result, ResumeMatcherError};
use crate::input::file_detector::DocumentFormat;
use crate::input::normalizer::normalize_text;
use crate::processing::document::{Document, NormalizedText};
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCX_PACKAGE_RELS: &str = "_rels/.rels";
const DOCX_DEFAULT_BODY_PART: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

pub trait TextExtractor {
    /// Raw text of the document, units in document order.
    fn extract(&self, bytes: &[u8]) -> Result<String>;

    fn format(&self) -> DocumentFormat;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Pages are emitted in order; pages without text add nothing.
        // pdf-extract panics on some malformed font dictionaries.
        std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|payload| {
                ResumeMatcherError::extraction(
                    DocumentFormat::Pdf,
                    format!("PDF parser panicked: {}", panic_message(payload.as_ref())),
                )
            })?
            .map_err(|e| ResumeMatcherError::extraction(DocumentFormat::Pdf, e.to_string()))
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let xml = Self::body_xml(bytes)
            .map_err(|e| ResumeMatcherError::extraction(DocumentFormat::Docx, e))?;

        let paragraphs = Self::paragraphs(&xml)
            .map_err(|e| ResumeMatcherError::extraction(DocumentFormat::Docx, e))?;

        debug!("DOCX body holds {} paragraphs", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }
}

impl DocxExtractor {
    fn body_xml(bytes: &[u8]) -> std::result::Result<String, BoxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let body_part = match Self::read_part(&mut archive, DOCX_PACKAGE_RELS) {
            Ok(rels) => Self::main_part_name(&rels)?
                .unwrap_or_else(|| DOCX_DEFAULT_BODY_PART.to_string()),
            Err(_) => DOCX_DEFAULT_BODY_PART.to_string(),
        };
        debug!("DOCX main part: {}", body_part);

        Self::read_part(&mut archive, &body_part)
    }

    fn read_part(
        archive: &mut ZipArchive<Cursor<&[u8]>>,
        name: &str,
    ) -> std::result::Result<String, BoxError> {
        let mut part = archive.by_name(name)?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)?;
        Ok(xml)
    }

    /// Target of the package-level officeDocument relationship, if any.
    fn main_part_name(rels: &str) -> std::result::Result<Option<String>, quick_xml::Error> {
        let mut reader = Reader::from_str(rels);

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => {
                    let mut rel_type = None;
                    let mut target = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                            b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                            _ => {}
                        }
                    }

                    if let (Some(rel_type), Some(target)) = (rel_type, target) {
                        if rel_type.ends_with(OFFICE_DOCUMENT_REL) {
                            return Ok(Some(target.trim_start_matches('/').to_string()));
                        }
                    }
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Collect the text of every `w:p`, concatenating its `w:t` runs.
    ///
    /// Paragraphs nest inside text boxes; an inner paragraph is emitted when
    /// it closes and the enclosing one keeps its own text.
    fn paragraphs(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut open: Vec<String> = Vec::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:p" => open.push(String::new()),
                    b"w:t" => in_run_text = true,
                    _ => {}
                },
                Event::Empty(e) => match (e.name().as_ref(), open.last_mut()) {
                    (b"w:p", _) => paragraphs.push(String::new()),
                    (b"w:tab", Some(current)) => current.push('\t'),
                    (b"w:br" | b"w:cr", Some(current)) => current.push('\n'),
                    _ => {}
                },
                Event::Text(t) if in_run_text => {
                    if let Some(current) = open.last_mut() {
                        current.push_str(&t.unescape()?);
                    }
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    b"w:p" => {
                        if let Some(done) = open.pop() {
                            paragraphs.push(done);
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}

fn extractor_for(format: DocumentFormat) -> &'static dyn TextExtractor {
    match format {
        DocumentFormat::Pdf => &PdfExtractor,
        DocumentFormat::Docx => &DocxExtractor,
    }
}

/// Extract and normalize the text of a document.
///
/// An empty result is not an error here; callers decide whether a document
/// without text is acceptable.
pub fn extract_text(document: &Document) -> Result<NormalizedText> {
    let extractor = extractor_for(document.format());
    debug!(
        "Extracting {} text from '{}' ({} bytes)",
        extractor.format(),
        document.name(),
        document.size()
    );

    let raw = extractor.extract(document.content())?;
    Ok(normalize_text(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(paragraphs: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            paragraphs
        )
    }

    #[test]
    fn test_docx_paragraph_order() {
        let xml = body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t xml:space=\"preserve\">Python </w:t></w:r><w:r><w:t>&amp; Docker</w:t></w:r></w:p>",
        );

        let paragraphs = DocxExtractor::paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "Python & Docker"]);
    }

    #[test]
    fn test_docx_tabs_breaks_and_empty_paragraphs() {
        let xml = body(
            "<w:p/>\
             <w:p><w:r><w:t>Skills</w:t><w:tab/><w:t>AWS</w:t><w:br/><w:t>Linux</w:t></w:r></w:p>\
             <w:p><w:r><w:drawing/></w:r></w:p>",
        );

        let paragraphs = DocxExtractor::paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["", "Skills\tAWS\nLinux", ""]);
    }

    #[test]
    fn test_docx_ignores_non_run_text() {
        let xml = body("<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr><w:r><w:t>Summary</w:t></w:r></w:p>");

        let paragraphs = DocxExtractor::paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Summary"]);
    }

    #[test]
    fn test_docx_text_box_keeps_enclosing_paragraph() {
        let xml = body(
            "<w:p><w:r><w:t>Python developer</w:t></w:r>\
             <w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Sidebar</w:t></w:r></w:p></w:txbxContent></w:pict></w:r>\
             <w:r><w:t xml:space=\"preserve\"> with AWS</w:t></w:r></w:p>",
        );

        let paragraphs = DocxExtractor::paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Sidebar", "Python developer with AWS"]);
    }

    #[test]
    fn test_docx_main_part_from_relationships() {
        let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="/word/document2.xml"/>
</Relationships>"#;

        assert_eq!(
            DocxExtractor::main_part_name(rels).unwrap().as_deref(),
            Some("word/document2.xml")
        );
        assert_eq!(DocxExtractor::main_part_name("<Relationships/>").unwrap(), None);
    }

    #[test]
    fn test_docx_rejects_non_zip_bytes() {
        let err = DocxExtractor.extract(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(
            err,
            ResumeMatcherError::ExtractionFailed { format: DocumentFormat::Docx, .. }
        ));
    }

    #[test]
    fn test_pdf_rejects_garbage() {
        let document = Document::new("broken.pdf", DocumentFormat::Pdf, b"not a pdf at all".to_vec());

        let err = extract_text(&document).unwrap_err();
        assert!(matches!(
            err,
            ResumeMatcherError::ExtractionFailed { format: DocumentFormat::Pdf, .. }
        ));
    }

    #[test]
    fn test_extractor_routing() {
        for format in DocumentFormat::ALL {
            assert_eq!(extractor_for(format).format(), format);
        }
    }
}
