//! Analysis pipeline combining extraction, similarity and skill diffing

use crate::error::{Result, ResumeMatcherError};
use crate::input::text_extractor::extract_text;
use crate::processing::document::{Document, NormalizedText};
use crate::processing::similarity::compute_similarity;
use crate::processing::skills::SkillCatalog;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of one resume/job comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Similarity in percent, two decimals.
    pub match_score: f64,
    pub found_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}

pub struct Analyzer {
    catalog: &'static SkillCatalog,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            catalog: SkillCatalog::global(),
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        self.catalog
    }

    /// Extract the resume text and compare it against the job description.
    pub fn analyze(&self, resume: &Document, job_text: &str) -> Result<AnalysisResult> {
        if job_text.trim().is_empty() {
            return Err(ResumeMatcherError::EmptyInput("job description".to_string()));
        }

        let resume_text = extract_text(resume)?;
        if resume_text.is_empty() {
            return Err(ResumeMatcherError::EmptyExtraction(resume.name().to_string()));
        }
        debug!(
            "Extracted {} words from '{}'",
            resume_text.word_count(),
            resume.name()
        );

        self.analyze_text(&resume_text, job_text)
    }

    /// Compare already extracted resume text against the job description.
    pub fn analyze_text(&self, resume_text: &NormalizedText, job_text: &str) -> Result<AnalysisResult> {
        let match_score = compute_similarity(resume_text.as_str(), job_text)?;

        let found_skills = self.catalog.extract_skills(resume_text.as_str());
        let missing_skills = self.catalog.find_missing_skills(&found_skills, job_text);
        debug!(
            "Skills found: {:?}, missing: {:?}",
            found_skills, missing_skills
        );

        info!(
            "Match score {:.2}% ({} skills found, {} missing)",
            match_score,
            found_skills.len(),
            missing_skills.len()
        );

        Ok(AnalysisResult {
            match_score,
            found_skills,
            missing_skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::DocumentFormat;
    use crate::input::normalizer::normalize_text;

    #[test]
    fn test_analyze_text() {
        let analyzer = Analyzer::new();
        let resume = normalize_text("Experienced Python developer with AWS and Docker skills");

        let result = analyzer
            .analyze_text(&resume, "Looking for Python, AWS, Kubernetes expert")
            .unwrap();

        assert!(result.match_score > 0.0);
        assert!(result.found_skills.contains("python"));
        assert!(result.found_skills.contains("aws"));
        assert!(result.found_skills.contains("docker"));
        assert_eq!(result.missing_skills.iter().collect::<Vec<_>>(), vec!["kubernetes"]);
    }

    #[test]
    fn test_empty_job_text_checked_before_extraction() {
        let analyzer = Analyzer::new();
        let resume = Document::new("broken.pdf", DocumentFormat::Pdf, b"garbage".to_vec());

        let err = analyzer.analyze(&resume, "   ").unwrap_err();
        assert!(matches!(err, ResumeMatcherError::EmptyInput(_)));
    }

    #[test]
    fn test_extraction_failure_propagates() {
        let analyzer = Analyzer::new();
        let resume = Document::new("broken.docx", DocumentFormat::Docx, b"garbage".to_vec());

        let err = analyzer.analyze(&resume, "python developer").unwrap_err();
        assert!(matches!(err, ResumeMatcherError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_result_wire_names() {
        let result = AnalysisResult {
            match_score: 42.5,
            found_skills: ["python".to_string()].into_iter().collect(),
            missing_skills: BTreeSet::new(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["match_score"], 42.5);
        assert_eq!(json["found_skills"][0], "python");
        assert!(json["missing_skills"].as_array().unwrap().is_empty());
    }
}
