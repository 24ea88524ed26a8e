//! Resume matcher library
//!
//! Extracts normalized text from PDF and DOCX resumes, scores them against a
//! job description with TF-IDF cosine similarity and reports which catalog
//! skills are present or missing.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use input::{extract_text, DocumentFormat};
pub use processing::{
    compute_similarity, extract_skills, find_missing_skills, AnalysisResult, Analyzer, Document,
    NormalizedText,
};
