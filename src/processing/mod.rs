//! Text processing and analysis module

pub mod analyzer;
pub mod document;
pub mod similarity;
pub mod skills;
pub mod text_processor;

pub use analyzer::{AnalysisResult, Analyzer};
pub use document::{Document, NormalizedText};
pub use similarity::compute_similarity;
pub use skills::{extract_skills, find_missing_skills, SkillCatalog};
