//! Input processing module
//! Handles format detection, text extraction, normalization and file loading

pub mod file_detector;
pub mod manager;
pub mod normalizer;
pub mod text_extractor;

pub use file_detector::DocumentFormat;
pub use manager::InputManager;
pub use normalizer::normalize_text;
pub use text_extractor::extract_text;
