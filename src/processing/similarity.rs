//! TF-IDF cosine similarity between a resume and a job description

use crate::error::{Result, ResumeMatcherError};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Dense TF-IDF vectors over a sorted shared vocabulary.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    /// Fit on `documents` as the whole corpus and transform them.
    ///
    /// Raw counts, smoothed idf `ln((1 + n) / (1 + df)) + 1`, rows L2-normalized.
    pub fn fit_transform(processor: &TextProcessor, documents: &[&str]) -> Self {
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for token in processor.tokenize(doc) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let vocabulary: Vec<String> = counts
            .iter()
            .flat_map(|tf| tf.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = counts.iter().filter(|tf| tf.contains_key(term)).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, weight)| tf.get(term).copied().unwrap_or(0) as f64 * weight)
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocabulary, rows }
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    // A zero row stays zero
    if norm > 0.0 {
        row.iter_mut().for_each(|v| *v /= norm);
    }
}

/// Cosine of the angle between two vectors; 0.0 when either is the zero vector.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Two decimals, exact halves going to the even neighbour.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Match score in percent (0 to 100, two decimals).
pub fn compute_similarity(resume_text: &str, job_text: &str) -> Result<f64> {
    if resume_text.trim().is_empty() {
        return Err(ResumeMatcherError::EmptyInput("resume text".to_string()));
    }
    if job_text.trim().is_empty() {
        return Err(ResumeMatcherError::EmptyInput("job description".to_string()));
    }

    let matrix = TfIdfMatrix::fit_transform(TextProcessor::shared(), &[resume_text, job_text]);
    let similarity = cosine_similarity(&matrix.rows[0], &matrix.rows[1]);
    debug!(
        "TF-IDF vocabulary of {} terms, cosine {:.4}",
        matrix.vocabulary.len(),
        similarity
    );

    Ok(round_to_hundredths(similarity * 100.0))
}
