//! Report structures wrapping an analysis result

use crate::config::AnalysisConfig;
use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,

    /// Qualitative band for the match score
    pub verdict: MatchVerdict,

    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub resume_name: String,
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchVerdict {
    Strong,
    Moderate,
    Weak,
    Poor,
}

impl MatchVerdict {
    pub fn from_score(score: f64, bands: &AnalysisConfig) -> Self {
        if score >= bands.strong_match_threshold {
            MatchVerdict::Strong
        } else if score >= bands.moderate_match_threshold {
            MatchVerdict::Moderate
        } else if score >= bands.weak_match_threshold {
            MatchVerdict::Weak
        } else {
            MatchVerdict::Poor
        }
    }
}

impl fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchVerdict::Strong => write!(f, "Strong match"),
            MatchVerdict::Moderate => write!(f, "Moderate match"),
            MatchVerdict::Weak => write!(f, "Weak match"),
            MatchVerdict::Poor => write!(f, "Poor match"),
        }
    }
}

impl AnalysisReport {
    pub fn new(resume_name: impl Into<String>, result: AnalysisResult, bands: &AnalysisConfig) -> Self {
        Self {
            metadata: ReportMetadata {
                resume_name: resume_name.into(),
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            verdict: MatchVerdict::from_score(result.match_score, bands),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_verdict_bands() {
        let bands = Config::default().analysis;

        assert_eq!(MatchVerdict::from_score(100.0, &bands), MatchVerdict::Strong);
        assert_eq!(MatchVerdict::from_score(75.0, &bands), MatchVerdict::Strong);
        assert_eq!(MatchVerdict::from_score(74.99, &bands), MatchVerdict::Moderate);
        assert_eq!(MatchVerdict::from_score(25.0, &bands), MatchVerdict::Weak);
        assert_eq!(MatchVerdict::from_score(0.0, &bands), MatchVerdict::Poor);
    }
}
