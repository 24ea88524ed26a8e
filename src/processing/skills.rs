//! Skill catalog and substring skill matching

use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "c++", "javascript", "sql", "mysql", "postgresql", "mongodb",
    "react", "angular", "vue", "node.js", "django", "flask", "spring", "html", "css",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "linux",
    "machine learning", "deep learning", "nlp", "computer vision", "tensorflow", "pytorch",
    "pandas", "numpy", "scikit-learn", "matplotlib", "seaborn", "excel", "power bi", "tableau",
];

static CATALOG: LazyLock<SkillCatalog> = LazyLock::new(SkillCatalog::build);

/// Fixed, ordered set of known skill phrases.
///
/// A skill is present when it occurs anywhere in the lowercased text as a
/// contiguous substring, so "java" is also found inside "javascript".
pub struct SkillCatalog {
    skills: &'static [&'static str],
    matcher: AhoCorasick,
}

impl SkillCatalog {
    fn build() -> Self {
        // Standard match kind so overlapping occurrences are all reported
        let matcher = AhoCorasick::new(DEFAULT_SKILLS).expect("Invalid skill catalog patterns");

        Self {
            skills: DEFAULT_SKILLS,
            matcher,
        }
    }

    pub fn global() -> &'static SkillCatalog {
        &CATALOG
    }

    pub fn skills(&self) -> &[&'static str] {
        self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(&skill)
    }

    /// Catalog entries occurring in `text`.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();

        self.matcher
            .find_overlapping_iter(&lowered)
            .map(|m| self.skills[m.pattern().as_usize()].to_string())
            .collect()
    }

    /// Catalog entries occurring in `job_text` but absent from `found`.
    pub fn find_missing_skills(&self, found: &BTreeSet<String>, job_text: &str) -> BTreeSet<String> {
        self.extract_skills(job_text)
            .into_iter()
            .filter(|skill| !found.contains(skill))
            .collect()
    }
}

pub fn extract_skills(text: &str) -> BTreeSet<String> {
    SkillCatalog::global().extract_skills(text)
}

pub fn find_missing_skills(found: &BTreeSet<String>, job_text: &str) -> BTreeSet<String> {
    SkillCatalog::global().find_missing_skills(found, job_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resume_and_job_scenario() {
        let found = extract_skills("Experienced Python developer with AWS and Docker skills");
        assert_eq!(found, set(&["aws", "docker", "python"]));

        let missing = find_missing_skills(&found, "Looking for Python, AWS, Kubernetes expert");
        assert_eq!(missing, set(&["kubernetes"]));
    }

    #[test]
    fn test_substring_matching_overlaps() {
        let found = extract_skills("JavaScript and PostgreSQL");

        assert!(found.contains("javascript"));
        assert!(found.contains("java"));
        assert!(found.contains("postgresql"));
        assert!(found.contains("sql"));
        assert!(!found.contains("mysql"));
    }

    #[test]
    fn test_multi_word_and_punctuated_skills() {
        let found = extract_skills("Machine Learning with Scikit-Learn, Node.js, C++ and Power BI");

        for skill in ["machine learning", "scikit-learn", "node.js", "c++", "power bi"] {
            assert!(found.contains(skill), "{skill} missing from {found:?}");
        }
        assert!(!found.contains("deep learning"));
    }

    #[test]
    fn test_no_duplicates_and_catalog_membership() {
        let found = extract_skills("python python PYTHON docker docker");
        assert_eq!(found, set(&["docker", "python"]));

        let catalog = SkillCatalog::global();
        assert!(found.iter().all(|skill| catalog.contains(skill)));
    }

    #[test]
    fn test_found_skills_never_missing_against_same_text() {
        for text in [
            "Looking for Python, AWS, Kubernetes expert",
            "javascript react css html git",
            "",
            "nothing relevant here",
        ] {
            assert!(find_missing_skills(&extract_skills(text), text).is_empty());
        }
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = SkillCatalog::global();

        assert_eq!(catalog.len(), 39);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.skills()[0], "python");
        assert!(catalog.contains("tableau"));
        assert!(!catalog.contains("rust"));
    }
}
