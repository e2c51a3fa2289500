//! Fit Scoring: pluggable, trait-based scorer that measures a parsed resume
//! against a parsed JD.
//!
//! Default: `KeywordFitScorer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn FitScorer>` so a semantic backend
//! can be swapped in without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// A single matched dimension between the resume and a JD keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitMatch {
    pub keyword: String,
    /// Which part of the resume covered it ("skills", "tags", "experience").
    pub evidence: String,
    pub strength: f32, // 0.0 – 1.0
}

/// A JD keyword not covered by the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub keyword: String,
    pub weight: f32,
}

/// Full fit report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub overall_score: u32, // 0 – 100
    pub strong_matches: Vec<FitMatch>,
    pub partial_matches: Vec<FitMatch>,
    pub gaps: Vec<Gap>,
    pub recommendation: String,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer seam. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait FitScorer: Send + Sync {
    async fn score(
        &self,
        resume: &ResumeRecord,
        jd: &ParsedJobDescription,
    ) -> Result<FitReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordFitScorer, the default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust keyword scorer. No LLM call.
///
/// Algorithm:
/// 1. Build a weighted keyword inventory from the JD:
///    required_skills 1.0, technical_requirements 0.8, preferred_skills 0.5
/// 2. For each keyword:
///    - exact match against skills or tags → strength 1.0
///    - substring match in narrative text  → strength 0.6
///    - no match → strength 0.0
/// 3. overall_score = Σ(strength × weight) / Σ(weight) × 100
/// 4. Classify: strong (≥0.8), partial (0.4–0.79), gap (<0.4)
pub struct KeywordFitScorer;

#[async_trait]
impl FitScorer for KeywordFitScorer {
    async fn score(
        &self,
        resume: &ResumeRecord,
        jd: &ParsedJobDescription,
    ) -> Result<FitReport, AppError> {
        Ok(compute_keyword_fit(resume, jd))
    }
}

fn keyword_inventory(jd: &ParsedJobDescription) -> Vec<(String, f32)> {
    let mut inventory = Vec::new();
    for skill in &jd.required_skills {
        inventory.push((skill.clone(), 1.0));
    }
    for requirement in &jd.technical_requirements {
        inventory.push((requirement.clone(), 0.8));
    }
    for skill in &jd.preferred_skills {
        inventory.push((skill.clone(), 0.5));
    }
    inventory
}

/// Narrative haystack searched for partial matches.
fn narrative_text(resume: &ResumeRecord) -> String {
    let mut text = resume.about.to_lowercase();
    for exp in &resume.work_experience {
        text.push('\n');
        text.push_str(&exp.description.to_lowercase());
        text.push('\n');
        text.push_str(&exp.title.to_lowercase());
    }
    for project in &resume.projects {
        text.push('\n');
        text.push_str(&project.description.to_lowercase());
        for tech in &project.technologies {
            text.push('\n');
            text.push_str(&tech.to_lowercase());
        }
    }
    text
}

fn compute_keyword_fit(resume: &ResumeRecord, jd: &ParsedJobDescription) -> FitReport {
    let inventory = keyword_inventory(jd);

    if inventory.is_empty() {
        return FitReport {
            overall_score: 0,
            strong_matches: vec![],
            partial_matches: vec![],
            gaps: vec![],
            recommendation: "No skill keywords found in the job description; cannot score fit."
                .to_string(),
            scorer_backend: "keyword".to_string(),
        };
    }

    let haystack = narrative_text(resume);
    let exact: Vec<String> = resume
        .skills
        .iter()
        .chain(resume.tags.iter())
        .map(|s| s.to_lowercase())
        .collect();

    let mut strong_matches = Vec::new();
    let mut partial_matches = Vec::new();
    let mut gaps = Vec::new();

    let mut total_weight = 0.0_f32;
    let mut total_score = 0.0_f32;

    for (keyword, weight) in inventory {
        let keyword_lower = keyword.to_lowercase();
        total_weight += weight;

        let (strength, evidence) = if exact.iter().any(|s| *s == keyword_lower) {
            (1.0, "skills".to_string())
        } else if haystack.contains(&keyword_lower) {
            (0.6, "experience".to_string())
        } else {
            (0.0, String::new())
        };

        total_score += strength * weight;

        if strength >= 0.8 {
            strong_matches.push(FitMatch {
                keyword,
                evidence,
                strength,
            });
        } else if strength >= 0.4 {
            partial_matches.push(FitMatch {
                keyword,
                evidence,
                strength,
            });
        } else {
            gaps.push(Gap { keyword, weight });
        }
    }

    let overall_score = if total_weight > 0.0 {
        ((total_score / total_weight) * 100.0).round() as u32
    } else {
        0
    };

    let recommendation = build_recommendation(overall_score, &gaps);

    FitReport {
        overall_score,
        strong_matches,
        partial_matches,
        gaps,
        recommendation,
        scorer_backend: "keyword".to_string(),
    }
}

/// Builds a human-readable recommendation string from score and gaps.
fn build_recommendation(score: u32, gaps: &[Gap]) -> String {
    let top_gaps: Vec<&str> = gaps.iter().take(3).map(|g| g.keyword.as_str()).collect();

    if score >= 80 {
        "Strong fit. The resume directly covers the key requirements.".to_string()
    } else if score >= 60 {
        format!(
            "Moderate fit ({score}/100). Missing or weak coverage for: {}.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "Low fit ({score}/100). Significant gaps: {}.",
            top_gaps.join(", ")
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::WorkExperience;

    fn resume_with(skills: &[&str], tags: &[&str], about: &str) -> ResumeRecord {
        ResumeRecord {
            about: about.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn jd_with(required: &[&str], preferred: &[&str]) -> ParsedJobDescription {
        ParsedJobDescription {
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_skill_match_scores_strong() {
        let resume = resume_with(&["Rust", "PostgreSQL"], &[], "");
        let jd = jd_with(&["rust", "postgresql"], &[]);

        let report = compute_keyword_fit(&resume, &jd);
        assert!(report.overall_score >= 80);
        assert_eq!(report.strong_matches.len(), 2);
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn test_narrative_match_scores_partial() {
        let mut resume = resume_with(&[], &[], "");
        resume.work_experience = vec![WorkExperience {
            description: "Deployed services to Kubernetes daily".to_string(),
            ..Default::default()
        }];
        let jd = jd_with(&["Kubernetes"], &[]);

        let report = compute_keyword_fit(&resume, &jd);
        assert_eq!(report.partial_matches.len(), 1);
        assert!(report.strong_matches.is_empty());
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn test_tag_match_counts_as_exact() {
        let resume = resume_with(&[], &["Backend Developer"], "");
        let jd = jd_with(&["Backend Developer"], &[]);

        let report = compute_keyword_fit(&resume, &jd);
        assert_eq!(report.strong_matches.len(), 1);
    }

    #[test]
    fn test_uncovered_keyword_creates_gap() {
        let resume = resume_with(&["Python"], &[], "");
        let jd = jd_with(&["Rust"], &[]);

        let report = compute_keyword_fit(&resume, &jd);
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.gaps[0].keyword, "Rust");
    }

    #[test]
    fn test_empty_inventory_returns_zero_score() {
        let resume = resume_with(&["Rust"], &[], "");
        let jd = ParsedJobDescription::default();

        let report = compute_keyword_fit(&resume, &jd);
        assert_eq!(report.overall_score, 0);
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn test_preferred_skills_weigh_less_than_required() {
        // Missing a preferred skill should hurt less than missing a
        // required one.
        let resume = resume_with(&["Rust"], &[], "");
        let missing_preferred = compute_keyword_fit(&resume, &jd_with(&["Rust"], &["Kafka"]));
        let missing_required = compute_keyword_fit(&resume, &jd_with(&["Rust", "Kafka"], &[]));

        assert!(missing_preferred.overall_score > missing_required.overall_score);
    }

    #[test]
    fn test_overall_score_bounded_0_to_100() {
        let resume = resume_with(&["Rust"], &[], "");
        let report = compute_keyword_fit(&resume, &jd_with(&["Rust"], &[]));
        assert!(report.overall_score <= 100);
    }

    #[test]
    fn test_recommendation_lists_top_gaps() {
        let gaps = vec![
            Gap {
                keyword: "Kafka".to_string(),
                weight: 1.0,
            },
            Gap {
                keyword: "Terraform".to_string(),
                weight: 0.5,
            },
        ];
        let rec = build_recommendation(45, &gaps);
        assert!(rec.contains("45"));
        assert!(rec.contains("Kafka"));
        assert!(rec.contains("Terraform"));
    }

    #[test]
    fn test_scorer_backend_label_is_keyword() {
        let report = compute_keyword_fit(&ResumeRecord::default(), &jd_with(&["Rust"], &[]));
        assert_eq!(report.scorer_backend, "keyword");
    }

    #[tokio::test]
    async fn test_trait_object_scores() {
        let scorer: std::sync::Arc<dyn FitScorer> = std::sync::Arc::new(KeywordFitScorer);
        let report = scorer
            .score(&resume_with(&["Rust"], &[], ""), &jd_with(&["Rust"], &[]))
            .await
            .unwrap();
        assert_eq!(report.overall_score, 100);
    }
}
