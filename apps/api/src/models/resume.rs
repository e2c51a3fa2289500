//! Typed resume record shared by the extraction pipeline and the generation
//! services.
//!
//! Every collection field carries `#[serde(default)]` so a payload that omits
//! a section still deserializes to an empty container. The merge engine
//! relies on this: partial records never have "missing" fields, only empty
//! ones.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Structured data extracted from a resume.
///
/// The same shape serves both as the per-page partial result produced by an
/// extraction worker and as the reconciled whole-document record returned to
/// callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub job_preferences: Vec<JobPreference>,
    #[serde(default)]
    pub filters: PreferenceFilters,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Identity and contact fields. Empty string means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    /// Normalized to `YYYY-MM-DD` where possible; partial dates stay as
    /// `YYYY` or `YYYY-MM`.
    #[serde(default)]
    pub start_date: String,
    /// `None` while the position is current.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: LanguageLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPreference {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub contract_types: Vec<String>,
    #[serde(default)]
    pub seniority_levels: Vec<String>,
}

/// Search filters inferred from the resume. Each filter stays at `Any`
/// unless the document gives clear evidence for a specific value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFilters {
    #[serde(default)]
    pub gender: FilterGender,
    #[serde(default)]
    pub education_level: FilterEducationLevel,
    #[serde(default)]
    pub job_type: FilterJobType,
    #[serde(default)]
    pub work_mode: FilterWorkMode,
}

impl PreferenceFilters {
    /// True when no filter has been narrowed from its `Any` default.
    pub fn is_unspecified(&self) -> bool {
        *self == Self::default()
    }
}

// Filter enums tolerate unknown wire values by folding them into `Any`.
// A creative model output must never fail deserialization of a whole page.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterGender {
    Male,
    Female,
    Other,
    #[default]
    #[serde(other)]
    Any,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterEducationLevel {
    #[serde(rename = "B.Sc.")]
    Bsc,
    #[serde(rename = "B.A.")]
    Ba,
    #[serde(rename = "M.Sc.")]
    Msc,
    #[serde(rename = "M.A.")]
    Ma,
    #[serde(rename = "Ph.D.")]
    Phd,
    #[serde(rename = "Associate")]
    Associate,
    #[serde(rename = "Diploma")]
    Diploma,
    #[default]
    #[serde(rename = "any", other)]
    Any,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterJobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
    #[default]
    #[serde(other)]
    Any,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterWorkMode {
    OnSite,
    Hybrid,
    Remote,
    #[default]
    #[serde(other)]
    Any,
}

/// Spoken-language proficiency. `Unspecified` absorbs values outside the
/// declared scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageLevel {
    Beginner,
    Intermediate,
    Fluent,
    Native,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ResumeRecord::default());
        assert!(record.skills.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_missing_collections_become_empty_containers() {
        let json = r#"{
            "personal_info": {"first_name": "Ada", "last_name": "Lovelace"},
            "about": "Pioneer of computing."
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.personal_info.first_name, "Ada");
        assert!(record.work_experience.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.filters.is_unspecified());
    }

    #[test]
    fn test_unknown_filter_value_folds_into_any() {
        let json = r#"{"gender": "prefer_not_to_say", "work_mode": "starship"}"#;
        let filters: PreferenceFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.gender, FilterGender::Any);
        assert_eq!(filters.work_mode, FilterWorkMode::Any);
    }

    #[test]
    fn test_known_filter_values_parse() {
        let json = r#"{
            "gender": "female",
            "education_level": "M.Sc.",
            "job_type": "full_time",
            "work_mode": "hybrid"
        }"#;
        let filters: PreferenceFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.gender, FilterGender::Female);
        assert_eq!(filters.education_level, FilterEducationLevel::Msc);
        assert_eq!(filters.job_type, FilterJobType::FullTime);
        assert_eq!(filters.work_mode, FilterWorkMode::Hybrid);
        assert!(!filters.is_unspecified());
    }

    #[test]
    fn test_unknown_language_level_is_unspecified() {
        let lang: LanguageSkill =
            serde_json::from_str(r#"{"name": "German", "level": "Conversational"}"#).unwrap();
        assert_eq!(lang.level, LanguageLevel::Unspecified);
    }

    #[test]
    fn test_null_end_date_means_current() {
        let json = r#"{"company": "Acme", "title": "Engineer", "end_date": null, "is_current": true}"#;
        let exp: WorkExperience = serde_json::from_str(json).unwrap();
        assert!(exp.end_date.is_none());
        assert!(exp.is_current);
    }
}
