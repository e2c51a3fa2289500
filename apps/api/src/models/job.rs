//! Structured job description produced by the JD parsing service.

use serde::{Deserialize, Serialize};

/// Salary information as advertised. Fields stay empty when the posting
/// does not disclose compensation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRequirement {
    #[serde(default)]
    pub minimum_degree: String,
    #[serde(default)]
    pub fields_of_study: Vec<String>,
}

/// Full structured output of job description parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub years_of_experience: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub technical_requirements: Vec<String>,
    #[serde(default)]
    pub required_qualifications: Vec<String>,
    #[serde(default)]
    pub preferred_qualifications: Vec<String>,
    #[serde(default)]
    pub education: EducationRequirement,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub salary_range: SalaryRange,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote_status: String,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub industry: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_posting_deserializes_with_defaults() {
        let json = r#"{
            "job_title": "Backend Engineer",
            "company": "Initech",
            "required_skills": ["Rust", "PostgreSQL"]
        }"#;
        let jd: ParsedJobDescription = serde_json::from_str(json).unwrap();
        assert_eq!(jd.job_title, "Backend Engineer");
        assert_eq!(jd.required_skills.len(), 2);
        assert!(jd.benefits.is_empty());
        assert!(jd.salary_range.min.is_empty());
    }
}
