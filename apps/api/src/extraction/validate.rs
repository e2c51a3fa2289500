//! Validation and best-effort repair of a merged record.
//!
//! Validation and repair are separate, independently testable stages:
//! `validate` only reports, `repair` only fixes. The composed
//! `validate_and_repair` never fails; callers always receive a structurally
//! sound record, even if its content is incomplete.

use tracing::warn;

use super::merge::{dedup_case_insensitive, dedup_entries, FALLBACK_TAG};
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The role-tag list is empty; every finished record carries at least
    /// one tag.
    EmptyTagList,
    /// A flat string collection contains blank entries.
    BlankEntries { field: &'static str },
    /// A keyed relational list contains duplicates under its dedup key.
    DuplicateEntries { field: &'static str },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTagList => write!(f, "tag list is empty"),
            Self::BlankEntries { field } => write!(f, "blank entries in {field}"),
            Self::DuplicateEntries { field } => write!(f, "duplicate entries in {field}"),
        }
    }
}

/// Checks the record's structural invariants without changing it.
pub fn validate(record: &ResumeRecord) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if record.tags.iter().all(|t| t.trim().is_empty()) {
        issues.push(ValidationIssue::EmptyTagList);
    }

    for (field, values) in [("skills", &record.skills), ("tags", &record.tags)] {
        if values.iter().any(|v| v.trim().is_empty()) {
            issues.push(ValidationIssue::BlankEntries { field });
        }
    }

    if has_duplicates(&record.work_experience) {
        issues.push(ValidationIssue::DuplicateEntries {
            field: "work_experience",
        });
    }
    if has_duplicates(&record.education) {
        issues.push(ValidationIssue::DuplicateEntries { field: "education" });
    }
    if has_duplicates(&record.projects) {
        issues.push(ValidationIssue::DuplicateEntries { field: "projects" });
    }
    if has_duplicates(&record.social_links) {
        issues.push(ValidationIssue::DuplicateEntries {
            field: "social_links",
        });
    }
    if has_duplicates(&record.achievements) {
        issues.push(ValidationIssue::DuplicateEntries {
            field: "achievements",
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Applies the minimal fix for each reported issue. Pure: the input record
/// and issue list fully determine the output.
pub fn repair(mut record: ResumeRecord, issues: &[ValidationIssue]) -> ResumeRecord {
    for issue in issues {
        match issue {
            ValidationIssue::BlankEntries { field } => match *field {
                "skills" => record.skills.retain(|v| !v.trim().is_empty()),
                "tags" => record.tags.retain(|v| !v.trim().is_empty()),
                _ => {}
            },
            ValidationIssue::DuplicateEntries { field } => match *field {
                "work_experience" => {
                    let deduped = dedup_entries(record.work_experience.iter());
                    record.work_experience = deduped;
                }
                "education" => {
                    let deduped = dedup_entries(record.education.iter());
                    record.education = deduped;
                }
                "projects" => {
                    let deduped = dedup_entries(record.projects.iter());
                    record.projects = deduped;
                }
                "social_links" => {
                    let deduped = dedup_entries(record.social_links.iter());
                    record.social_links = deduped;
                }
                "achievements" => {
                    let deduped = dedup_entries(record.achievements.iter());
                    record.achievements = deduped;
                }
                _ => {}
            },
            ValidationIssue::EmptyTagList => {}
        }
    }

    // Seed the tag fallback last: blank-entry cleanup above may have
    // emptied the list even when EmptyTagList was not reported.
    if record.tags.is_empty() {
        record.tags.push(FALLBACK_TAG.to_string());
    }
    let tags = dedup_case_insensitive(record.tags.iter());
    record.tags = tags;

    record
}

/// Validates and, when needed, repairs. Always returns a conformant record.
pub fn validate_and_repair(record: ResumeRecord) -> ResumeRecord {
    match validate(&record) {
        Ok(()) => record,
        Err(issues) => {
            for issue in &issues {
                warn!(%issue, "merged record failed validation, repairing");
            }
            repair(record, &issues)
        }
    }
}

fn has_duplicates<T: super::merge::KeyedEntry>(entries: &[T]) -> bool {
    let mut seen = std::collections::HashSet::new();
    for entry in entries {
        let key = entry.dedup_key();
        if key.is_empty() {
            continue;
        }
        if !seen.insert(key) {
            return true;
        }
    }
    false
}
