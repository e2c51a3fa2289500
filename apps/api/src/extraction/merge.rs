//! Merge engine: reconciles per-page partial records into one coherent
//! record with deterministic, field-level policies.
//!
//! Policies, applied in page order unless noted:
//! - identity scalars: first non-empty wins, a strictly longer later value
//!   replaces it
//! - narrative text: longest candidate above a noise threshold wins
//! - flat collections (skills, tags): case-insensitive dedup, first-seen
//!   casing kept, output sorted
//! - keyed relational lists: dedup by composite key, first occurrence kept,
//!   then sorted by date descending where the type has one
//! - preference filters: first non-default value wins
//! - tags: union across pages, seeded with a placeholder when empty

use std::collections::HashSet;

use crate::models::resume::{
    Achievement, Education, JobPreference, LanguageSkill, PersonalInfo, PreferenceFilters, Project,
    ResumeRecord, SocialLink, WorkExperience,
};

/// Narrative candidates at or below this many characters are treated as
/// noise (stray headers, page furniture) and never win the merge.
const NARRATIVE_NOISE_THRESHOLD: usize = 10;

/// Seeded into `tags` when no page produced a role tag.
pub const FALLBACK_TAG: &str = "General Applicant";

/// Merges 1..N partial records into a single record.
///
/// A single record short-circuits to a copy; merging is only meaningful
/// across pages. An empty slice yields the all-default record (the caller's
/// repair pass restores the tag invariant).
pub fn merge(records: &[ResumeRecord]) -> ResumeRecord {
    match records {
        [] => ResumeRecord::default(),
        [single] => single.clone(),
        _ => {
            let mut merged = ResumeRecord::default();

            for record in records {
                merge_personal_info(&mut merged.personal_info, &record.personal_info);
            }

            merged.about = longest_narrative(records.iter().map(|r| r.about.as_str()));
            merged.skills = dedup_case_insensitive(records.iter().flat_map(|r| r.skills.iter()));
            merged.languages = merge_languages(records);

            merged.work_experience = merge_keyed(records, |r| &r.work_experience);
            merged.education = merge_keyed(records, |r| &r.education);
            merged.projects = merge_keyed(records, |r| &r.projects);
            merged.social_links = merge_keyed(records, |r| &r.social_links);
            merged.achievements = merge_keyed(records, |r| &r.achievements);
            merged.job_preferences = merge_keyed(records, |r| &r.job_preferences);

            merged.filters = merge_filters(records);

            merged.tags = dedup_case_insensitive(records.iter().flat_map(|r| r.tags.iter()));
            if merged.tags.is_empty() {
                merged.tags.push(FALLBACK_TAG.to_string());
            }

            merged
        }
    }
}

/// First non-empty wins; a later, strictly longer value replaces an
/// existing one. Multi-page resumes often repeat a truncated header from
/// page one in fuller form later.
fn take_scalar(current: &mut String, candidate: &str) {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return;
    }
    if current.is_empty() || candidate.chars().count() > current.chars().count() {
        *current = candidate.to_string();
    }
}

fn merge_personal_info(merged: &mut PersonalInfo, candidate: &PersonalInfo) {
    take_scalar(&mut merged.first_name, &candidate.first_name);
    take_scalar(&mut merged.last_name, &candidate.last_name);
    take_scalar(&mut merged.email, &candidate.email);
    take_scalar(&mut merged.mobile, &candidate.mobile);
    take_scalar(&mut merged.city, &candidate.city);
    take_scalar(&mut merged.date_of_birth, &candidate.date_of_birth);
    take_scalar(&mut merged.gender, &candidate.gender);
    take_scalar(&mut merged.website, &candidate.website);
    take_scalar(&mut merged.location, &candidate.location);
}

/// Longest candidate above the noise threshold; earlier pages win ties.
fn longest_narrative<'a>(candidates: impl Iterator<Item = &'a str>) -> String {
    let mut best = "";
    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.chars().count() <= NARRATIVE_NOISE_THRESHOLD {
            continue;
        }
        if candidate.chars().count() > best.chars().count() {
            best = candidate;
        }
    }
    best.to_string()
}

/// Case-insensitive dedup keeping the first-seen casing, sorted for
/// deterministic output.
pub(crate) fn dedup_case_insensitive<'a>(
    values: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept: Vec<String> = Vec::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_lowercase()) {
            kept.push(value.to_string());
        }
    }
    kept.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    kept
}

fn merge_languages(records: &[ResumeRecord]) -> Vec<LanguageSkill> {
    let mut seen = HashSet::new();
    let mut kept: Vec<LanguageSkill> = Vec::new();
    for record in records {
        for language in &record.languages {
            let key = normalize(&language.name);
            if key.is_empty() {
                continue;
            }
            if seen.insert(key) {
                kept.push(language.clone());
            }
        }
    }
    kept.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    kept
}

fn merge_filters(records: &[ResumeRecord]) -> PreferenceFilters {
    let defaults = PreferenceFilters::default();
    let mut merged = defaults;
    for record in records {
        let f = &record.filters;
        if merged.gender == defaults.gender {
            merged.gender = f.gender;
        }
        if merged.education_level == defaults.education_level {
            merged.education_level = f.education_level;
        }
        if merged.job_type == defaults.job_type {
            merged.job_type = f.job_type;
        }
        if merged.work_mode == defaults.work_mode {
            merged.work_mode = f.work_mode;
        }
    }
    merged
}

/// Entries that can be deduplicated across pages by a composite key and,
/// where the type has one, ordered by a date field.
pub(crate) trait KeyedEntry {
    /// Normalized identity key. An empty key marks an entry too vague to
    /// keep (e.g. a work item with neither company nor title).
    fn dedup_key(&self) -> String;

    /// Date used for most-recent-first ordering, if the type has one.
    fn sort_date(&self) -> Option<&str> {
        None
    }
}

pub(crate) fn merge_keyed<T, F>(records: &[ResumeRecord], field: F) -> Vec<T>
where
    T: KeyedEntry + Clone,
    F: Fn(&ResumeRecord) -> &[T],
{
    dedup_entries(records.iter().flat_map(|r| field(r).iter()))
}

/// First occurrence under each dedup key wins; vague entries (empty key)
/// are dropped; dated entries end up most recent first.
pub(crate) fn dedup_entries<'a, T, I>(entries: I) -> Vec<T>
where
    T: KeyedEntry + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut kept: Vec<T> = Vec::new();
    for entry in entries {
        let key = entry.dedup_key();
        if key.is_empty() {
            continue;
        }
        if seen.insert(key) {
            kept.push(entry.clone());
        }
    }
    sort_most_recent_first(&mut kept);
    kept
}

/// Stable sort: dated entries first, most recent leading; undated entries
/// keep their insertion order at the tail. Dates are ISO-shaped strings,
/// so lexicographic comparison matches chronology.
pub(crate) fn sort_most_recent_first<T: KeyedEntry>(entries: &mut [T]) {
    entries.sort_by(|a, b| match (nonempty(a.sort_date()), nonempty(b.sort_date())) {
        (Some(da), Some(db)) => db.cmp(da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

fn nonempty(date: Option<&str>) -> Option<&str> {
    date.filter(|d| !d.trim().is_empty())
}

/// Lowercased, whitespace-collapsed form used for identity comparison.
pub(crate) fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn composite_key(parts: &[&str]) -> String {
    if parts.iter().all(|p| p.trim().is_empty()) {
        return String::new();
    }
    parts
        .iter()
        .map(|p| normalize(p))
        .collect::<Vec<_>>()
        .join("|")
}

impl KeyedEntry for WorkExperience {
    fn dedup_key(&self) -> String {
        composite_key(&[&self.company, &self.title])
    }

    fn sort_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

impl KeyedEntry for Education {
    fn dedup_key(&self) -> String {
        composite_key(&[&self.institution, &self.degree])
    }

    fn sort_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

impl KeyedEntry for Project {
    fn dedup_key(&self) -> String {
        composite_key(&[&self.name])
    }

    fn sort_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

impl KeyedEntry for SocialLink {
    fn dedup_key(&self) -> String {
        normalize(self.url.trim_end_matches('/'))
    }
}

impl KeyedEntry for Achievement {
    fn dedup_key(&self) -> String {
        composite_key(&[&self.name, &self.organization])
    }

    fn sort_date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl KeyedEntry for JobPreference {
    fn dedup_key(&self) -> String {
        composite_key(&[&self.category])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{FilterJobType, FilterWorkMode};

    fn record_with_skills_and_tags(skills: &[&str], tags: &[&str]) -> ResumeRecord {
        ResumeRecord {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn work(company: &str, title: &str, start: &str) -> WorkExperience {
        WorkExperience {
            company: company.to_string(),
            title: title.to_string(),
            start_date: start.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_single_record_is_identity() {
        let record = ResumeRecord {
            about: "Engineer with a decade of backend work.".to_string(),
            skills: vec!["Rust".to_string()],
            work_experience: vec![work("Acme", "Engineer", "2020-01")],
            // even an empty tag list survives the single-record path
            tags: vec![],
            ..Default::default()
        };
        assert_eq!(merge(std::slice::from_ref(&record)), record);
    }

    #[test]
    fn test_merge_empty_slice_yields_default() {
        assert_eq!(merge(&[]), ResumeRecord::default());
    }

    #[test]
    fn test_scalar_first_non_empty_wins() {
        let mut a = ResumeRecord::default();
        a.personal_info.email = "ada@example.com".to_string();
        let mut b = ResumeRecord::default();
        b.personal_info.email = "x@e.co".to_string();

        let merged = merge(&[a, b]);
        assert_eq!(merged.personal_info.email, "ada@example.com");
    }

    #[test]
    fn test_scalar_strictly_longer_later_value_replaces() {
        let mut a = ResumeRecord::default();
        a.personal_info.mobile = "555-0100".to_string();
        let mut b = ResumeRecord::default();
        b.personal_info.mobile = "+1 (555) 010-0000".to_string();

        let merged = merge(&[a, b]);
        assert_eq!(merged.personal_info.mobile, "+1 (555) 010-0000");
    }

    #[test]
    fn test_scalar_equal_length_later_value_does_not_replace() {
        let mut a = ResumeRecord::default();
        a.personal_info.city = "Berlin".to_string();
        let mut b = ResumeRecord::default();
        b.personal_info.city = "Munich".to_string();

        let merged = merge(&[a, b]);
        assert_eq!(merged.personal_info.city, "Berlin");
    }

    #[test]
    fn test_longest_narrative_wins() {
        let mut a = ResumeRecord::default();
        a.about = "Short.".to_string();
        let mut b = ResumeRecord::default();
        b.about = "A much longer professional summary statement.".to_string();

        let merged = merge(&[a, b]);
        assert_eq!(
            merged.about,
            "A much longer professional summary statement."
        );
    }

    #[test]
    fn test_narrative_below_noise_threshold_never_wins() {
        let mut a = ResumeRecord::default();
        a.about = "Page 2/3".to_string();
        let b = ResumeRecord::default();

        let merged = merge(&[a, b]);
        assert!(merged.about.is_empty());
    }

    #[test]
    fn test_skills_dedup_keeps_first_seen_casing_and_sorts() {
        let page1 = record_with_skills_and_tags(&["python"], &[]);
        let page2 = record_with_skills_and_tags(&["Python", "sql"], &["Backend Developer"]);
        let page3 = ResumeRecord::default(); // failed page placeholder

        let merged = merge(&[page1, page2, page3]);
        assert_eq!(merged.skills, vec!["python", "sql"]);
        assert_eq!(merged.tags, vec!["Backend Developer"]);
    }

    #[test]
    fn test_work_history_dedup_by_company_and_title() {
        let mut a = ResumeRecord::default();
        a.work_experience = vec![work("Acme Corp", "Backend Engineer", "2021-03")];
        let mut b = ResumeRecord::default();
        b.work_experience = vec![
            work("ACME CORP", "backend engineer", "2021-03"),
            work("Initech", "Intern", "2018-06"),
        ];

        let merged = merge(&[a, b]);
        assert_eq!(merged.work_experience.len(), 2);
        // first occurrence keeps its casing
        assert_eq!(merged.work_experience[0].company, "Acme Corp");
    }

    #[test]
    fn test_keyed_lists_sorted_most_recent_first() {
        let mut a = ResumeRecord::default();
        a.work_experience = vec![work("Oldest", "Dev", "2015-01"), work("Newest", "Dev", "2023-07")];
        let mut b = ResumeRecord::default();
        b.work_experience = vec![work("Middle", "Dev", "2019-04"), work("Undated", "Dev", "")];

        let merged = merge(&[a, b]);
        let companies: Vec<_> = merged
            .work_experience
            .iter()
            .map(|w| w.company.as_str())
            .collect();
        assert_eq!(companies, ["Newest", "Middle", "Oldest", "Undated"]);
    }

    #[test]
    fn test_entries_with_empty_keys_are_dropped() {
        let mut a = ResumeRecord::default();
        a.work_experience = vec![work("", "", "2020-01"), work("Acme", "Dev", "2021-01")];

        let merged = merge(&[a, ResumeRecord::default()]);
        assert_eq!(merged.work_experience.len(), 1);
    }

    #[test]
    fn test_social_links_dedup_by_normalized_url() {
        let mut a = ResumeRecord::default();
        a.social_links = vec![SocialLink {
            title: "GitHub".to_string(),
            url: "https://github.com/ada".to_string(),
        }];
        let mut b = ResumeRecord::default();
        b.social_links = vec![
            SocialLink {
                title: "gh".to_string(),
                url: "https://github.com/ada/".to_string(),
            },
            SocialLink {
                title: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/ada".to_string(),
            },
        ];

        let merged = merge(&[a, b]);
        assert_eq!(merged.social_links.len(), 2);
        assert_eq!(merged.social_links[0].title, "GitHub");
    }

    #[test]
    fn test_filters_keep_first_non_default_value() {
        let mut a = ResumeRecord::default();
        a.filters.job_type = FilterJobType::Contract;
        let mut b = ResumeRecord::default();
        b.filters.job_type = FilterJobType::FullTime;
        b.filters.work_mode = FilterWorkMode::Remote;

        let merged = merge(&[a, b]);
        assert_eq!(merged.filters.job_type, FilterJobType::Contract);
        assert_eq!(merged.filters.work_mode, FilterWorkMode::Remote);
    }

    #[test]
    fn test_all_empty_tag_lists_seed_placeholder() {
        let merged = merge(&[ResumeRecord::default(), ResumeRecord::default()]);
        assert_eq!(merged.tags, vec![FALLBACK_TAG]);
    }

    #[test]
    fn test_languages_dedup_by_name_keeps_first_level() {
        use crate::models::resume::{LanguageLevel, LanguageSkill};

        let mut a = ResumeRecord::default();
        a.languages = vec![LanguageSkill {
            name: "Spanish".to_string(),
            level: LanguageLevel::Fluent,
        }];
        let mut b = ResumeRecord::default();
        b.languages = vec![
            LanguageSkill {
                name: "spanish".to_string(),
                level: LanguageLevel::Beginner,
            },
            LanguageSkill {
                name: "English".to_string(),
                level: LanguageLevel::Native,
            },
        ];

        let merged = merge(&[a, b]);
        assert_eq!(merged.languages.len(), 2);
        assert_eq!(merged.languages[0].name, "English");
        assert_eq!(merged.languages[1].level, LanguageLevel::Fluent);
    }

    #[test]
    fn test_merge_is_deterministic_across_runs() {
        let page1 = record_with_skills_and_tags(&["rust", "go"], &["Systems Engineer"]);
        let page2 = record_with_skills_and_tags(&["Go", "sql"], &["Backend Developer"]);

        let first = merge(&[page1.clone(), page2.clone()]);
        let second = merge(&[page1, page2]);
        assert_eq!(first, second);
    }
}
