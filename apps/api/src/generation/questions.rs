//! Interview question generation, sized by interview duration.
//!
//! Callers give a time budget, not a question count: the count is derived
//! from the expected answer length plus a fixed ask-and-discuss overhead,
//! under a buffer reserved for intro, transitions, and wrap-up.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{QUESTION_GEN_PROMPT_TEMPLATE, QUESTION_GEN_SYSTEM};
use crate::generation::CallMetrics;
use crate::llm_client::LlmClient;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ResumeRecord;

/// Share of the interview reserved for rapport building and transitions.
const BUFFER_TIME_FRACTION: f32 = 0.15;
/// Minutes spent asking a question and briefly discussing the answer.
const ASK_OVERHEAD_MINUTES: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl QuestionLength {
    /// Expected answer time in minutes.
    fn answer_minutes(self) -> u32 {
        match self {
            Self::Short => 2,
            Self::Medium => 4,
            Self::Long => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Mixed => "mixed",
        }
    }
}

/// Time-based generation parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InterviewConfig {
    pub duration_minutes: u32,
    #[serde(default)]
    pub question_length: QuestionLength,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// How many questions fit in the configured duration. Never less than one.
pub fn question_count(config: &InterviewConfig) -> u32 {
    let per_question = config.question_length.answer_minutes() + ASK_OVERHEAD_MINUTES;
    let available = config.duration_minutes as f32 * (1.0 - BUFFER_TIME_FRACTION);
    ((available / per_question as f32) as u32).max(1)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    #[serde(default)]
    pub question_id: u32,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub estimated_time_minutes: u32,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    #[serde(default)]
    pub relevance_to_cv: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub questions: Vec<InterviewQuestion>,
}

/// Per-run metrics including the timing plan the count was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionMetrics {
    #[serde(flatten)]
    pub call: CallMetrics,
    pub questions_generated: usize,
    pub target_duration_minutes: u32,
    pub buffer_minutes: f32,
}

/// Generates a question set grounded in the candidate's record and the
/// parsed job requirements.
pub async fn generate_questions(
    resume: &ResumeRecord,
    jd: &ParsedJobDescription,
    config: &InterviewConfig,
    llm: &LlmClient,
) -> Result<(QuestionSet, QuestionMetrics), AppError> {
    let count = question_count(config);
    let minutes_per_question = config.question_length.answer_minutes();

    let resume_json = serde_json::to_string(resume)
        .map_err(|e| AppError::Internal(e.into()))?;
    let jd_json = serde_json::to_string(jd).map_err(|e| AppError::Internal(e.into()))?;

    let prompt = QUESTION_GEN_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{difficulty}", config.difficulty.as_str())
        .replace("{minutes_per_question}", &minutes_per_question.to_string())
        .replace("{job_data}", &jd_json)
        .replace("{resume_data}", &resume_json);

    let (set, usage) = llm
        .call_structured::<QuestionSet>(&prompt, QUESTION_GEN_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("question generation failed: {e}")))?;

    let metrics = QuestionMetrics {
        call: CallMetrics::from_usage(&usage),
        questions_generated: set.questions.len(),
        target_duration_minutes: config.duration_minutes,
        buffer_minutes: config.duration_minutes as f32 * BUFFER_TIME_FRACTION,
    };

    Ok((set, metrics))
}
