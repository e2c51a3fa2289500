// Generation services: JD parsing, fit scoring, interview question
// generation, application email drafting.
// All LLM calls go through llm_client; no direct Anthropic SDK calls here.

pub mod email;
pub mod fit_scoring;
pub mod handlers;
pub mod jd_parser;
pub mod prompts;
pub mod questions;

use serde::{Deserialize, Serialize};

use crate::extraction::metrics::estimate_cost;
use crate::llm_client::Usage;

/// Token accounting for a single-call generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallMetrics {
    pub api_calls: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_estimate: f64,
}

impl CallMetrics {
    pub fn from_usage(usage: &Usage) -> Self {
        Self {
            api_calls: 1,
            input_tokens: u64::from(usage.input_tokens),
            output_tokens: u64::from(usage.output_tokens),
            cost_estimate: estimate_cost(
                u64::from(usage.input_tokens),
                u64::from(usage.output_tokens),
            ),
        }
    }
}
