#![allow(dead_code)]

// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for vision-based page transcription. Output is raw text,
/// not JSON: the transcript feeds the same path as a native text layer.
pub const TRANSCRIBE_SYSTEM: &str = "You are a document transcription engine. \
    Transcribe every piece of text visible in the supplied page image, \
    preserving reading order. \
    Do NOT summarize, translate, or comment. \
    If the page contains no legible text, respond with an empty string.";
