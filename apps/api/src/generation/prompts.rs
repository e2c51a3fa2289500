// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for JD parsing. Enforces JSON-only output.
pub const JD_PARSE_SYSTEM: &str =
    "You are an expert job description analyst. \
    Parse a job description and extract structured hiring requirements. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// JD parsing prompt template. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following job description and extract structured information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_title": "",
  "company": "",
  "job_type": "",
  "experience_level": "",
  "years_of_experience": "",
  "required_skills": [""],
  "preferred_skills": [""],
  "technical_requirements": [""],
  "required_qualifications": [""],
  "preferred_qualifications": [""],
  "education": {"minimum_degree": "", "fields_of_study": [""]},
  "certifications": [""],
  "responsibilities": [""],
  "salary_range": {"min": "", "max": "", "currency": "", "period": ""},
  "benefits": [""],
  "location": "",
  "remote_status": "",
  "soft_skills": [""],
  "industry": ""
}

Rules:
- Use "" for missing text fields and [] for missing lists. Never omit a key.
- REQUIRED skills come from explicit must-have language ("required", "must have",
  minimum years). PREFERRED skills come from "nice to have", "a plus", "preferred".
- remote_status is one of: "on_site", "hybrid", "remote", or "" when unstated.

Job description:

{jd_text}"#;

/// System prompt for interview question generation.
pub const QUESTION_GEN_SYSTEM: &str =
    "You are an expert technical interviewer. \
    Design interview questions that probe the candidate's actual experience \
    against the role's requirements. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Question generation template. Replace `{count}`, `{difficulty}`,
/// `{minutes_per_question}`, `{job_data}` and `{resume_data}` before sending.
pub const QUESTION_GEN_PROMPT_TEMPLATE: &str = r#"Generate exactly {count} interview questions at {difficulty} difficulty.
Each answer should take about {minutes_per_question} minutes.

Ground every question in the candidate's resume or the job requirements below.
Prefer questions that connect the two (e.g. their listed project vs. a required
skill). Cover a spread of categories: technical depth, system design, behavioral,
and role-specific topics.

Return a JSON object with this EXACT schema:
{
  "questions": [
    {
      "question_id": 1,
      "question": "",
      "category": "",
      "difficulty": "",
      "estimated_time_minutes": 0,
      "key_points": [""],
      "follow_up_questions": [""],
      "relevance_to_cv": ""
    }
  ]
}

Job requirements:
{job_data}

Candidate resume:
{resume_data}"#;

/// System prompt for application email drafting.
pub const EMAIL_DRAFT_SYSTEM: &str =
    "You are an expert HR copywriter and career coach. \
    Write concise, professional job-application emails. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Email drafting template. Replace `{resume_data}` and `{job_data}` before
/// sending.
pub const EMAIL_DRAFT_PROMPT_TEMPLATE: &str = r#"Write a job-application email for the candidate below applying to the role below.

Return a JSON object with this EXACT schema:
{"subject": "", "body": ""}

Requirements:
- Subject: 6-10 words, includes the candidate's name and the job title.
- Greeting: address the hiring manager by name if known, otherwise
  "Dear Hiring Manager,".
- Opening: state the position applied for and introduce the candidate briefly.
- Body: highlight the 1-3 most relevant skills or achievements from the resume
  that map to the job requirements, with specific metrics where available.
- Mention that the resume is attached.
- Tone: polite, formal, active voice. No slang, no emojis.
- Length: 3-4 short paragraphs, roughly 150-200 words total.

Candidate resume:
{resume_data}

Job description:
{job_data}"#;
