// All LLM prompt templates for the Screening module.
// Templates use `{placeholder}` markers filled by the build_* functions —
// no other module should send raw prompt strings to the client.

/// JD generation prompt. Placeholders: role fields from the input form.
const JD_PROMPT_TEMPLATE: &str = r#"Generate a professional and comprehensive job description with the following details:

Job Title: {job_title}
Years of Experience: {years_of_experience}
Must-Have Skills: {must_have_skills}
Company Name: {company_name}
Employment Type: {employment_type}
Industry: {industry}
Location: {location}

Please create a detailed job description that includes:
- A brief company overview
- Job responsibilities (5-7 bullet points)
- Required qualifications and skills
- Preferred qualifications
- Benefits (if applicable)

Make it professional and engaging."#;

/// Resume evaluation prompt. Demands a JSON-only reply so the parser can
/// recover `score` / `missing_skills` / `remarks` without prose stripping.
const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are a professional recruiter. Evaluate the following resume against the job description.

Job Description:
{job_description}

Resume:
{resume_text}

Provide your evaluation in the following JSON format ONLY (no additional text):
{
    "score": <integer from 0 to 100>,
    "missing_skills": [<list of key skills from JD not found in resume>],
    "remarks": "<one-sentence explanation for the score>"
}

Be strict in your evaluation. Consider experience level, skills match, and overall fit."#;

/// Interview invitation prompt for the best-scoring candidate.
const INTERVIEW_EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a professional and warm interview invitation email for the following candidate.

Job Description:
{job_description}

Candidate's Resume Score: {score}/100
Candidate's Filename: {filename}

Create a personalized email that:
- Congratulates them on being selected for an interview
- Mentions their strong qualifications
- Invites them to schedule an interview
- Is warm and professional in tone

Format the email with proper greeting and signature placeholders."#;

/// Rejection template prompt — generic, not keyed to any single candidate.
const REJECTION_EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a professional and empathetic rejection email for candidates who were not selected.

Job Description:
{job_description}

Create a polite rejection email that:
- Thanks them for their interest and time
- Informs them they were not selected for this position
- Encourages them to apply for future opportunities
- Is respectful and professional in tone

Format the email with proper greeting and signature placeholders."#;

#[allow(clippy::too_many_arguments)]
pub fn build_jd_prompt(
    job_title: &str,
    years_of_experience: u32,
    must_have_skills: &str,
    company_name: &str,
    employment_type: &str,
    industry: &str,
    location: &str,
) -> String {
    JD_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{years_of_experience}", &years_of_experience.to_string())
        .replace("{must_have_skills}", must_have_skills)
        .replace("{company_name}", company_name)
        .replace("{employment_type}", employment_type)
        .replace("{industry}", industry)
        .replace("{location}", location)
}

pub fn build_evaluation_prompt(job_description: &str, resume_text: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

pub fn build_interview_email_prompt(job_description: &str, score: u32, filename: &str) -> String {
    INTERVIEW_EMAIL_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{score}", &score.to_string())
        .replace("{filename}", filename)
}

pub fn build_rejection_email_prompt(job_description: &str) -> String {
    REJECTION_EMAIL_PROMPT_TEMPLATE.replace("{job_description}", job_description)
}
