//! Axum route handlers for the Screening API.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::{CandidateEvaluation, Document};
use crate::screening::evaluator::evaluate_batch;
use crate::screening::prompts::build_jd_prompt;
use crate::screening::ranking::{best_candidate, generate_emails, sort_by_score_desc};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateJdRequest {
    pub job_title: String,
    pub years_of_experience: u32,
    pub must_have_skills: String,
    pub company_name: String,
    pub employment_type: String,
    pub industry: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct JobDescriptionResponse {
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    evaluations: Vec<CandidateEvaluation>,
    best: CandidateEvaluation,
    interview_email: String,
    rejection_email: String,
    job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Renders the job description input form.
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexTemplate.render()?))
}

/// POST /generate-jd
///
/// Generates a complete job description from the structured role fields.
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    Json(request): Json<GenerateJdRequest>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "job_title cannot be empty".to_string(),
        ));
    }

    let prompt = build_jd_prompt(
        &request.job_title,
        request.years_of_experience,
        &request.must_have_skills,
        &request.company_name,
        &request.employment_type,
        &request.industry,
        &request.location,
    );

    let job_description = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Error generating job description: {e}")))?;

    Ok(Json(JobDescriptionResponse { job_description }))
}

/// POST /extract-jd
///
/// Extracts job description text from one uploaded PDF or DOC/DOCX file.
pub async fn handle_extract_jd(
    mut multipart: Multipart,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let filename = match field.file_name() {
            Some(filename) => filename.to_string(),
            None => continue,
        };
        let content = field.bytes().await.map_err(bad_multipart)?;
        let job_description = extract_text(&content, &filename)?;
        return Ok(Json(JobDescriptionResponse { job_description }));
    }

    Err(AppError::Validation(
        "A job description file is required".to_string(),
    ))
}

/// POST /evaluate
///
/// Evaluates 1–10 uploaded resumes against the job description and renders
/// the results report: sorted evaluations, the best candidate, and both
/// generated emails.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resumes: Vec<Document> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                job_description = Some(field.text().await.map_err(bad_multipart)?);
            }
            "resumes" => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let content = field.bytes().await.map_err(bad_multipart)?;
                resumes.push(Document::new(filename, content));
            }
            _ => {}
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    let evaluations = evaluate_batch(&job_description, &resumes, state.llm.as_ref()).await?;

    // Batch is non-empty past evaluate_batch, so a best candidate exists.
    let best = best_candidate(&evaluations)
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("empty evaluation batch")))?;

    let (interview_email, rejection_email) =
        generate_emails(&job_description, &best, state.llm.as_ref()).await?;

    let template = ResultsTemplate {
        evaluations: sort_by_score_desc(evaluations),
        best,
        interview_email,
        rejection_email,
        job_description,
    };

    Ok(Html(template.render()?))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart payload: {e}"))
}
