//! Batch Evaluator — runs extraction + LLM evaluation over a bounded set of
//! resumes, strictly in upload order.
//!
//! Per-file isolation is the core contract here: one unreadable file or one
//! garbled model reply must never prevent evaluation of the others. Failures
//! are folded into sentinel records instead of aborting the batch.

use tracing::warn;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::TextGenerator;
use crate::models::{CandidateEvaluation, Document};
use crate::screening::parser::parse_evaluation;
use crate::screening::prompts::build_evaluation_prompt;

/// Upper bound on resumes per evaluation request.
pub const MAX_RESUMES: usize = 10;

/// Evaluates every file against the job description, returning one record
/// per file in the original upload order.
///
/// Fails up front with `BatchSize` for an empty or oversized batch — before
/// any LLM call is made. After that point the batch always completes.
pub async fn evaluate_batch(
    job_description: &str,
    files: &[Document],
    llm: &dyn TextGenerator,
) -> Result<Vec<CandidateEvaluation>, AppError> {
    if files.is_empty() {
        return Err(AppError::BatchSize(
            "At least one resume is required".to_string(),
        ));
    }
    if files.len() > MAX_RESUMES {
        return Err(AppError::BatchSize(
            "Maximum 10 resumes allowed".to_string(),
        ));
    }

    let mut evaluations = Vec::with_capacity(files.len());
    for file in files {
        let evaluation = match evaluate_one(job_description, file, llm).await {
            Ok(evaluation) => evaluation,
            Err(cause) => {
                warn!("Error evaluating {}: {cause}", file.filename);
                failed_evaluation(&file.filename, &cause)
            }
        };
        evaluations.push(evaluation);
    }

    Ok(evaluations)
}

/// Extract → prompt → generate → parse, for a single resume.
async fn evaluate_one(
    job_description: &str,
    file: &Document,
    llm: &dyn TextGenerator,
) -> anyhow::Result<CandidateEvaluation> {
    let resume_text = extract_text(&file.content, &file.filename)?;
    let prompt = build_evaluation_prompt(job_description, &resume_text);
    let response = llm.generate(&prompt).await?;
    let fields = parse_evaluation(&response)?;

    Ok(CandidateEvaluation {
        filename: file.filename.clone(),
        score: fields.score,
        missing_skills: fields.missing_skills,
        remarks: fields.remarks,
    })
}

/// Sentinel record for a file that could not be processed. Keeps the
/// captured cause visible in remarks for the report.
fn failed_evaluation(filename: &str, cause: &anyhow::Error) -> CandidateEvaluation {
    CandidateEvaluation {
        filename: filename.to_string(),
        score: 0,
        missing_skills: vec!["Error processing resume".to_string()],
        remarks: format!("Could not process this resume: {cause}"),
    }
}
