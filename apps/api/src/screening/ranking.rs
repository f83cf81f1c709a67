//! Ranking & email selection over a completed evaluation batch.

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::CandidateEvaluation;
use crate::screening::prompts::{build_interview_email_prompt, build_rejection_email_prompt};

/// The highest-scoring candidate. Ties resolve to the first occurrence in
/// upload order. `None` only for an empty batch, which the evaluator
/// already rejects.
pub fn best_candidate(evaluations: &[CandidateEvaluation]) -> Option<&CandidateEvaluation> {
    let mut best: Option<&CandidateEvaluation> = None;
    for evaluation in evaluations {
        match best {
            Some(current) if evaluation.score <= current.score => {}
            _ => best = Some(evaluation),
        }
    }
    best
}

/// Presentation order: descending by score, stable on ties so equal scores
/// keep their upload order.
pub fn sort_by_score_desc(mut evaluations: Vec<CandidateEvaluation>) -> Vec<CandidateEvaluation> {
    evaluations.sort_by(|a, b| b.score.cmp(&a.score));
    evaluations
}

/// Requests the interview invitation for the best candidate and the generic
/// rejection template. Both are required for the report, so either failure
/// aborts the request — there is no per-candidate isolation here.
pub async fn generate_emails(
    job_description: &str,
    best: &CandidateEvaluation,
    llm: &dyn TextGenerator,
) -> Result<(String, String), AppError> {
    let interview_prompt =
        build_interview_email_prompt(job_description, best.score, &best.filename);
    let interview_email = llm
        .generate(&interview_prompt)
        .await
        .map_err(|e| AppError::EmailGeneration(format!("interview email: {e}")))?;

    let rejection_prompt = build_rejection_email_prompt(job_description);
    let rejection_email = llm
        .generate(&rejection_prompt)
        .await
        .map_err(|e| AppError::EmailGeneration(format!("rejection email: {e}")))?;

    Ok((interview_email, rejection_email))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    fn evaluation(filename: &str, score: u32) -> CandidateEvaluation {
        CandidateEvaluation {
            filename: filename.to_string(),
            score,
            missing_skills: vec![],
            remarks: String::new(),
        }
    }

    struct EchoLlm {
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    impl EchoLlm {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl TextGenerator for EchoLlm {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(LlmError::Api {
                    status: 503,
                    message: "service unavailable".to_string(),
                });
            }
            Ok(format!("email body {n}"))
        }
    }

    #[test]
    fn test_best_candidate_tie_breaks_on_upload_order() {
        let batch = vec![
            evaluation("a.pdf", 40),
            evaluation("b.pdf", 90),
            evaluation("c.pdf", 90),
            evaluation("d.pdf", 10),
        ];
        let best = best_candidate(&batch).unwrap();
        assert_eq!(best.filename, "b.pdf");
    }

    #[test]
    fn test_best_candidate_of_empty_batch_is_none() {
        assert!(best_candidate(&[]).is_none());
    }

    #[test]
    fn test_sort_is_descending_by_score() {
        let batch = vec![
            evaluation("a.pdf", 40),
            evaluation("b.pdf", 90),
            evaluation("c.pdf", 10),
        ];
        let sorted = sort_by_score_desc(batch);
        let scores: Vec<u32> = sorted.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 40, 10]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let batch = vec![
            evaluation("a.pdf", 50),
            evaluation("b.pdf", 90),
            evaluation("c.pdf", 50),
        ];
        let sorted = sort_by_score_desc(batch);
        assert_eq!(sorted[0].filename, "b.pdf");
        assert_eq!(sorted[1].filename, "a.pdf");
        assert_eq!(sorted[2].filename, "c.pdf");
    }

    #[tokio::test]
    async fn test_generate_emails_requests_both() {
        let llm = EchoLlm::new(false);
        let best = evaluation("winner.pdf", 93);

        let (interview, rejection) = generate_emails("JD text", &best, &llm).await.unwrap();
        assert_eq!(interview, "email body 0");
        assert_eq!(rejection, "email body 1");

        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("winner.pdf"));
        assert!(prompts[0].contains("93/100"));
        // Rejection template is generic — no candidate reference.
        assert!(!prompts[1].contains("winner.pdf"));
    }

    #[tokio::test]
    async fn test_email_failure_propagates() {
        let llm = EchoLlm::new(true);
        let best = evaluation("winner.pdf", 93);

        let err = generate_emails("JD text", &best, &llm).await.unwrap_err();
        match err {
            AppError::EmailGeneration(msg) => assert!(msg.contains("service unavailable")),
            other => panic!("expected EmailGeneration, got {other:?}"),
        }
    }
}
