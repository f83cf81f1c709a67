//! Parses raw model output into evaluation fields.
//!
//! Models routinely wrap the requested JSON object in markdown code fences
//! despite being told not to. The parser tolerates a ```json fence, a bare
//! ``` fence, or no fence at all, then validates the object strictly.

use serde::Deserialize;
use thiserror::Error;

/// Tagged failure for untrusted model output. Callers decide whether this
/// aborts the request or becomes a sentinel record.
#[derive(Debug, Error)]
#[error("Malformed model response: {0}")]
pub struct MalformedResponse(pub String);

/// The validated fields of one evaluation reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationFields {
    pub score: u32,
    pub missing_skills: Vec<String>,
    pub remarks: String,
}

#[derive(Debug, Deserialize)]
struct RawEvaluation {
    score: i64,
    missing_skills: Vec<String>,
    remarks: String,
}

/// Parses a raw model reply into `EvaluationFields`.
///
/// Missing or wrong-typed keys fail with `MalformedResponse` carrying the
/// serde cause. Integer scores outside 0–100 are clamped into range.
pub fn parse_evaluation(raw: &str) -> Result<EvaluationFields, MalformedResponse> {
    let payload = extract_json_payload(raw);

    let raw_eval: RawEvaluation =
        serde_json::from_str(payload).map_err(|e| MalformedResponse(e.to_string()))?;

    Ok(EvaluationFields {
        score: raw_eval.score.clamp(0, 100) as u32,
        missing_skills: raw_eval.missing_skills,
        remarks: raw_eval.remarks,
    })
}

/// Extracts the JSON payload from model output.
/// Prefers the first ```json fence, then the first bare ``` fence,
/// otherwise returns the whole trimmed text.
fn extract_json_payload(text: &str) -> &str {
    let text = text.trim();
    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        return rest.split("```").next().unwrap_or(rest).trim();
    }
    if let Some(start) = text.find("```") {
        let rest = &text[start + "```".len()..];
        return rest.split("```").next().unwrap_or(rest).trim();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_JSON: &str = r#"{
        "score": 85,
        "missing_skills": ["Terraform", "Helm"],
        "remarks": "Strong backend match with minor infrastructure gaps."
    }"#;

    #[test]
    fn test_parses_clean_json() {
        let fields = parse_evaluation(CLEAN_JSON).unwrap();
        assert_eq!(fields.score, 85);
        assert_eq!(fields.missing_skills, vec!["Terraform", "Helm"]);
        assert!(fields.remarks.starts_with("Strong backend match"));
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let wrapped = format!("```json\n{CLEAN_JSON}\n```");
        let fields = parse_evaluation(&wrapped).unwrap();
        assert_eq!(fields.score, 85);
    }

    #[test]
    fn test_generic_fence_is_stripped() {
        let wrapped = format!("```\n{CLEAN_JSON}\n```");
        let fields = parse_evaluation(&wrapped).unwrap();
        assert_eq!(fields.score, 85);
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let plain = parse_evaluation(CLEAN_JSON).unwrap();
        let fenced = parse_evaluation(&format!("```json\n{CLEAN_JSON}\n```")).unwrap();
        assert_eq!(plain, fenced);
    }

    #[test]
    fn test_prose_around_fence_is_ignored() {
        let noisy = format!("Here is my evaluation:\n```json\n{CLEAN_JSON}\n```\nLet me know!");
        let fields = parse_evaluation(&noisy).unwrap();
        assert_eq!(fields.score, 85);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let padded = format!("\n\n   {CLEAN_JSON}   \n");
        assert_eq!(parse_evaluation(&padded).unwrap().score, 85);
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let err = parse_evaluation(r#"{"score": 50, "remarks": "no skills key"}"#).unwrap_err();
        assert!(err.0.contains("missing_skills"));
    }

    #[test]
    fn test_wrong_typed_score_is_malformed() {
        let raw = r#"{"score": "eighty", "missing_skills": [], "remarks": "r"}"#;
        assert!(parse_evaluation(raw).is_err());
    }

    #[test]
    fn test_non_json_is_malformed() {
        assert!(parse_evaluation("I cannot evaluate this resume.").is_err());
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let high = r#"{"score": 140, "missing_skills": [], "remarks": "r"}"#;
        let low = r#"{"score": -5, "missing_skills": [], "remarks": "r"}"#;
        assert_eq!(parse_evaluation(high).unwrap().score, 100);
        assert_eq!(parse_evaluation(low).unwrap().score, 0);
    }
}
