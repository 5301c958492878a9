//! Bundled sample session and canned answers.
//!
//! The app runs offline: it replays a recorded session at startup and
//! answers typed questions from a small canned generator, with a short
//! simulated latency so the loading bubble is visible.

use std::collections::BTreeMap;

use askdocs_types::{ChatMessage, ChatResponse, DataPoints, ResponseContext, ThoughtStep};
use serde::Deserialize;
use serde_json::json;

/// Recorded exchanges replayed at startup, in the backend wire shape.
const SAMPLE_SESSION: &str = include_str!("../assets/sample_session.json");

/// Simulated answer latency.
pub const ANSWER_DELAY_MS: u64 = 900;

/// One recorded exchange in the bundled session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionEntry {
    pub question: String,
    pub response: ChatResponse,
}

/// Decode the bundled sample session.
pub fn load_sample_session() -> anyhow::Result<Vec<SessionEntry>> {
    Ok(serde_json::from_str(SAMPLE_SESSION)?)
}

/// Build an answer for a typed question.
///
/// No retrieval backend is attached, so the answer is canned, but it
/// carries the full response context shape the answer view renders.
pub fn canned_response(question: &str) -> ChatResponse {
    let query = question.trim().trim_end_matches('?').to_lowercase();

    ChatResponse {
        message: ChatMessage::assistant(format!(
            "This build runs without a retrieval backend, so here is a canned answer \
             about **{query}** [employee_handbook.pdf]. The exchanges replayed above \
             come from a recorded session; ask about benefits or roles to see the \
             same shape with richer sources [Benefit_Options.pdf]."
        )),
        context: ResponseContext {
            data_points: DataPoints {
                text: vec![
                    "employee_handbook.pdf: The employee handbook is the fallback source for \
                     canned answers."
                        .to_string(),
                    "Benefit_Options.pdf: Compares the Northwind Health Plus and Standard plans \
                     offered to employees."
                        .to_string(),
                ],
            },
            thoughts: vec![
                ThoughtStep::new(
                    "Prompt to generate search query",
                    json!([format!("Generate a search query for: {question}")]),
                ),
                ThoughtStep::new("Search using generated search query", json!(query)).with_props(
                    BTreeMap::from([
                        ("model".to_string(), json!("canned")),
                        ("top".to_string(), json!(3)),
                    ]),
                ),
                ThoughtStep::new(
                    "Search results",
                    json!([
                        {"id": "employee_handbook.pdf", "score": 1.0},
                        {"id": "Benefit_Options.pdf", "score": 0.8}
                    ]),
                ),
            ],
            followup_questions: Some(vec![
                "What is included in the Northwind Health Plus plan?".to_string(),
                "What happens in a performance review?".to_string(),
            ]),
        },
        session_state: serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_session_decodes() {
        let entries = load_sample_session().unwrap();
        assert!(entries.len() >= 3);
        for entry in &entries {
            assert!(!entry.question.is_empty());
            assert!(entry.response.has_data_points());
            assert!(entry.response.has_thoughts());
        }
    }

    #[test]
    fn test_sample_session_first_entry_is_cited() {
        let entries = load_sample_session().unwrap();
        let first = &entries[0].response;
        assert!(first.content().contains("[Benefit_Options.pdf]"));
        assert!(!first.followup_questions().is_empty());
    }

    #[test]
    fn test_canned_response_carries_full_context() {
        let response = canned_response("What is the refund policy?");
        assert!(response.content().contains("[employee_handbook.pdf]"));
        assert!(response.content().contains("the refund policy"));
        assert!(response.has_thoughts());
        assert!(response.has_data_points());
        assert!(!response.followup_questions().is_empty());
    }
}
