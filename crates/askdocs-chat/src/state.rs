//! Global app state using Dioxus signals.

use askdocs_types::ChatResponse;
use askdocs_ui::FeedbackSubmission;
use chrono::{DateTime, Local};
use dioxus::prelude::*;

/// Which analysis tab is open for the selected answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisTab {
    ThoughtProcess,
    SupportingContent,
}

/// One question/answer exchange in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub question: String,
    pub asked_at: DateTime<Local>,
    pub response: Option<ChatResponse>,
    pub error: Option<String>,
}

impl ChatTurn {
    pub fn pending(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            asked_at: Local::now(),
            response: None,
            error: None,
        }
    }

    /// Waiting for an answer with no failure recorded yet.
    pub fn is_loading(&self) -> bool {
        self.response.is_none() && self.error.is_none()
    }

    pub fn asked_at_label(&self) -> String {
        self.asked_at.format("%H:%M").to_string()
    }
}

/// Shared app state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub turns: Signal<Vec<ChatTurn>>,
    /// Index of the answer the analysis panel is inspecting, `None` when closed.
    pub selected_answer: Signal<Option<usize>>,
    pub analysis_tab: Signal<AnalysisTab>,
    /// Resolved content path shown by the citation viewer, `None` when closed.
    pub active_citation: Signal<Option<String>>,
    /// Feedback received per answer index, newest last.
    pub feedback_log: Signal<Vec<(usize, FeedbackSubmission)>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_turn_is_loading() {
        let turn = ChatTurn::pending("What does PerksPlus cover?");
        assert!(turn.is_loading());
        assert!(turn.response.is_none());
        assert!(turn.error.is_none());
    }

    #[test]
    fn test_answered_turn_is_not_loading() {
        let mut turn = ChatTurn::pending("What does PerksPlus cover?");
        turn.response = Some(ChatResponse::from_content("Gym memberships [PerksPlus.pdf]."));
        assert!(!turn.is_loading());
    }

    #[test]
    fn test_failed_turn_is_not_loading() {
        let mut turn = ChatTurn::pending("What does PerksPlus cover?");
        turn.error = Some("sample session unavailable".to_string());
        assert!(!turn.is_loading());
    }
}
