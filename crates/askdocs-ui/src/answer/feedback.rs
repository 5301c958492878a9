//! Like/dislike feedback capture for an answer.

use dioxus::prelude::*;

/// Visible rating on an answer's feedback controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackRating {
    #[default]
    Neutral,
    Positive,
    Negative,
}

/// A rating reported upstream, with an optional free-text comment.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    pub rating: FeedbackRating,
    pub message: Option<String>,
}

/// Per-answer feedback state.
///
/// Transitions are pure so the toggle rules stay testable without a UI;
/// a transition returns the submission to report upstream, if any.
/// `dialog_open` means a dislike is pending and neither sent nor
/// dismissed yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackState {
    pub selected: FeedbackRating,
    pub dialog_open: bool,
    pub message: String,
}

impl FeedbackState {
    /// Like click: select Positive, or back to Neutral when already liked.
    pub fn toggle_positive(&mut self) -> FeedbackSubmission {
        self.selected = match self.selected {
            FeedbackRating::Positive => FeedbackRating::Neutral,
            _ => FeedbackRating::Positive,
        };
        FeedbackSubmission {
            rating: self.selected,
            message: None,
        }
    }

    /// Dislike click: open the comment dialog. Nothing is reported and
    /// the visible selection does not move until submit.
    pub fn request_negative(&mut self) {
        self.dialog_open = true;
    }

    /// Dialog submit: select Negative and report it with the comment.
    pub fn submit_negative(&mut self) -> FeedbackSubmission {
        self.selected = FeedbackRating::Negative;
        self.dialog_open = false;
        let message = std::mem::take(&mut self.message);
        FeedbackSubmission {
            rating: FeedbackRating::Negative,
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Dialog cancel: close and discard the comment, keep the prior rating.
    pub fn cancel_dialog(&mut self) {
        self.dialog_open = false;
        self.message.clear();
    }
}

/// Comment dialog shown when an answer is disliked.
///
/// Follows the shared overlay pattern: backdrop click cancels,
/// stop propagation on the dialog itself.
#[component]
pub fn FeedbackDialog(
    /// Current comment text, owned by the parent answer's feedback state.
    message: String,
    /// Fires on every edit so the parent keeps the draft.
    on_message_change: EventHandler<String>,
    /// Fires when the user sends the feedback.
    on_submit: EventHandler<()>,
    /// Fires when the dialog is dismissed without sending.
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "feedback-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "feedback-dialog",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "feedback-dialog-header",
                    h2 { "What went wrong?" }
                    button {
                        class: "feedback-dialog-close",
                        onclick: move |_| on_cancel.call(()),
                        "\u{00d7}"
                    }
                }

                textarea {
                    class: "feedback-dialog-input",
                    placeholder: "Tell us what was wrong with this answer (optional)",
                    value: "{message}",
                    oninput: move |evt| on_message_change.call(evt.value()),
                }

                div {
                    class: "feedback-dialog-actions",
                    button {
                        class: "feedback-dialog-cancel",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "feedback-dialog-submit",
                        onclick: move |_| on_submit.call(()),
                        "Send feedback"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_then_unlike_reports_positive_then_neutral() {
        let mut state = FeedbackState::default();

        let first = state.toggle_positive();
        assert_eq!(first.rating, FeedbackRating::Positive);
        assert_eq!(state.selected, FeedbackRating::Positive);

        let second = state.toggle_positive();
        assert_eq!(second.rating, FeedbackRating::Neutral);
        assert_eq!(state.selected, FeedbackRating::Neutral);
        assert!(second.message.is_none());
    }

    #[test]
    fn test_dislike_opens_dialog_without_reporting() {
        let mut state = FeedbackState::default();

        state.request_negative();
        assert!(state.dialog_open);
        // nothing selected until the dialog resolves
        assert_eq!(state.selected, FeedbackRating::Neutral);
    }

    #[test]
    fn test_submit_reports_negative_with_comment() {
        let mut state = FeedbackState::default();
        state.request_negative();
        state.message = "too slow".to_string();

        let submission = state.submit_negative();
        assert_eq!(submission.rating, FeedbackRating::Negative);
        assert_eq!(submission.message.as_deref(), Some("too slow"));
        assert_eq!(state.selected, FeedbackRating::Negative);
        assert!(!state.dialog_open);
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_submit_without_comment_reports_no_message() {
        let mut state = FeedbackState::default();
        state.request_negative();
        state.message = "   ".to_string();

        let submission = state.submit_negative();
        assert_eq!(submission.rating, FeedbackRating::Negative);
        assert!(submission.message.is_none());
    }

    #[test]
    fn test_cancel_keeps_prior_rating() {
        let mut state = FeedbackState::default();
        state.toggle_positive();
        state.request_negative();
        state.message = "draft".to_string();

        state.cancel_dialog();
        assert!(!state.dialog_open);
        assert!(state.message.is_empty());
        assert_eq!(state.selected, FeedbackRating::Positive);
    }

    #[test]
    fn test_dislike_while_negative_reopens_dialog() {
        let mut state = FeedbackState::default();
        state.request_negative();
        state.message = "wrong citation".to_string();
        state.submit_negative();

        state.request_negative();
        assert!(state.dialog_open);
        assert_eq!(state.selected, FeedbackRating::Negative);
        assert!(state.message.is_empty());
    }
}
