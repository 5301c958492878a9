//! The answer bubble.
//!
//! Renders one assistant answer: a command header, the sanitized markdown
//! body with inline citation markers, the citation list, and optional
//! follow-up chips. Copy, analysis, speech, and feedback actions report
//! upstream through optional handler props.

use dioxus::prelude::*;

use askdocs_types::ChatResponse;

use crate::answer::feedback::{FeedbackDialog, FeedbackRating, FeedbackState, FeedbackSubmission};
use crate::answer::parser::{citation_content_path, parse_answer_to_html, plain_text_for_copy};
use crate::answer::speech::{SpeechConfig, SpeechOutputLocal, SpeechOutputService};
use crate::answer::variants::AnswerIcon;
use crate::markdown::{render_markdown_to_html, sanitize_html};

/// One assistant answer in the conversation transcript.
#[component]
pub fn Answer(
    /// The complete answer object; parsing is memoized on it.
    answer: ReadSignal<ChatResponse>,
    /// Position of this answer in the conversation, also the audio cache key.
    index: usize,
    speech_config: SpeechConfig,
    /// Tokens still arriving: hold back half-typed citations and audio.
    is_streaming: ReadSignal<bool>,
    /// Highlight this bubble as the one under analysis.
    #[props(default)]
    is_selected: bool,
    /// Fires with the resolved content path of a clicked citation.
    on_citation_clicked: Option<EventHandler<String>>,
    on_thought_process_clicked: Option<EventHandler<()>>,
    on_supporting_content_clicked: Option<EventHandler<()>>,
    /// Fires with the clicked follow-up question text.
    on_followup_clicked: Option<EventHandler<String>>,
    /// Like/dislike controls render only when this is wired.
    on_feedback: Option<EventHandler<FeedbackSubmission>>,
    #[props(default)]
    show_followup_questions: bool,
    #[props(default)]
    show_speech_output_local: bool,
    #[props(default)]
    show_speech_output_service: bool,
) -> Element {
    let mut copied = use_signal(|| false);
    let mut feedback = use_signal(FeedbackState::default);

    // parse -> sanitize -> markdown, each stage redone only when its input moves
    let parsed = use_memo(move || parse_answer_to_html(&answer.read(), *is_streaming.read()));
    let sanitized_answer_html = use_memo(move || sanitize_html(&parsed.read().answer_html));
    let rendered_body = use_memo(move || render_markdown_to_html(&sanitized_answer_html.read()));

    let has_thoughts = answer.read().has_thoughts();
    let has_data_points = answer.read().has_data_points();
    let body_html = rendered_body.read().clone();
    let is_copied = copied();
    let fb = feedback.read().clone();

    let citation_rows: Vec<(usize, String, String)> = parsed
        .read()
        .citations
        .iter()
        .enumerate()
        .map(|(i, citation)| (i + 1, citation.clone(), citation_content_path(citation)))
        .collect();

    let followups = answer.read().followup_questions().to_vec();
    let show_followups = followups_visible(
        &followups,
        show_followup_questions,
        on_followup_clicked.is_some(),
    );
    let followup_rows: Vec<(String, String)> =
        followups.iter().map(|q| (q.clone(), q.clone())).collect();

    let container_class = if is_selected {
        "answer-container answer-selected"
    } else {
        "answer-container"
    };
    let like_class = if fb.selected == FeedbackRating::Positive {
        "answer-command-btn answer-feedback-active"
    } else {
        "answer-command-btn"
    };
    let dislike_class = if fb.selected == FeedbackRating::Negative {
        "answer-command-btn answer-feedback-active"
    } else {
        "answer-command-btn"
    };

    rsx! {
        div {
            class: "{container_class}",

            // Command header
            div {
                class: "answer-header",
                AnswerIcon {}
                div {
                    class: "answer-commands",
                    button {
                        class: "answer-command-btn",
                        title: if is_copied { "Copied" } else { "Copy answer" },
                        onclick: move |_| {
                            let text = plain_text_for_copy(&sanitized_answer_html.read());
                            match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
                                Ok(()) => {
                                    copied.set(true);
                                    // Reset the indicator after 2 seconds
                                    spawn(async move {
                                        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                        copied.set(false);
                                    });
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "failed to copy answer to clipboard");
                                }
                            }
                        },
                        if is_copied { "\u{2705}" } else { "\u{1f4cb}" }
                    }
                    button {
                        class: "answer-command-btn",
                        title: "Show thought process",
                        disabled: !has_thoughts || on_thought_process_clicked.is_none(),
                        onclick: move |_| {
                            if let Some(handler) = on_thought_process_clicked {
                                handler.call(());
                            }
                        },
                        "\u{1f4a1}"
                    }
                    button {
                        class: "answer-command-btn",
                        title: "Show supporting content",
                        disabled: !has_data_points || on_supporting_content_clicked.is_none(),
                        onclick: move |_| {
                            if let Some(handler) = on_supporting_content_clicked {
                                handler.call(());
                            }
                        },
                        "\u{1f4da}"
                    }
                    if show_speech_output_service {
                        SpeechOutputService {
                            answer_html: sanitized_answer_html.read().clone(),
                            index,
                            is_streaming,
                            speech_config,
                        }
                    }
                    if show_speech_output_local {
                        SpeechOutputLocal { answer_html: sanitized_answer_html.read().clone() }
                    }
                    if on_feedback.is_some() {
                        button {
                            class: "{like_class}",
                            title: "Good answer",
                            onclick: move |_| {
                                let submission = feedback.write().toggle_positive();
                                if let Some(handler) = on_feedback {
                                    handler.call(submission);
                                }
                            },
                            "\u{1f44d}"
                        }
                        button {
                            class: "{dislike_class}",
                            title: "Bad answer",
                            onclick: move |_| feedback.write().request_negative(),
                            "\u{1f44e}"
                        }
                    }
                }
            }

            // Rendered answer body
            div {
                class: "answer-body",
                dangerous_inner_html: "{body_html}",
            }

            // Citation list
            if !citation_rows.is_empty() {
                div {
                    class: "answer-citations",
                    span { class: "answer-citations-label", "Citations:" }
                    for (number, citation, path) in citation_rows {
                        a {
                            key: "{citation}",
                            class: "answer-citation-link",
                            title: "{citation}",
                            onclick: move |_| {
                                if let Some(handler) = on_citation_clicked {
                                    handler.call(path.clone());
                                }
                            },
                            "{number}. {citation}"
                        }
                    }
                }
            }

            // Follow-up chips
            if show_followups {
                div {
                    class: "answer-followups",
                    span { class: "answer-followups-label", "Follow-up questions:" }
                    for (label, question) in followup_rows {
                        button {
                            key: "{label}",
                            class: "answer-followup-chip",
                            onclick: move |_| {
                                if let Some(handler) = on_followup_clicked {
                                    handler.call(question.clone());
                                }
                            },
                            "{label}"
                        }
                    }
                }
            }

            if fb.dialog_open {
                FeedbackDialog {
                    message: fb.message.clone(),
                    on_message_change: move |value: String| feedback.write().message = value,
                    on_submit: move |_| {
                        let submission = feedback.write().submit_negative();
                        if let Some(handler) = on_feedback {
                            handler.call(submission);
                        }
                    },
                    on_cancel: move |_| feedback.write().cancel_dialog(),
                }
            }
        }
    }
}

/// Follow-up chips show only when questions exist, the view enables them,
/// and a click handler is wired.
fn followups_visible(questions: &[String], enabled: bool, has_handler: bool) -> bool {
    !questions.is_empty() && enabled && has_handler
}
