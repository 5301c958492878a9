//! Conversation transcript with auto-scroll.

use dioxus::prelude::*;

use askdocs_ui::{Answer, AnswerError, AnswerLoading, FeedbackSubmission, SpeechConfig};

use super::app::{answer_turn, ask_question};
use crate::state::{AnalysisTab, ChatContext, ChatTurn};

/// Transcript of all turns, newest at the bottom.
#[component]
pub fn Transcript(speech_config: SpeechConfig) -> Element {
    let ctx = use_context::<ChatContext>();
    let turns = ctx.turns.read().clone();

    // Auto-scroll whenever the transcript changes
    use_effect(move || {
        let _count = ctx.turns.read().len();
        spawn(async move {
            // Small delay to let DOM update
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            let js = r#"document.getElementById('transcript-scroll-anchor')?.scrollIntoView({behavior:'smooth'})"#;
            document::eval(js);
        });
    });

    rsx! {
        div {
            class: "transcript",

            if turns.is_empty() {
                div {
                    class: "transcript-empty",
                    "Ask a question about the company docs to get started."
                }
            }

            for (index, turn) in turns.into_iter().enumerate() {
                TurnView {
                    key: "{index}",
                    turn,
                    index,
                    speech_config,
                }
            }

            // Scroll anchor
            div { id: "transcript-scroll-anchor" }
        }
    }
}

/// One question/answer exchange.
#[component]
fn TurnView(turn: ChatTurn, index: usize, speech_config: SpeechConfig) -> Element {
    let mut ctx = use_context::<ChatContext>();

    let asked_at = turn.asked_at_label();
    let question = turn.question.clone();
    let is_selected = *ctx.selected_answer.read() == Some(index);

    rsx! {
        div {
            class: "turn",

            div {
                class: "question-row",
                div { class: "question-bubble", "{turn.question}" }
                span { class: "question-time", "{asked_at}" }
            }

            if turn.is_loading() {
                AnswerLoading {}
            } else if let Some(response) = turn.response.clone() {
                Answer {
                    answer: response,
                    index,
                    speech_config,
                    is_streaming: false,
                    is_selected,
                    on_citation_clicked: move |path: String| {
                        ctx.active_citation.set(Some(path));
                    },
                    on_thought_process_clicked: move |_| {
                        ctx.analysis_tab.set(AnalysisTab::ThoughtProcess);
                        ctx.selected_answer.set(Some(index));
                    },
                    on_supporting_content_clicked: move |_| {
                        ctx.analysis_tab.set(AnalysisTab::SupportingContent);
                        ctx.selected_answer.set(Some(index));
                    },
                    on_followup_clicked: move |followup: String| {
                        ask_question(ctx.turns, followup);
                    },
                    on_feedback: move |submission: FeedbackSubmission| {
                        tracing::info!(index, rating = ?submission.rating, "answer feedback");
                        ctx.feedback_log.write().push((index, submission));
                    },
                    show_followup_questions: true,
                    show_speech_output_local: true,
                    show_speech_output_service: true,
                }
            } else if let Some(error) = turn.error.clone() {
                AnswerError {
                    error,
                    on_retry: move |_| {
                        if let Some(pending) = ctx.turns.write().get_mut(index) {
                            pending.error = None;
                        }
                        spawn(answer_turn(ctx.turns, index, question.clone()));
                    },
                }
            }
        }
    }
}
