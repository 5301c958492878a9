//! Loading and error bubbles shown in place of an answer.

use dioxus::prelude::*;

/// Assistant glyph at the top-left of every answer bubble.
#[component]
pub fn AnswerIcon() -> Element {
    rsx! {
        span { class: "answer-icon", "\u{2728}" }
    }
}

/// Placeholder bubble while an answer is being generated.
#[component]
pub fn AnswerLoading() -> Element {
    rsx! {
        div {
            class: "answer-container answer-loading",
            AnswerIcon {}
            p {
                class: "answer-text",
                "Generating answer"
                span { class: "answer-loading-dots" }
            }
        }
    }
}

/// Error bubble with a retry button.
#[component]
pub fn AnswerError(error: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "answer-container answer-error",
            span { class: "answer-error-icon", "\u{26a0}" }
            p { class: "answer-text", "{error}" }
            button {
                class: "answer-retry-btn",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
