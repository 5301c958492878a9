//! Shared UI components for AskDocs applications.
//!
//! Provides the answer bubble with citation markers, markdown rendering
//! and sanitization, feedback capture, and speech output controls.

pub mod answer;
pub mod markdown;

pub use answer::{
    Answer, AnswerError, AnswerIcon, AnswerLoading, FeedbackRating, FeedbackSubmission,
    SpeechConfig, SpeechOutputLocal, SpeechOutputService, SpeechRequest, citation_content_path,
    parse_answer_to_html, plain_text_for_copy,
};
pub use markdown::{render_markdown_to_html, sanitize_html};

/// Shared CSS containing design tokens and base styles for the answer components.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
