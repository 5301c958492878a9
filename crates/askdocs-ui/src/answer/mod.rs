//! Answer components for AskDocs applications.
//!
//! Provides the answer bubble with inline citation markers, a citation
//! list, follow-up question chips, like/dislike feedback with a comment
//! dialog, copy-to-clipboard, and speech output controls.

pub mod bubble;
pub mod feedback;
pub mod parser;
pub mod speech;
pub mod variants;

pub use bubble::{Answer, AnswerProps};
pub use feedback::{FeedbackDialog, FeedbackRating, FeedbackState, FeedbackSubmission};
pub use parser::{ParsedAnswer, citation_content_path, parse_answer_to_html, plain_text_for_copy};
pub use speech::{SpeechConfig, SpeechOutputLocal, SpeechOutputService, SpeechRequest};
pub use variants::{AnswerError, AnswerIcon, AnswerLoading};
