//! Wire model for retrieval-augmented chat responses.
//!
//! Mirrors the JSON shape the answer backend emits: an assistant message
//! plus a response context carrying the retrieval trace (thought steps),
//! supporting content snippets, and optional follow-up questions.

pub mod response;

pub use response::{ChatMessage, ChatResponse, DataPoints, ResponseContext, Role, ThoughtStep};
