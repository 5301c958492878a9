//! UI components for the AskDocs app.

pub mod analysis_panel;
pub mod app;
pub mod citation_viewer;
pub mod question_input;
pub mod transcript;
