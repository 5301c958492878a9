//! Entry point for the AskDocs desktop app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod components;
mod session;
mod state;

const CHAT_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("askdocs_chat=info,askdocs_ui=info")
        .init();

    tracing::info!("Starting AskDocs");

    let wb = WindowBuilder::new()
        .with_title("AskDocs")
        .with_maximized(false)
        .with_inner_size(LogicalSize::new(980.0, 700.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(wb).with_custom_head(format!(
                r#"<style>{}</style><style>{}</style>"#,
                askdocs_ui::SHARED_CSS,
                CHAT_CSS,
            )),
        )
        .launch(components::app::App);
}
