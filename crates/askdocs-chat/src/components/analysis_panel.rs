//! Analysis overlay: thought process and supporting content tabs.

use dioxus::prelude::*;
use serde_json::Value;

use askdocs_types::ThoughtStep;

use crate::state::{AnalysisTab, ChatContext};

/// Overlay inspecting the selected answer's retrieval trace.
///
/// Follows the shared overlay pattern: backdrop click closes, stop
/// propagation on the panel itself.
#[component]
pub fn AnalysisPanel() -> Element {
    let mut ctx = use_context::<ChatContext>();

    let Some(index) = *ctx.selected_answer.read() else {
        return rsx! {};
    };
    let Some(response) = ctx
        .turns
        .read()
        .get(index)
        .and_then(|turn| turn.response.clone())
    else {
        return rsx! {};
    };

    let tab = *ctx.analysis_tab.read();
    let answer_number = index + 1;
    let thoughts = response.context.thoughts.clone();
    let data_points = response.context.data_points.text.clone();

    let thought_tab_class = if tab == AnalysisTab::ThoughtProcess {
        "analysis-tab analysis-tab-active"
    } else {
        "analysis-tab"
    };
    let content_tab_class = if tab == AnalysisTab::SupportingContent {
        "analysis-tab analysis-tab-active"
    } else {
        "analysis-tab"
    };

    rsx! {
        div {
            class: "analysis-overlay",
            onclick: move |_| ctx.selected_answer.set(None),

            div {
                class: "analysis-panel",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "analysis-header",
                    h2 { "Answer {answer_number}" }
                    button {
                        class: "analysis-close",
                        onclick: move |_| ctx.selected_answer.set(None),
                        "\u{00d7}"
                    }
                }

                div {
                    class: "analysis-tabs",
                    button {
                        class: "{thought_tab_class}",
                        onclick: move |_| ctx.analysis_tab.set(AnalysisTab::ThoughtProcess),
                        "Thought process"
                    }
                    button {
                        class: "{content_tab_class}",
                        onclick: move |_| ctx.analysis_tab.set(AnalysisTab::SupportingContent),
                        "Supporting content"
                    }
                }

                div {
                    class: "analysis-content",
                    if tab == AnalysisTab::ThoughtProcess {
                        for (i, step) in thoughts.into_iter().enumerate() {
                            ThoughtStepView { key: "{i}", step }
                        }
                    } else {
                        for (i, entry) in data_points.into_iter().enumerate() {
                            {
                                let (source, content) = split_data_point(&entry);
                                rsx! {
                                    div {
                                        key: "{i}",
                                        class: "supporting-entry",
                                        div { class: "supporting-source", "{source}" }
                                        div { class: "supporting-text", "{content}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One retrieval step: title, prop badges, free-form payload.
#[component]
fn ThoughtStepView(step: ThoughtStep) -> Element {
    let props: Vec<(String, String)> = step
        .props
        .as_ref()
        .map(|props| {
            props
                .iter()
                .map(|(name, value)| (name.clone(), display_value(value)))
                .collect()
        })
        .unwrap_or_default();

    let payload = display_value(&step.description);
    let preformatted = !step.description.is_string();

    rsx! {
        div {
            class: "thought-step",
            div { class: "thought-step-title", "{step.title}" }

            if !props.is_empty() {
                div {
                    class: "thought-step-props",
                    for (name, value) in props {
                        span { key: "{name}", class: "thought-step-prop", "{name}: {value}" }
                    }
                }
            }

            if preformatted {
                pre { class: "thought-step-payload", "{payload}" }
            } else {
                div { class: "thought-step-payload", "{payload}" }
            }
        }
    }
}

/// Split a `"<source>: <content>"` supporting entry.
fn split_data_point(entry: &str) -> (String, String) {
    match entry.split_once(": ") {
        Some((source, content)) => (source.to_string(), content.to_string()),
        None => (entry.to_string(), String::new()),
    }
}

/// Render a JSON payload for display: bare text for strings, pretty
/// JSON otherwise.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}
