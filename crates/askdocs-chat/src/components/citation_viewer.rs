//! Citation viewer overlay.

use dioxus::prelude::*;

use crate::state::ChatContext;

/// Overlay showing the document a citation resolves to.
///
/// No document store is attached, so the viewer surfaces the resolved
/// content path plus the retrieved excerpts from the same source.
#[component]
pub fn CitationViewer() -> Element {
    let mut ctx = use_context::<ChatContext>();

    let Some(path) = ctx.active_citation.read().clone() else {
        return rsx! {};
    };

    let source = path.strip_prefix("content/").unwrap_or(&path).to_string();

    let excerpts: Vec<String> = ctx
        .turns
        .read()
        .iter()
        .filter_map(|turn| turn.response.as_ref())
        .flat_map(|response| response.context.data_points.text.iter())
        .filter(|entry| entry.starts_with(&source))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "citation-overlay",
            onclick: move |_| ctx.active_citation.set(None),

            div {
                class: "citation-viewer",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "citation-viewer-header",
                    h2 { "{source}" }
                    button {
                        class: "citation-viewer-close",
                        onclick: move |_| ctx.active_citation.set(None),
                        "\u{00d7}"
                    }
                }

                div { class: "citation-viewer-path", "{path}" }

                if excerpts.is_empty() {
                    p {
                        class: "citation-viewer-empty",
                        "No retrieved excerpts reference this source."
                    }
                } else {
                    for (i, excerpt) in excerpts.into_iter().enumerate() {
                        p { key: "{i}", class: "citation-viewer-excerpt", "{excerpt}" }
                    }
                }
            }
        }
    }
}
