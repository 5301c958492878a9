//! Question compose bar with send button.

use dioxus::prelude::*;

/// Question input component.
#[component]
pub fn QuestionInput(on_send: EventHandler<String>) -> Element {
    let mut text = use_signal(String::new);

    let can_send = !text.read().trim().is_empty();

    rsx! {
        div { class: "question-input-bar",
            textarea {
                class: "question-input",
                placeholder: "Ask a question about the company docs...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() && can_send {
                        evt.prevent_default();
                        let question = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(question);
                    }
                },
            }
            button {
                class: "send-button",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        let question = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(question);
                    }
                },
                "\u{27a4}"
            }
        }
    }
}
