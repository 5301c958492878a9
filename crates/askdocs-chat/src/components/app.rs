//! Root app component: shared context, speech wiring, and layout.

use dioxus::prelude::*;

use askdocs_ui::{SpeechConfig, SpeechRequest};

use crate::session;
use crate::state::{AnalysisTab, ChatContext, ChatTurn};

/// Root application component.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(|| ChatContext {
        turns: Signal::new(initial_turns()),
        selected_answer: Signal::new(None),
        analysis_tab: Signal::new(AnalysisTab::ThoughtProcess),
        active_citation: Signal::new(None),
        feedback_log: Signal::new(Vec::new()),
    });

    // Speech wiring. Synthesis and playback stay outside the components,
    // so these handlers only manage the URL cache and the playing flag.
    let mut audio_urls = use_signal(Vec::<Option<String>>::new);
    let mut is_playing = use_signal(|| false);

    let on_request_audio = EventHandler::new(move |request: SpeechRequest| {
        tracing::info!(
            index = request.index,
            chars = request.text.len(),
            "audio requested for answer"
        );
        let mut urls = audio_urls.write();
        if urls.len() <= request.index {
            urls.resize(request.index + 1, None);
        }
        if let Some(slot) = urls.get_mut(request.index) {
            *slot = Some(format!("speech/{}.mp3", request.index));
        }
    });
    let on_play = EventHandler::new(move |url: String| {
        tracing::info!(%url, "audio playback started");
        is_playing.set(true);
    });
    let on_stop = EventHandler::new(move |_: ()| {
        tracing::info!("audio playback stopped");
        is_playing.set(false);
    });

    let speech_config = SpeechConfig {
        audio_urls,
        is_playing,
        on_request_audio,
        on_play,
        on_stop,
    };

    let analysis_open = ctx.selected_answer.read().is_some();
    let citation_open = ctx.active_citation.read().is_some();

    rsx! {
        div {
            class: "app-layout",

            header {
                class: "app-header",
                h1 { "AskDocs" }
                span { class: "app-subtitle", "Chat with your company documents" }
            }

            super::transcript::Transcript { speech_config }

            super::question_input::QuestionInput {
                on_send: move |question: String| {
                    ask_question(ctx.turns, question);
                },
            }

            if analysis_open {
                super::analysis_panel::AnalysisPanel {}
            }
            if citation_open {
                super::citation_viewer::CitationViewer {}
            }
        }
    }
}

/// Seed the transcript by replaying the bundled sample session.
fn initial_turns() -> Vec<ChatTurn> {
    match session::load_sample_session() {
        Ok(entries) => entries
            .into_iter()
            .map(|entry| {
                let mut turn = ChatTurn::pending(entry.question);
                turn.response = Some(entry.response);
                turn
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode the bundled sample session");
            let mut turn = ChatTurn::pending("Replay the recorded session");
            turn.error = Some("The bundled sample session could not be decoded.".to_string());
            vec![turn]
        }
    }
}

/// Append a pending turn and schedule its canned answer.
pub(crate) fn ask_question(mut turns: Signal<Vec<ChatTurn>>, question: String) {
    let index = turns.read().len();
    turns.write().push(ChatTurn::pending(question.clone()));
    spawn(answer_turn(turns, index, question));
}

/// Resolve a turn with a canned answer after the simulated latency.
pub(crate) async fn answer_turn(mut turns: Signal<Vec<ChatTurn>>, index: usize, question: String) {
    tokio::time::sleep(std::time::Duration::from_millis(session::ANSWER_DELAY_MS)).await;
    let response = session::canned_response(&question);
    if let Some(turn) = turns.write().get_mut(index) {
        turn.response = Some(response);
        turn.error = None;
    }
}
