//! Speech output controls for an answer.
//!
//! Two variants of the same button: `SpeechOutputLocal` hands the answer
//! text to the platform speech engine, `SpeechOutputService` asks the
//! conversation view for synthesized audio and plays it back through the
//! handlers in `SpeechConfig`. Neither implements synthesis itself.

use std::process::Stdio;
use std::time::Duration;

use dioxus::prelude::*;
use tokio::process::Command;

use crate::answer::parser::plain_text_for_copy;

/// Poll cadence for the stop button while the engine is speaking.
const STOP_POLL: Duration = Duration::from_millis(150);

/// Audio needed for one answer, keyed by its position in the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub index: usize,
    pub text: String,
}

/// Shared speech wiring provided by the conversation view.
///
/// The consumer owns audio fetching and playback; the button only calls
/// these handlers and reads the per-answer cache.
#[derive(Clone, Copy, PartialEq)]
pub struct SpeechConfig {
    /// Synthesized audio URL per answer index, `None` until fetched.
    pub audio_urls: Signal<Vec<Option<String>>>,
    pub is_playing: Signal<bool>,
    /// Fires when an answer needs audio synthesized.
    pub on_request_audio: EventHandler<SpeechRequest>,
    /// Fires with a cached URL to start playback.
    pub on_play: EventHandler<String>,
    /// Fires to stop the current playback.
    pub on_stop: EventHandler<()>,
}

/// Play/stop button that reads the answer aloud through the platform
/// speech engine (`say` on macOS, `espeak-ng` elsewhere). Degrades to a
/// log line when the engine is not installed.
#[component]
pub fn SpeechOutputLocal(answer_html: String) -> Element {
    let is_speaking = use_signal(|| false);
    let mut stop_requested = use_signal(|| false);

    let speaking = *is_speaking.read();
    let btn_class = if speaking {
        "answer-command-btn answer-speech-active"
    } else {
        "answer-command-btn"
    };

    rsx! {
        button {
            class: "{btn_class}",
            title: if speaking { "Stop speaking" } else { "Speak answer" },
            onclick: move |_| {
                if *is_speaking.read() {
                    stop_requested.set(true);
                    return;
                }
                let text = plain_text_for_copy(&answer_html);
                spawn(speak_with_engine(text, is_speaking, stop_requested));
            },
            if speaking { "\u{23f9}" } else { "\u{1f50a}" }
        }
    }
}

/// Run the platform speech engine until it finishes or stop is requested.
async fn speak_with_engine(
    text: String,
    mut is_speaking: Signal<bool>,
    mut stop_requested: Signal<bool>,
) {
    let engine = if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak-ng"
    };

    let spawned = Command::new(engine)
        .arg(&text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(engine, error = %e, "local speech engine unavailable");
            return;
        }
    };

    is_speaking.set(true);
    stop_requested.set(false);

    loop {
        tokio::select! {
            _ = child.wait() => break,
            _ = tokio::time::sleep(STOP_POLL) => {
                if *stop_requested.read() {
                    let _ = child.start_kill();
                }
            }
        }
    }

    is_speaking.set(false);
    stop_requested.set(false);
}

/// Play/stop button backed by the conversation view's audio service.
///
/// Disabled while the answer is still streaming. The first click requests
/// audio for this answer; once the URL lands in the cache, clicks play or
/// stop it through the config handlers.
#[component]
pub fn SpeechOutputService(
    answer_html: String,
    index: usize,
    is_streaming: ReadSignal<bool>,
    speech_config: SpeechConfig,
) -> Element {
    let playing = *speech_config.is_playing.read();
    let cached_url = speech_config
        .audio_urls
        .read()
        .get(index)
        .cloned()
        .flatten();

    rsx! {
        button {
            class: if playing { "answer-command-btn answer-speech-active" } else { "answer-command-btn" },
            title: if playing { "Stop audio" } else { "Play answer audio" },
            disabled: is_streaming(),
            onclick: move |_| {
                if playing {
                    speech_config.on_stop.call(());
                } else if let Some(url) = cached_url.clone() {
                    speech_config.on_play.call(url);
                } else {
                    let text = plain_text_for_copy(&answer_html);
                    speech_config.on_request_audio.call(SpeechRequest { index, text });
                }
            },
            if playing { "\u{23f9}" } else { "\u{1f50a}" }
        }
    }
}
