//! Reusable hooks for the timer UI.

use log::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

/// Play/pause handles for the alert sound owned by the widget.
#[derive(Clone, PartialEq)]
pub struct AudioAlert {
    pub play: Callback<()>,
    pub pause: Callback<()>,
}

/// Custom hook owning one audio element for a fixed alert asset.
///
/// The element is created on first render and paused again when the widget
/// unmounts, so playback cannot outlive it. Playback is best-effort: a
/// rejected play promise (autoplay policy, missing asset) is swallowed.
/// If the host refuses to construct the element at all, both callbacks
/// degrade to no-ops and the countdown itself is unaffected.
#[hook]
pub fn use_audio_alert(src: &'static str) -> AudioAlert {
    let audio = use_memo((), move |_| HtmlAudioElement::new_with_src(src).ok());

    // Release the audio resource on teardown
    {
        let audio = audio.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(element) = audio.as_ref() {
                    let _ = element.pause();
                }
            }
        });
    }

    let play = {
        let audio = audio.clone();
        Callback::from(move |_| {
            if let Some(element) = audio.as_ref() {
                if let Ok(promise) = element.play() {
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            debug!("alert playback rejected: {:?}", err);
                        }
                    });
                }
            }
        })
    };

    let pause = {
        let audio = audio.clone();
        Callback::from(move |_| {
            if let Some(element) = audio.as_ref() {
                let _ = element.pause();
            }
        })
    };

    AudioAlert { play, pause }
}
