//! Countdown timer widget built with Yew.
//! Wires the countdown engine to the ring inputs, the one-second tick
//! interval, the audio alert, and the transport controls.

use gloo_timers::callback::Interval;
use ring_timer::{Countdown, Field, RunState, TickOutcome};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{PauseIcon, PlayIcon, ProgressRing, ResetIcon, SoundOffIcon, SoundOnIcon};
use config::*;
use hooks::use_audio_alert;
use utils::format_padded;

/// Build the `oninput` handler for one time field. The state is stored even
/// when the engine rejects the text, so the controlled input snaps back to
/// the canonical padded value on the next render.
fn field_input_callback(
    countdown: &UseStateHandle<Countdown>,
    field: Field,
) -> Callback<InputEvent> {
    let countdown = countdown.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*countdown).clone();
        next.set_field(field, &input.value());
        countdown.set(next);
    })
}

/// Primary widget component owning the engine state and the tick resource.
#[function_component(Timer)]
fn timer() -> Html {
    let countdown = use_state(Countdown::default);
    let audio = use_audio_alert(ALERT_AUDIO_SRC);

    // At most one interval is ever alive: the effect re-runs on every engine
    // state change, and its destructor drops the previous handle (cancelling
    // the underlying JS interval) before a new one is created. Unmount runs
    // the destructor too, so a released handle never fires again.
    {
        let countdown = countdown.clone();
        let play = audio.play.clone();
        use_effect_with((*countdown).clone(), move |state| {
            let ticker = (state.run_state == RunState::Running).then(|| {
                let countdown = countdown.clone();
                let play = play.clone();
                Interval::new(TICK_MS, move || {
                    let mut next = (*countdown).clone();
                    if let TickOutcome::Expired { alert } = next.tick() {
                        if alert {
                            play.emit(());
                        }
                    }
                    countdown.set(next);
                })
            });
            move || drop(ticker)
        });
    }

    let on_hour_input = field_input_callback(&countdown, Field::Hour);
    let on_minute_input = field_input_callback(&countdown, Field::Minute);
    let on_second_input = field_input_callback(&countdown, Field::Second);

    let on_toggle_run = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*countdown).clone();
            next.toggle_run();
            countdown.set(next);
        })
    };

    let on_reset = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*countdown).clone();
            next.reset();
            countdown.set(next);
        })
    };

    let on_toggle_alert = {
        let countdown = countdown.clone();
        let pause = audio.pause.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*countdown).clone();
            let enabled = !next.alert_enabled;
            next.set_alert(enabled);
            // Muting also silences an alert that is already sounding
            if !enabled {
                pause.emit(());
            }
            countdown.set(next);
        })
    };

    let running = countdown.run_state == RunState::Running;

    html! {
        <div class="timer-container">
            <div class="sound-icon" onclick={on_toggle_alert}>
                if countdown.alert_enabled {
                    <SoundOnIcon />
                } else {
                    <SoundOffIcon />
                }
            </div>
            <div class="input-container">
                <ProgressRing
                    id="hour"
                    color={HOUR_RING_COLOR}
                    degrees={countdown.ring_degrees(Field::Hour)}
                    value={format_padded(countdown.hours)}
                    oninput={on_hour_input}
                />
                <span class="field-separator">{ ":" }</span>
                <ProgressRing
                    id="minute"
                    color={MINUTE_RING_COLOR}
                    degrees={countdown.ring_degrees(Field::Minute)}
                    value={format_padded(countdown.minutes)}
                    oninput={on_minute_input}
                />
                <span class="field-separator">{ ":" }</span>
                <ProgressRing
                    id="second"
                    color={SECOND_RING_COLOR}
                    degrees={countdown.ring_degrees(Field::Second)}
                    value={format_padded(countdown.seconds)}
                    oninput={on_second_input}
                />
            </div>
            <div class="action-btns">
                <button onclick={on_toggle_run}>
                    if running {
                        <PauseIcon />
                    } else {
                        <PlayIcon />
                    }
                </button>
                <button onclick={on_reset}>
                    <ResetIcon />
                </button>
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Timer>::new().render();
}
