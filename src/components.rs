//! Pure Yew view components for the countdown widget.
//!
//! Everything here renders from props alone; state transitions live in the
//! engine and are wired up in `main.rs`.

use yew::prelude::*;

use crate::config::FIELD_MAX_LEN;
use crate::utils::ring_style;

/// One circular progress field: a conic-gradient disc whose filled arc
/// tracks the field's current value, wrapping the editable digit input.
#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    pub id: AttrValue,
    pub color: AttrValue,
    pub degrees: u32,
    /// Zero-padded display text for the wrapped input.
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    /// Pass-through hook point; no engine behavior is attached to blur.
    #[prop_or_default]
    pub onblur: Callback<FocusEvent>,
}

#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    html! {
        <div class="progress-ring" style={ring_style(&props.color, props.degrees)}>
            <input
                class="input-time"
                id={props.id.clone()}
                type="text"
                inputmode="numeric"
                maxlength={FIELD_MAX_LEN.to_string()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                onblur={props.onblur.clone()}
            />
        </div>
    }
}

#[function_component(PlayIcon)]
pub fn play_icon() -> Html {
    html! {
        <svg width="22" height="22" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M5 17.3336V6.66698C5 5.78742 5 5.34715 5.18509 5.08691C5.34664 4.85977 5.59564 4.71064 5.87207 4.67499C6.18868 4.63415 6.57701 4.84126 7.35254 5.25487L17.3525 10.5882L17.3562 10.5898C18.2132 11.0469 18.642 11.2756 18.7826 11.5803C18.9053 11.8462 18.9053 12.1531 18.7826 12.4189C18.6418 12.7241 18.212 12.9537 17.3525 13.4121L7.35254 18.7454C6.57645 19.1593 6.1888 19.3657 5.87207 19.3248C5.59564 19.2891 5.34664 19.1401 5.18509 18.9129C5 18.6527 5 18.2132 5 17.3336Z"
                stroke="#ffffff"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[function_component(PauseIcon)]
pub fn pause_icon() -> Html {
    html! {
        <svg width="22" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M9 7C9 6.44772 8.55228 6 8 6C7.44772 6 7 6.44772 7 7V17C7 17.5523 7.44772 18 8 18C8.55228 18 9 17.5523 9 17V7ZM17 7C17 6.44772 16.5523 6 16 6C15.4477 6 15 6.44772 15 7V17C15 17.5523 15.4477 18 16 18C16.5523 18 17 17.5523 17 17V7Z"
                fill="#ffffff"
            />
        </svg>
    }
}

#[function_component(ResetIcon)]
pub fn reset_icon() -> Html {
    html! {
        <svg fill="#ffffff" width="16" height="16" viewBox="0 0 1920 1920" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M960 0v213.333c411.627 0 746.667 334.934 746.667 746.667S1371.627 1706.667 960 1706.667 213.333 1371.733 213.333 960c0-197.013 78.4-382.507 213.334-520.747v254.08H640V106.667H53.333V320h191.04C88.64 494.08 0 720.96 0 960c0 529.28 430.613 960 960 960s960-430.72 960-960S1489.387 0 960 0"
                fill-rule="evenodd"
            />
        </svg>
    }
}

#[function_component(SoundOnIcon)]
pub fn sound_on_icon() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M11 5 6 9H2v6h4l5 4V5Z" fill="#ffffff" />
            <path
                d="M15.54 8.46a5 5 0 0 1 0 7.07M19.07 4.93a10 10 0 0 1 0 14.14"
                stroke="#ffffff"
                stroke-width="2"
                stroke-linecap="round"
            />
        </svg>
    }
}

#[function_component(SoundOffIcon)]
pub fn sound_off_icon() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M11 5 6 9H2v6h4l5 4V5Z" fill="#ffffff" />
            <path
                d="m23 9-6 6M17 9l6 6"
                stroke="#ffffff"
                stroke-width="2"
                stroke-linecap="round"
            />
        </svg>
    }
}
