use yew::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};
use gloo_utils::window;
use shared::prizes::Prize;
use shared::shared_wheel_game::SoundCue;
use crate::config::OUTCOME_EVENT;
use crate::styles;

// Cues are best-effort, a missing listener is fine
pub fn emit_cue(on_cue: &Option<Callback<SoundCue>>, cue: SoundCue) {
    if let Some(on_cue) = on_cue {
        on_cue.emit(cue);
    }
}

// Broadcast the settled prize so scripts outside the widget can react to it
pub fn dispatch_outcome(prize: &Prize) {
    let detail = match serde_json::to_string(prize) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize prize: {:?}", e);
            return;
        }
    };

    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&detail));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(OUTCOME_EVENT, &event_init) {
        let _ = window().dispatch_event(&event);
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            // The wheel behind the hub spins on click too
            e.stop_propagation();
            onclick.emit(e);
        })
    };

    html! {
        <button
            onclick={onclick}
            disabled={props.is_spinning}
            class={classes!(
                styles::SPIN_BUTTON,
                props.is_spinning.then_some(styles::SPIN_BUTTON_BUSY)
            )}
        >
            <div class="absolute inset-0 rounded-full border border-white/20"></div>
            <span class="text-white/80 text-[7px] md:text-[9px] tracking-[0.2em] mb-0.5 font-bold font-sans">
                { if props.is_spinning { "WAIT" } else { "TAP" } }
            </span>
            <span class="text-white font-black text-sm md:text-xl tracking-widest drop-shadow-sm font-sans">
                {"SPIN"}
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelPointerProps {
    pub compact: bool,
}

#[function_component(WheelPointer)]
pub fn wheel_pointer(props: &WheelPointerProps) -> Html {
    let (width, height) = if props.compact { ("48", "56") } else { ("64", "74") };

    html! {
        <div class={styles::WHEEL_POINTER}>
            <svg width={width} height={height} viewBox="0 0 64 74">
                <path
                    d="M32 74L10 24C10 24 0 12 0 6C0 2.7 2.7 0 6 0H58C61.3 0 64 2.7 64 6C64 12 54 24 54 24L32 74Z"
                    fill="url(#goldPointer)"
                    stroke="white"
                    stroke-width="3"
                />
                <circle cx="32" cy="18" r="8" fill="#B91C1C" stroke="rgba(0,0,0,0.2)" stroke-width="1" />
                <defs>
                    <linearGradient id="goldPointer" x1="0" y1="0" x2="1" y2="1">
                        <stop offset="0%" stop-color="#FCD34D" />
                        <stop offset="50%" stop-color="#F59E0B" />
                        <stop offset="100%" stop-color="#D97706" />
                    </linearGradient>
                </defs>
            </svg>
        </div>
    }
}
