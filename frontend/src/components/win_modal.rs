use yew::prelude::*;
use yew::create_portal;
use gloo_timers::callback::Timeout;
use gloo_utils::body;
use shared::prizes::{result_description, result_icon, result_phrase, Prize};
use crate::styles;

const CELEBRATION_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub prize: Option<Prize>,
    pub on_close: Callback<()>,
}

#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    let celebrating = use_state(|| false);

    {
        let celebrating = celebrating.clone();
        use_effect_with(props.prize.clone(), move |prize| {
            let mut timeout = None;

            if let Some(prize) = prize {
                let _ = body().style().set_property("overflow", "hidden");

                if !prize.is_try_again() {
                    celebrating.set(true);
                    let celebrating = celebrating.clone();
                    timeout = Some(Timeout::new(CELEBRATION_MS, move || celebrating.set(false)));
                }
            }

            move || {
                let _ = body().style().remove_property("overflow");
                drop(timeout);
            }
        });
    }

    let prize = match &props.prize {
        Some(prize) => prize,
        None => return html! {},
    };

    let is_try_again = prize.is_try_again();
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let badge_class = if is_try_again {
        "from-red-700 to-red-900 shadow-[0_10px_25px_rgba(185,28,28,0.4)]"
    } else {
        "from-yellow-300 to-yellow-600 shadow-[0_10px_25px_rgba(234,179,8,0.4)]"
    };
    let card_class = if is_try_again {
        "bg-red-50/90 border-red-300/60 ring-red-200/50"
    } else {
        "bg-[#F9F7F2]/80 border-white/60 ring-white/40"
    };
    let prize_box_class = if is_try_again {
        "bg-red-100/40 border-red-300/50"
    } else {
        "bg-white/60 border-yellow-200/50"
    };

    let modal = html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_BACKDROP} onclick={close.clone()} />

            <div class={styles::MODAL_CARD}>
                <div class="absolute -top-12 left-1/2 -translate-x-1/2 z-30">
                    <div class={classes!(
                        "w-24", "h-24", "rounded-full", "p-1", "bg-gradient-to-b",
                        badge_class,
                        (*celebrating).then_some("animate-bounce")
                    )}>
                        <div class="w-full h-full rounded-full bg-red-800 flex items-center justify-center border-4 border-red-900 shadow-inner">
                            <span class="text-5xl drop-shadow-md select-none">{result_icon(&prize.label)}</span>
                        </div>
                    </div>
                </div>

                <div class={classes!(
                    "relative", "backdrop-blur-xl", "rounded-3xl", "p-1", "overflow-hidden", "border", "ring-1",
                    "shadow-[0_20px_60px_rgba(0,0,0,0.3)]",
                    card_class
                )}>
                    if *celebrating {
                        <div class="absolute inset-0 z-0 pointer-events-none bg-[radial-gradient(circle,rgba(252,211,77,0.35)_0%,transparent_70%)] animate-pulse"></div>
                    }

                    <div class="relative z-20 p-7 pt-16 rounded-3xl">
                        <h2 class="text-3xl font-black tracking-tighter mb-1 font-sans text-transparent bg-clip-text bg-gradient-to-br from-red-800 to-red-600 uppercase">
                            { if is_try_again { "TRY AGAIN!" } else { "CONGRATULATIONS!" } }
                        </h2>

                        <div class="flex items-center justify-center gap-2 mb-6 opacity-80">
                            <div class="h-[1px] w-4 bg-red-800"></div>
                            <p class="text-red-900 text-[10px] md:text-[11px] tracking-[0.1em] uppercase font-bold font-sans text-center px-1">
                                {result_phrase(&prize.label)}
                            </p>
                            <div class="h-[1px] w-4 bg-red-800"></div>
                        </div>

                        <div class={classes!(
                            "py-6", "px-4", "rounded-xl", "border", "mb-8", "relative", "overflow-hidden",
                            "flex", "flex-col", "items-center", "justify-center", "gap-2",
                            prize_box_class
                        )}>
                            <span class={classes!(
                                "relative", "z-10", "text-2xl", "md:text-3xl", "font-black", "tracking-widest", "uppercase", "font-sans",
                                if is_try_again { "text-red-900" } else { "text-gray-800" }
                            )}>
                                {&prize.label}
                            </span>
                            <span class={classes!(
                                "relative", "z-10", "text-[10px]", "md:text-xs", "font-bold", "uppercase", "tracking-wider",
                                if is_try_again { "text-red-800/60" } else { "text-gray-500" }
                            )}>
                                {result_description(&prize.label)}
                            </span>
                        </div>

                        <button onclick={close} class={styles::MODAL_BUTTON}>
                            { if is_try_again { "SPIN AGAIN" } else { "CLAIM REWARD" } }
                        </button>

                        <p class="mt-4 text-[9px] text-gray-500 font-sans italic">{"Tap anywhere to close"}</p>
                    </div>
                </div>
            </div>
        </div>
    };

    create_portal(modal, body().into())
}
