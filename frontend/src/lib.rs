pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use shared::prizes::Prize;
use shared::shared_wheel_game::SoundCue;
use crate::components::PrizeList;
use crate::pages::spin_wheel::SpinWheel;

#[function_component(App)]
pub fn app() -> Html {
    let prizes = use_memo((), |_| config::get_prizes());

    let on_outcome = Callback::from(|prize: Prize| {
        log::info!("Outcome selected: {} (id {})", prize.label, prize.id);
    });

    // Audio is left to the hosting page, cues only get traced here
    let on_cue = Callback::from(|cue: SoundCue| {
        log::debug!("Sound cue: {:?}", cue);
    });

    html! {
        <div class={styles::PAGE}>
            <div class={styles::PAGE_INNER}>
                <SpinWheel prizes={(*prizes).clone()} on_outcome={on_outcome} on_cue={on_cue} />
                <PrizeList prizes={(*prizes).clone()} />
            </div>
        </div>
    }
}
