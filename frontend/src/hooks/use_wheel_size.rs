use gloo_events::EventListener;
use gloo_utils::window;
use yew::prelude::*;

use crate::config::get_wheel_size;

/// Wheel diameter in pixels, following the viewport breakpoint.
#[hook]
pub fn use_wheel_size() -> u32 {
    let size = use_state_eq(get_wheel_size);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "resize", move |_| {
                size.set(get_wheel_size());
            });

            move || drop(listener)
        });
    }

    *size
}
