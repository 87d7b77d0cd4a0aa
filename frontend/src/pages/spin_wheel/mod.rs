mod wheel_svg;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use shared::constants::{COMPACT_WHEEL_BELOW, SPIN_EASING};
use shared::prizes::Prize;
use shared::shared_wheel_game::{SoundCue, WheelSpinner};
use shared::wheel_geometry::{pointer_tilt, CubicBezier};
use web_sys::Element;

use crate::components::WinModal;
use crate::hooks::use_wheel_size;
use crate::styles;

use wheel_svg::WheelSvg;
use wheel_utils::{dispatch_outcome, emit_cue, SpinButton, WheelPointer};

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub prizes: Vec<Prize>,
    #[prop_or_default]
    pub on_outcome: Option<Callback<Prize>>,
    #[prop_or_default]
    pub on_cue: Option<Callback<SoundCue>>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    // The spinner owns the busy flag, so re-entrant taps are rejected
    // before any render happens.
    let spinner = {
        let prizes = props.prizes.clone();
        use_mut_ref(move || WheelSpinner::new(prizes))
    };
    let rotation = use_state(|| 0.0);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<Prize>);
    // Mirrors the spinner's list so the drawn wheel never differs from the one spun
    let wheel_prizes = use_state(|| props.prizes.clone());
    let tilt = use_state(|| (0.0, 0.0));
    let wheel_size = use_wheel_size();

    {
        let spinner = spinner.clone();
        let wheel_prizes = wheel_prizes.clone();
        use_effect_with(props.prizes.clone(), move |prizes| {
            let mut spinner = spinner.borrow_mut();
            if spinner.set_prizes(prizes.clone()) {
                wheel_prizes.set(spinner.prizes().to_vec());
            } else {
                log::debug!("Prize list changed mid-spin, applying after it settles");
            }
            || ()
        });
    }

    let start_spin = {
        let spinner = spinner.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let wheel_prizes = wheel_prizes.clone();
        let tilt = tilt.clone();
        let on_outcome = props.on_outcome.clone();
        let on_cue = props.on_cue.clone();

        Callback::from(move |_: MouseEvent| {
            let plan = match spinner.borrow_mut().start_spin() {
                Some(plan) => plan,
                None => return,
            };

            emit_cue(&on_cue, SoundCue::Start);
            is_spinning.set(true);
            winner.set(None);
            tilt.set((0.0, 0.0));

            let curve = CubicBezier::new(SPIN_EASING.0, SPIN_EASING.1, SPIN_EASING.2, SPIN_EASING.3);
            let start_time = js_sys::Date::now();

            let f: FrameCallback = Rc::new(RefCell::new(None));
            let g = f.clone();

            let spinner = spinner.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let winner = winner.clone();
            let wheel_prizes = wheel_prizes.clone();
            let on_outcome = on_outcome.clone();
            let on_cue = on_cue.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let elapsed = js_sys::Date::now() - start_time;
                let progress = (elapsed / plan.duration_ms).min(1.0);
                let angle = plan.from + (plan.to - plan.from) * curve.ease(progress);
                rotation.set(angle);

                let ticks = spinner.borrow_mut().advance(angle);
                for _ in 0..ticks {
                    emit_cue(&on_cue, SoundCue::Tick);
                }

                if progress < 1.0 {
                    if let Some(next) = f.borrow().as_ref() {
                        let _ = window().request_animation_frame(next.as_ref().unchecked_ref());
                    }
                    return;
                }

                rotation.set(plan.to);
                let settled = {
                    let mut spinner = spinner.borrow_mut();
                    let settled = spinner.complete_spin().cloned();
                    wheel_prizes.set(spinner.prizes().to_vec());
                    settled
                };
                is_spinning.set(false);

                if let Some(prize) = settled {
                    let cue = if prize.is_try_again() { SoundCue::Fail } else { SoundCue::Win };
                    emit_cue(&on_cue, cue);
                    dispatch_outcome(&prize);
                    if let Some(on_outcome) = &on_outcome {
                        on_outcome.emit(prize.clone());
                    }
                    winner.set(Some(prize));
                }

                // Release the frame closure once this call has returned
                let f = f.clone();
                Timeout::new(0, move || {
                    f.borrow_mut().take();
                })
                .forget();
            }) as Box<dyn FnMut()>));

            let first = g.borrow();
            if let Some(first) = first.as_ref() {
                let _ = window().request_animation_frame(first.as_ref().unchecked_ref());
            }
        })
    };

    let on_pointer_move = {
        let spinner = spinner.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if spinner.borrow().is_spinning() {
                return;
            }
            let stage = match e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                Some(stage) => stage,
                None => return,
            };
            let rect = stage.get_bounding_client_rect();
            let offset_x = e.client_x() as f64 - (rect.left() + rect.width() / 2.0);
            let offset_y = e.client_y() as f64 - (rect.top() + rect.height() / 2.0);
            tilt.set(pointer_tilt(offset_x, offset_y));
        })
    };

    let on_pointer_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set((0.0, 0.0)))
    };

    let (tilt_x, tilt_y) = *tilt;
    let holder_style = format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d; transition: transform 0.3s ease-out;",
        tilt_x, tilt_y
    );

    let close_modal = {
        let spinner = spinner.clone();
        let winner = winner.clone();
        Callback::from(move |_: ()| {
            spinner.borrow_mut().dismiss_result();
            winner.set(None);
        })
    };

    html! {
        <>
            <div class={styles::WHEEL_STAGE} onmousemove={on_pointer_move} onmouseleave={on_pointer_leave}>
                <div class={styles::WHEEL_GLOW}></div>

                <div class={styles::WHEEL_HOLDER} style={holder_style} onclick={start_spin.clone()}>
                    <WheelPointer compact={wheel_size < COMPACT_WHEEL_BELOW} />

                    <div class={styles::WHEEL_BEZEL_OUTER}></div>
                    <div class={styles::WHEEL_BEZEL_INNER}></div>

                    <WheelSvg prizes={(*wheel_prizes).clone()} rotation={*rotation} size={wheel_size} />

                    <SpinButton is_spinning={*is_spinning} onclick={start_spin} />
                </div>

                <div class={styles::WHEEL_FLOOR}></div>
            </div>

            <WinModal prize={(*winner).clone()} on_close={close_modal} />
        </>
    }
}
