use gloo_utils::{document, window};
use log::warn;
use shared::constants::{MOBILE_BREAKPOINT_PX, PRIZE_DATA_ELEMENT_ID};
use shared::prizes::{load_prizes, Prize, DEFAULT_PRIZES};
use shared::wheel_geometry::wheel_size_for_width;

pub const OUTCOME_EVENT: &str = "prizeSelected";

// Prize list embedded by the hosting page, falling back to the built-in catalog
pub fn get_prizes() -> Vec<Prize> {
    let embedded = document()
        .get_element_by_id(PRIZE_DATA_ELEMENT_ID)
        .and_then(|el| el.text_content());

    match embedded {
        Some(json) => load_prizes(&json).unwrap_or_else(|e| {
            warn!("Ignoring page prize data: {}", e);
            DEFAULT_PRIZES.clone()
        }),
        None => DEFAULT_PRIZES.clone(),
    }
}

pub fn get_wheel_size() -> u32 {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX);
    wheel_size_for_width(width)
}
