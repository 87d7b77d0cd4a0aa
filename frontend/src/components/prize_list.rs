use yew::prelude::*;
use shared::prizes::{wheel_icon, Prize};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeListProps {
    pub prizes: Vec<Prize>,
}

#[function_component(PrizeList)]
pub fn prize_list(props: &PrizeListProps) -> Html {
    // Duplicate try-again slots are listed once
    let mut seen_try_again = false;
    let rows = props.prizes.iter().filter(|prize| {
        if !prize.is_try_again() {
            return true;
        }
        !std::mem::replace(&mut seen_try_again, true)
    });

    html! {
        <ul class={styles::PRIZE_LIST}>
            { for rows.map(|prize| {
                let item_class = if prize.is_try_again() {
                    styles::PRIZE_ITEM_MUTED
                } else {
                    styles::PRIZE_ITEM
                };
                html! {
                    <li key={prize.id} class={item_class}>
                        <span class="text-2xl select-none">{wheel_icon(&prize.label)}</span>
                        <span class="font-bold text-sm uppercase tracking-wider text-gray-800">
                            {&prize.label}
                        </span>
                    </li>
                }
            }) }
        </ul>
    }
}
