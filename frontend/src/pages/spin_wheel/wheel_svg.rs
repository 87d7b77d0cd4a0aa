use yew::prelude::*;
use shared::constants::COMPACT_WHEEL_BELOW;
use shared::prizes::{wheel_icon, Prize};
use shared::wheel_geometry::{describe_arc, label_anchor, segment_angle};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub prizes: Vec<Prize>,
    pub rotation: f64,
    pub size: u32,
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let size = props.size as f64;
    let radius = size / 2.0;
    let center = size / 2.0;
    let segments = props.prizes.len();
    let seg = segment_angle(segments);
    let compact = props.size < COMPACT_WHEEL_BELOW;

    let (icon_size, label_size, label_dy) = if compact {
        ("18", "9", "20")
    } else {
        ("24", "11", "26")
    };

    let wedges = props.prizes.iter().enumerate().map(|(index, prize)| {
        let start_angle = index as f64 * seg;
        let end_angle = (index + 1) as f64 * seg;
        let anchor = label_anchor(center, radius, index, segments);
        // Even segments are red, odd ones white
        let is_red = index % 2 == 0;

        html! {
            <g key={index}>
                <path
                    d={describe_arc(center, center, radius, start_angle, end_angle)}
                    fill={if is_red { "url(#segmentRed)" } else { "url(#segmentWhite)" }}
                    stroke="white"
                    stroke-width="2"
                />
                <g transform={format!(
                    "translate({}, {}) rotate({})",
                    anchor.position.x, anchor.position.y, anchor.rotation
                )}>
                    <text
                        x="0"
                        y="0"
                        text-anchor="middle"
                        dominant-baseline="middle"
                        font-family="'Lato', sans-serif"
                        font-weight="700"
                    >
                        <tspan x="0" dy="-12" font-size={icon_size}>
                            {wheel_icon(&prize.label)}
                        </tspan>
                        <tspan
                            x="0"
                            dy={label_dy}
                            font-size={label_size}
                            font-weight="900"
                            fill={if is_red { "#FFFFFF" } else { "#B91C1C" }}
                            class="uppercase tracking-[0.1em]"
                        >
                            {&prize.label}
                        </tspan>
                    </text>
                </g>
            </g>
        }
    });

    html! {
        <div
            class={styles::WHEEL_DISC}
            style={format!(
                "width: {}px; height: {}px; transform: rotate({}deg);",
                props.size, props.size, props.rotation
            )}
        >
            <svg
                viewBox={format!("0 0 {} {}", props.size, props.size)}
                class="w-full h-full scale-105 pointer-events-none"
            >
                <defs>
                    <linearGradient id="segmentWhite" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#FFFFFF" />
                        <stop offset="100%" stop-color="#F3F4F6" />
                    </linearGradient>
                    <linearGradient id="segmentRed" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#EF4444" />
                        <stop offset="100%" stop-color="#991B1B" />
                    </linearGradient>
                </defs>

                <circle cx={center.to_string()} cy={center.to_string()} r={radius.to_string()} fill="#fff" />
                { for wedges }
            </svg>
            <div class={styles::WHEEL_SHADE}></div>
        </div>
    }
}
