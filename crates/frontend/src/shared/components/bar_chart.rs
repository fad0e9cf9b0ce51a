//! Categorical bar chart on a linear value axis, drawn as inline SVG

use crate::shared::number_format::format_count;
use contracts::dashboards::d400_statistics::ChartPoint;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICK_COUNT: u64 = 5;

/// Smallest "nice" step (1, 2, 5 times a power of ten) so that
/// `TICK_COUNT` steps cover `max`
pub fn nice_step(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let raw = max.div_ceil(TICK_COUNT);
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10 * magnitude)
}

/// Tick values of the value axis, from zero up to the first tick >= `max`
pub fn axis_ticks(max: u64) -> Vec<u64> {
    let step = nice_step(max);
    let mut ticks = vec![0];
    let mut value = 0;
    while value < max {
        value += step;
        ticks.push(value);
    }
    if ticks.len() == 1 {
        ticks.push(step);
    }
    ticks
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn y_for(value: u64, axis_max: u64) -> f64 {
    let ratio = value as f64 / axis_max.max(1) as f64;
    MARGIN_TOP + plot_height() * (1.0 - ratio)
}

#[component]
pub fn BarChart(
    series: Vec<ChartPoint>,
    /// Bar fill colour
    #[prop(optional, default = "#1976d2")]
    fill: &'static str,
) -> impl IntoView {
    let max = series.iter().map(|p| p.value).max().unwrap_or(0);
    let ticks = axis_ticks(max);
    let axis_max = ticks.last().copied().unwrap_or(1);

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let slot = plot_width / series.len().max(1) as f64;
    let bar_width = slot * 0.6;
    let baseline = y_for(0, axis_max);

    let grid = ticks
        .into_iter()
        .map(|tick| {
            let y = y_for(tick, axis_max);
            view! {
                <g class="bar-chart__tick">
                    <line
                        x1=MARGIN_LEFT
                        x2={WIDTH - MARGIN_RIGHT}
                        y1=y
                        y2=y
                        stroke="#e0e0e0"
                        stroke-dasharray="3 3"
                    />
                    <text x={MARGIN_LEFT - 8.0} y={y + 4.0} text-anchor="end" font-size="12">
                        {format_count(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = series
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            let y = y_for(point.value, axis_max);
            view! {
                <g class="bar-chart__bar" data-category=point.label>
                    <rect
                        x=x
                        y=y
                        width=bar_width
                        height={baseline - y}
                        fill=fill
                        aria-label=format!("{}: {}", point.label, format_count(point.value))
                    />
                    <text
                        x={x + bar_width / 2.0}
                        y={y - 6.0}
                        text-anchor="middle"
                        font-size="12"
                    >
                        {format_count(point.value)}
                    </text>
                    <text
                        x={x + bar_width / 2.0}
                        y={baseline + 20.0}
                        text-anchor="middle"
                        font-size="13"
                    >
                        {point.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            width="100%"
            height=HEIGHT
            role="img"
        >
            {grid}
            <line
                x1=MARGIN_LEFT
                x2={WIDTH - MARGIN_RIGHT}
                y1=baseline
                y2=baseline
                stroke="#9e9e9e"
            />
            {bars}
        </svg>
    }
}
