//! Daily cost bar chart rendered as inline SVG.

#[cfg(test)]
#[path = "cost_chart_test.rs"]
mod cost_chart_test;

use leptos::prelude::*;

use crate::util::costs::{DailyTotal, format_usd};
use crate::util::date_range::format_day;

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 240.0;
const BAR_GAP: f64 = 2.0;

/// Geometry of one bar in chart coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

/// Lay out one bar per day, scaled so the largest total fills the chart height.
pub fn layout_bars(totals: &[DailyTotal], width: f64, height: f64) -> Vec<Bar> {
    if totals.is_empty() {
        return Vec::new();
    }
    let max = totals.iter().map(|t| t.amount).fold(0.0_f64, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let slot = width / totals.len() as f64;
    let bar_width = (slot - BAR_GAP).max(1.0);

    totals
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let h = if max > 0.0 { (t.amount.max(0.0) / max) * height } else { 0.0 };
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64 * slot;
            Bar { x, y: height - h, width: bar_width, height: h, label: format!("{}: {}", format_day(t.day), format_usd(t.amount)) }
        })
        .collect()
}

/// "AWS Costs Over Time" chart for the dashboard.
#[component]
pub fn CostChart(#[prop(into)] totals: Signal<Vec<DailyTotal>>) -> impl IntoView {
    let bars = move || totals.with(|t| layout_bars(t, CHART_WIDTH, CHART_HEIGHT));
    let first_day = move || totals.with(|t| t.first().map(|d| format_day(d.day)).unwrap_or_default());
    let last_day = move || totals.with(|t| t.last().map(|d| format_day(d.day)).unwrap_or_default());

    view! {
        <figure class="cost-chart">
            <figcaption class="cost-chart__title">"AWS Costs Over Time"</figcaption>
            <svg
                class="cost-chart__plot"
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                preserveAspectRatio="none"
                role="img"
                aria-label="Daily cost (USD)"
            >
                {move || {
                    bars()
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect
                                    class="cost-chart__bar"
                                    x=bar.x
                                    y=bar.y
                                    width=bar.width
                                    height=bar.height
                                >
                                    <title>{bar.label}</title>
                                </rect>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </svg>
            <div class="cost-chart__axis">
                <span>{first_day}</span>
                <span>{last_day}</span>
            </div>
        </figure>
    }
}
