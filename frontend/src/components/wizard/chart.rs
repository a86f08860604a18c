//! Grouped bar chart comparing current and optimized budgets, drawn as SVG
//! from the layout computed by `common::chart::BudgetChart`.

use common::chart::BudgetChart;
use common::model::analysis::AdAllocation;
use yew::prelude::*;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 384.0;
const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 40.0;
/// Share of each group's width taken by one bar.
const BAR_SHARE: f64 = 0.35;

const CURRENT_CLASS: &str = "bar-current";
const SUGGESTED_CLASS: &str = "bar-suggested";

pub fn budget_chart(allocations: &[AdAllocation]) -> Html {
    let chart = BudgetChart::from_allocations(allocations);
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;
    let group_width = plot_width / chart.groups.len().max(1) as f64;
    let bar_width = group_width * BAR_SHARE;

    let y_of = |value: f64| baseline - chart.fraction(value) * plot_height;

    let gridlines = chart.ticks().into_iter().map(|tick| {
        let y = y_of(tick);
        html! {
            <g>
                <line x1={MARGIN_LEFT.to_string()} x2={(WIDTH - MARGIN_RIGHT).to_string()}
                      y1={y.to_string()} y2={y.to_string()} class="chart-grid" />
                <text x={(MARGIN_LEFT - 8.0).to_string()} y={(y + 4.0).to_string()}
                      text-anchor="end" class="chart-axis">{ chart.dollar_label(tick) }</text>
            </g>
        }
    });

    let groups = chart.groups.iter().enumerate().map(|(i, group)| {
        let center = MARGIN_LEFT + group_width * (i as f64 + 0.5);
        let current_top = y_of(group.current);
        let suggested_top = y_of(group.suggested);
        html! {
            <g>
                <rect x={(center - bar_width).to_string()} y={current_top.to_string()}
                      width={bar_width.to_string()} height={(baseline - current_top).to_string()}
                      class={CURRENT_CLASS}>
                    <title>
                        { format!("{}: Current Budget {}", group.label, chart.dollar_label(group.current)) }
                    </title>
                </rect>
                <rect x={center.to_string()} y={suggested_top.to_string()}
                      width={bar_width.to_string()} height={(baseline - suggested_top).to_string()}
                      class={SUGGESTED_CLASS}>
                    <title>
                        { format!("{}: Optimized Budget {}", group.label, chart.dollar_label(group.suggested)) }
                    </title>
                </rect>
                <text x={center.to_string()} y={(baseline + 20.0).to_string()}
                      text-anchor="middle" class="chart-axis">{ group.label.clone() }</text>
            </g>
        }
    });

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} preserveAspectRatio="xMidYMid meet">
                { legend() }
                { for gridlines }
                { for groups }
            </svg>
        </div>
    }
}

/// Legend centered above the plot.
fn legend() -> Html {
    let center = WIDTH / 2.0;
    html! {
        <g class="chart-legend">
            <rect x={(center - 150.0).to_string()} y="14" width="14" height="14" class={CURRENT_CLASS} />
            <text x={(center - 130.0).to_string()} y="26">{"Current Budget"}</text>
            <rect x={(center + 10.0).to_string()} y="14" width="14" height="14" class={SUGGESTED_CLASS} />
            <text x={(center + 30.0).to_string()} y="26">{"Optimized Budget"}</text>
        </g>
    }
}
