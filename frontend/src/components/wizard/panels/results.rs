use common::model::analysis::{AdAllocation, AnalysisResponse, BadgeTone};
use yew::prelude::*;

use super::panel_heading;
use crate::components::wizard::chart::budget_chart;
use crate::components::wizard::helpers::pretty_json;
use crate::components::wizard::state::CampaignWizard;

/// Step 2: renders the latest analysis, or only the heading when there is none.
pub fn results_panel(component: &CampaignWizard) -> Html {
    html! {
        <div class="stack">
            { panel_heading("Analysis Results", "AI-powered insights for your campaign optimization") }
            {
                match &component.form.response {
                    Some(response) => build_results(response),
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_results(response: &AnalysisResponse) -> Html {
    html! {
        <>
            <div class="card">
                <h3 class="card-title">{"AI Recommendations"}</h3>
                <pre class="json-block">{ pretty_json(&response.gpt_recommendation) }</pre>
            </div>

            <div class="card">
                <h3 class="card-title">{"Data-Driven Budget Allocation"}</h3>
                <pre class="json-block">{ pretty_json(&response.data_driven_allocation) }</pre>
            </div>

            <div class="card">
                <h3 class="card-title">{"Sentiment Analysis"}</h3>
                <div class="stack">
                    {
                        for response.data_driven_allocation.iter().enumerate().map(|(i, ad)| sentiment_row(i, ad))
                    }
                </div>
            </div>

            <div class="card">
                <h3 class="card-title">{"Budget Comparison Chart"}</h3>
                { budget_chart(&response.data_driven_allocation) }
            </div>
        </>
    }
}

fn sentiment_row(index: usize, ad: &AdAllocation) -> Html {
    let name = if ad.name.is_empty() {
        format!("Ad #{}", index + 1)
    } else {
        ad.name.clone()
    };
    let explanation = ad
        .sentiment_analysis
        .as_ref()
        .map(|s| s.explanation.clone())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "No sentiment data.".to_string());

    html! {
        <div class="sentiment-row">
            <div>
                <p class="strong">{ name }</p>
                <p class="muted small">{ explanation }</p>
            </div>
            {
                match &ad.sentiment_analysis {
                    Some(analysis) => badge(&analysis.sentiment, analysis.tone()),
                    None => html! {},
                }
            }
        </div>
    }
}

fn badge(label: &str, tone: BadgeTone) -> Html {
    html! { <span class={tone.css_class()}>{ label.to_string() }</span> }
}
