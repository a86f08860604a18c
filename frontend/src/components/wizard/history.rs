//! Campaign history section: a toggle and, when open, the list of past
//! analyses or an empty-state message.

use common::model::history::HistoryItem;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_date, pretty_json};
use super::messages::Msg;
use super::state::CampaignWizard;

pub fn history_section(component: &CampaignWizard, link: &Scope<CampaignWizard>) -> Html {
    let label = if component.form.show_history {
        "Hide Campaign History"
    } else {
        "Show Campaign History"
    };

    html! {
        <div class="history">
            <div class="actions centered">
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::ToggleHistory)}>
                    { label }
                </button>
            </div>
            {
                if component.form.show_history {
                    build_history_card(&component.form.history)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_history_card(items: &[HistoryItem]) -> Html {
    html! {
        <div class="card">
            <h3 class="card-title">{"Recent Campaign History"}</h3>
            {
                if items.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No previous campaigns found."}</p>
                            <p class="small">{"Start by creating your first campaign above!"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="stack">
                            { for items.iter().map(history_item) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn history_item(item: &HistoryItem) -> Html {
    html! {
        <div class="card history-item">
            <div class="history-header">
                <h4>{ item.campaign_name.clone() }</h4>
                <span class="muted small">{ format_date(&item.created_at) }</span>
            </div>
            <details class="small">
                <summary>{"View Details"}</summary>
                <hr />
                <p class="strong">{"Input:"}</p>
                <pre class="json-block">{ pretty_json(&item.input_data) }</pre>
                <p class="strong">{"GPT Response:"}</p>
                <pre class="json-block">{ pretty_json(&item.gpt_response) }</pre>
            </details>
        </div>
    }
}
