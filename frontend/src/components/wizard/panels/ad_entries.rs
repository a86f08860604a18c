use common::model::ad_entry::{AdEntry, AdField};
use common::wizard::Step;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::panel_heading;
use crate::components::wizard::messages::Msg;
use crate::components::wizard::state::CampaignWizard;

/// Columns of an entry row: field, label, input type.
const FIELDS: [(AdField, &str, &str); 5] = [
    (AdField::Name, "Ad Name", "text"),
    (AdField::AdTitle, "Ad Title", "text"),
    (AdField::Clicks, "Clicks", "number"),
    (AdField::Impressions, "Impressions", "number"),
    (AdField::CurrentBudget, "Budget ($)", "number"),
];

/// Step 1: one card per ad entry, plus add, back and analyze controls.
pub fn ad_entries_panel(component: &CampaignWizard, link: &Scope<CampaignWizard>) -> Html {
    let can_remove = component.form.can_remove();

    html! {
        <div class="stack">
            { panel_heading("Ad Entries", "Add your ad campaigns and their performance data") }

            <div class="stack">
                {
                    for component.form.entries().iter().enumerate().map(|(index, entry)| {
                        build_entry_row(index, entry, can_remove, link)
                    })
                }
            </div>

            <div class="actions centered">
                <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::AddEntry)}>
                    {"+ Add Another Ad"}
                </button>
            </div>

            <div class="actions spread">
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::Navigate(Step::CampaignInfo))}>
                    {"← Back"}
                </button>
                <button
                    class="btn btn-campaign btn-lg"
                    disabled={component.form.loading}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    {"Analyze Campaign"}
                </button>
            </div>
        </div>
    }
}

fn build_entry_row(
    index: usize,
    entry: &AdEntry,
    can_remove: bool,
    link: &Scope<CampaignWizard>,
) -> Html {
    html! {
        <div key={entry.key.to_string()} class="card entry-card">
            <div class="entry-grid">
                {
                    for FIELDS.iter().map(|&(field, label, input_type)| {
                        field_input(index, field, label, input_type, entry.field(field), link)
                    })
                }
                <button
                    type="button"
                    class="btn btn-destructive btn-icon"
                    title="Remove ad"
                    disabled={!can_remove}
                    onclick={link.callback(move |_| Msg::RemoveEntry(index))}
                >
                    {"🗑"}
                </button>
            </div>
        </div>
    }
}

fn field_input(
    index: usize,
    field: AdField,
    label: &'static str,
    input_type: &'static str,
    value: &str,
    link: &Scope<CampaignWizard>,
) -> Html {
    html! {
        <div>
            <label class="field-label">{ label }</label>
            <input
                class="input"
                type={input_type}
                placeholder={label}
                required=true
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditField { index, field, value: input.value() }
                })}
            />
        </div>
    }
}
