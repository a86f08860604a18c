use common::wizard::Step;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::panel_heading;
use crate::components::wizard::messages::Msg;
use crate::components::wizard::state::CampaignWizard;

/// Step 0: name the campaign. "Next Step" stays disabled until the name is
/// non-blank.
pub fn campaign_info_panel(component: &CampaignWizard, link: &Scope<CampaignWizard>) -> Html {
    html! {
        <div class="stack">
            { panel_heading("Campaign Information", "Let's start by naming your campaign") }

            <div class="narrow">
                <label class="field-label">{"Campaign Name"}</label>
                <input
                    id="campaign-name"
                    class="input centered"
                    type="text"
                    placeholder="Enter your campaign name"
                    required=true
                    value={component.form.campaign_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetCampaignName(input.value())
                    })}
                />
            </div>

            <div class="actions centered">
                <button
                    class="btn btn-campaign btn-lg"
                    disabled={!component.form.can_advance()}
                    onclick={link.callback(|_| Msg::Navigate(Step::AdEntries))}
                >
                    {"Next Step →"}
                </button>
            </div>
        </div>
    }
}
