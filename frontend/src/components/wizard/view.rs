//! View rendering for the campaign wizard.
//!
//! Layout: loading overlay (while an analysis runs), hero header, a progress
//! sidebar listing the three steps, the active step panel, and the history
//! section below it.

use common::wizard::Step;
use yew::html::Scope;
use yew::prelude::*;

use super::history::history_section;
use super::messages::Msg;
use super::panels::{ad_entries_panel, campaign_info_panel, results_panel};
use super::state::CampaignWizard;

pub fn view(component: &CampaignWizard, ctx: &Context<CampaignWizard>) -> Html {
    let link = ctx.link();
    let step = ctx.props().step;

    html! {
        <div class="page">
            { if component.form.loading { loading_overlay() } else { html! {} } }

            <header class="hero">
                <h1>{"Ad Campaign Optimization"}</h1>
                <p>{"Plan, analyze and optimize your ad spend across campaigns using data and AI insights."}</p>
            </header>

            <div class="container layout">
                { build_sidebar(step, link) }

                <main class="content">
                    <section class="card panel">
                        {
                            match step {
                                Step::CampaignInfo => campaign_info_panel(component, link),
                                Step::AdEntries => ad_entries_panel(component, link),
                                Step::Results => results_panel(component),
                            }
                        }
                    </section>

                    { history_section(component, link) }
                </main>
            </div>
        </div>
    }
}

/// Progress sidebar. Any step can be opened directly, in any order.
fn build_sidebar(active: Step, link: &Scope<CampaignWizard>) -> Html {
    html! {
        <aside class="sidebar card">
            <h3 class="card-title centered">{"Progress"}</h3>
            <nav>
                {
                    for Step::ALL.iter().map(|&step| {
                        let class = if step == active { "btn btn-campaign step-btn" } else { "btn btn-navigation step-btn" };
                        html! {
                            <button class={class} onclick={link.callback(move |_| Msg::Navigate(step))}>
                                <span class="step-number">{ step.index() + 1 }</span>
                                { step.label() }
                            </button>
                        }
                    })
                }
            </nav>
        </aside>
    }
}

fn loading_overlay() -> Html {
    html! {
        <div class="overlay">
            <div class="card overlay-card">
                <div class="spin"></div>
                <p class="muted">{"Analyzing your campaign data..."}</p>
            </div>
        </div>
    }
}
