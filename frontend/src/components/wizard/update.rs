//! Update function for the campaign wizard.
//!
//! Elm-style: takes the component, its `Context` and a `Msg`, mutates the
//! form state and returns whether the view should re-render. Route changes go
//! through the router's navigator; the current step always comes from props.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::wizard::Step;

use super::messages::Msg;
use super::state::CampaignWizard;
use crate::route::Route;

pub fn update(component: &mut CampaignWizard, ctx: &Context<CampaignWizard>, msg: Msg) -> bool {
    match msg {
        Msg::SetCampaignName(name) => {
            component.form.campaign_name = name;
            true
        }
        Msg::AddEntry => {
            component.form.add_entry();
            true
        }
        Msg::RemoveEntry(index) => component.form.remove_entry(index),
        Msg::EditField {
            index,
            field,
            value,
        } => component.form.edit_field(index, field, value),
        Msg::Navigate(step) => {
            navigate(ctx, step);
            false
        }
        Msg::Submit => {
            // The button is disabled while loading; ignore stray clicks anyway.
            if component.form.loading {
                return false;
            }
            let request = component.form.begin_submission();
            log!(format!(
                "Submitting campaign \"{}\" with {} ads",
                request.campaign_name,
                request.campaigns.len()
            ));

            let service = ctx.props().analysis.0.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = service.submit_campaign(request).await;
                link.send_message(Msg::AnalysisFinished(outcome));
            });
            true
        }
        Msg::AnalysisFinished(outcome) => {
            if let Err(err) = &outcome {
                error!(format!("Error: {}", err));
            }
            if component.form.complete_submission(outcome) {
                navigate(ctx, Step::Results);
            }
            true
        }
        Msg::ToggleHistory => {
            component.form.toggle_history();
            true
        }
        Msg::HistoryLoaded(items) => {
            log!(format!("Loaded {} past campaigns", items.len()));
            component.form.set_history(items);
            true
        }
    }
}

fn navigate(ctx: &Context<CampaignWizard>, step: Step) {
    match ctx.link().navigator() {
        Some(navigator) => navigator.push(&Route::for_step(step)),
        None => error!("No router available to navigate to", step.path()),
    }
}
