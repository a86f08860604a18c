//! Application shell: owns the configuration and the injected services and
//! maps routes to the landing page or the campaign wizard.

use yew::{html, Callback, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::landing::Landing;
use crate::components::wizard::CampaignWizard;
use crate::config::AppConfig;
use crate::route::Route;
use crate::services::analysis::AnalysisHandle;

pub struct App {
    config: AppConfig,
    analysis: AnalysisHandle,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = AppConfig::from_build_env();
        let analysis = AnalysisHandle::from_config(&config);
        Self { config, analysis }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let analysis = self.analysis.clone();
        let history_endpoint = self.config.history_endpoint;
        let render = Callback::from(move |route: Route| switch(route, &analysis, history_endpoint));

        html! {
            <BrowserRouter>
                <Switch<Route> render={render} />
            </BrowserRouter>
        }
    }
}

/// Every wizard path renders the same component in the same position, so its
/// form state survives moving between steps.
fn switch(route: Route, analysis: &AnalysisHandle, history_endpoint: Option<&'static str>) -> Html {
    match route.step() {
        None => html! { <Landing /> },
        Some(step) => html! {
            <CampaignWizard
                step={step}
                analysis={analysis.clone()}
                history_endpoint={history_endpoint}
            />
        },
    }
}
