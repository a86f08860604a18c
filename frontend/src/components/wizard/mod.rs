//! The three-step campaign wizard.
//!
//! All form data lives in one `WizardState`; the current step comes from the
//! route. Messages are handled in `update`, markup is built in `view` and the
//! `panels` module, and the history list is fetched once after the first
//! render if a history endpoint was configured at build time.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::history::fetch_history;

mod chart;
mod helpers;
mod history;
mod messages;
mod panels;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CampaignWizardProps;
pub use state::CampaignWizard;

impl Component for CampaignWizard {
    type Message = Msg;
    type Properties = CampaignWizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CampaignWizard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(url) = ctx.props().history_endpoint {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match fetch_history(url).await {
                        Ok(items) => link.send_message(Msg::HistoryLoaded(items)),
                        Err(err) => error!(format!("Error fetching history: {}", err)),
                    }
                });
            }
        }
    }
}
