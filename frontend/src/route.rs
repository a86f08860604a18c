use common::wizard::Step;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/campaign-info")]
    CampaignInfo,
    #[at("/ad-entries")]
    AdEntries,
    #[at("/results")]
    Results,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn for_step(step: Step) -> Route {
        match step {
            Step::CampaignInfo => Route::CampaignInfo,
            Step::AdEntries => Route::AdEntries,
            Step::Results => Route::Results,
        }
    }

    /// The wizard step shown for this route, or `None` for the landing page.
    /// Unrecognized paths fall back to the first step.
    pub fn step(&self) -> Option<Step> {
        match self {
            Route::Home => None,
            other => Some(Step::from_path(&other.to_path())),
        }
    }
}
