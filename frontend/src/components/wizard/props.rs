//! Properties for the `CampaignWizard`.

use common::wizard::Step;
use yew::prelude::*;

use crate::services::analysis::AnalysisHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct CampaignWizardProps {
    /// Step derived from the current route. Changing it does not reset the form.
    pub step: Step,

    /// Service used when the user submits the ad entries.
    pub analysis: AnalysisHandle,

    /// Where to list past analyses from. `None` leaves the history empty.
    #[prop_or_default]
    pub history_endpoint: Option<&'static str>,
}
