use common::wizard::WizardState;

/// State container for the `CampaignWizard` component.
///
/// Form data lives in `WizardState`; the component adds only what the
/// browser side needs.
pub struct CampaignWizard {
    /// Campaign name, ad entries, latest result, loading flag and history.
    pub form: WizardState,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl CampaignWizard {
    pub fn new() -> Self {
        Self {
            form: WizardState::new(),
            loaded: false,
        }
    }
}
