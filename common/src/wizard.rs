//! Form state for the three-step campaign wizard.
//!
//! `WizardState` is owned by the wizard component and mutated only through
//! the methods below, which keep the ad-entry list non-empty.

use crate::model::ad_entry::{AdEntry, AdField};
use crate::model::analysis::AnalysisResponse;
use crate::model::history::HistoryItem;
use crate::requests::AnalysisRequest;

/// A wizard step, derived from the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CampaignInfo,
    AdEntries,
    Results,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::CampaignInfo, Step::AdEntries, Step::Results];

    /// Maps a path to its step. Unknown paths land on the first step.
    pub fn from_path(path: &str) -> Step {
        match path {
            "/ad-entries" => Step::AdEntries,
            "/results" => Step::Results,
            _ => Step::CampaignInfo,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Step::CampaignInfo => "/campaign-info",
            Step::AdEntries => "/ad-entries",
            Step::Results => "/results",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::CampaignInfo => "Campaign Info",
            Step::AdEntries => "Ad Entries",
            Step::Results => "Results",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Step::CampaignInfo => 0,
            Step::AdEntries => 1,
            Step::Results => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub campaign_name: String,
    entries: Vec<AdEntry>,
    next_key: u64,
    pub response: Option<AnalysisResponse>,
    pub loading: bool,
    pub history: Vec<HistoryItem>,
    pub show_history: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Starts with an empty name and a single blank entry.
    pub fn new() -> Self {
        Self {
            campaign_name: String::new(),
            entries: vec![AdEntry::blank(0)],
            next_key: 1,
            response: None,
            loading: false,
            history: Vec::new(),
            show_history: false,
        }
    }

    pub fn entries(&self) -> &[AdEntry] {
        &self.entries
    }

    /// Whether the first step may be left: the name must not be blank.
    pub fn can_advance(&self) -> bool {
        !self.campaign_name.trim().is_empty()
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn add_entry(&mut self) {
        self.entries.push(AdEntry::blank(self.next_key));
        self.next_key += 1;
    }

    /// Removes the entry at `index`. Refuses to remove the last remaining one.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn edit_field(&mut self, index: usize, field: AdField, value: String) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Marks the wizard as loading and builds the request to submit.
    pub fn begin_submission(&mut self) -> AnalysisRequest {
        self.loading = true;
        AnalysisRequest::from_form(&self.campaign_name, &self.entries)
    }

    /// Stores the outcome of a submission.
    ///
    /// Returns `true` when a result is available and the view should move on
    /// to the results step. A failure clears any previous result.
    pub fn complete_submission<E>(&mut self, outcome: Result<AnalysisResponse, E>) -> bool {
        self.loading = false;
        match outcome {
            Ok(response) => {
                self.response = Some(response);
                true
            }
            Err(_) => {
                self.response = None;
                false
            }
        }
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn set_history(&mut self, items: Vec<HistoryItem>) {
        self.history = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::analysis::AdAllocation;
    use serde_json::Value;

    fn response() -> AnalysisResponse {
        AnalysisResponse {
            gpt_recommendation: Value::Null,
            data_driven_allocation: vec![AdAllocation {
                name: "Ad1".into(),
                current_budget: 50.0,
                algo_suggested_budget: 70.0,
                sentiment_analysis: None,
            }],
        }
    }

    #[test]
    fn paths_map_to_steps() {
        assert_eq!(Step::from_path("/campaign-info"), Step::CampaignInfo);
        assert_eq!(Step::from_path("/ad-entries"), Step::AdEntries);
        assert_eq!(Step::from_path("/results"), Step::Results);
        assert_eq!(Step::from_path("/"), Step::CampaignInfo);
        assert_eq!(Step::from_path("/nowhere"), Step::CampaignInfo);
        for step in Step::ALL {
            assert_eq!(Step::from_path(step.path()), step);
            assert_eq!(Step::ALL[step.index()], step);
        }
    }

    #[test]
    fn next_requires_non_blank_name() {
        let mut state = WizardState::new();
        assert!(!state.can_advance());

        state.campaign_name = "   \t".into();
        assert!(!state.can_advance());

        for name in ["Summer Sale", " x ", "0"] {
            state.campaign_name = name.into();
            assert!(state.can_advance(), "{name:?}");
        }
    }

    #[test]
    fn last_entry_cannot_be_removed() {
        let mut state = WizardState::new();
        assert!(!state.can_remove());
        assert!(!state.remove_entry(0));
        assert_eq!(state.entries().len(), 1);

        state.add_entry();
        state.add_entry();
        assert!(!state.remove_entry(7));
        assert!(state.remove_entry(1));
        assert!(state.remove_entry(0));
        assert!(!state.remove_entry(0));
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn added_entries_are_blank_with_fresh_keys() {
        let mut state = WizardState::new();
        state.add_entry();
        state.add_entry();
        state.remove_entry(1);
        state.add_entry();

        let keys: Vec<_> = state.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, [0, 2, 3]);
        assert!(state.entries().iter().all(|e| e.name.is_empty() && e.current_budget.is_empty()));
    }

    #[test]
    fn editing_leaves_other_entries_untouched() {
        let mut state = WizardState::new();
        state.add_entry();
        state.add_entry();
        state.edit_field(0, AdField::Name, "first".into());
        state.edit_field(2, AdField::Clicks, "30".into());
        let before = state.entries().to_vec();

        assert!(state.edit_field(1, AdField::CurrentBudget, "12.5".into()));

        let after = state.entries();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].current_budget, "12.5");
        assert_eq!(after[1].name, before[1].name);
        assert_eq!(after[1].clicks, before[1].clicks);
        assert!(!state.edit_field(3, AdField::Name, "ghost".into()));
    }

    #[test]
    fn submission_toggles_loading_and_stores_result() {
        let mut state = WizardState::new();
        state.campaign_name = "Summer Sale".into();
        state.edit_field(0, AdField::Clicks, "abc".into());

        let request = state.begin_submission();
        assert!(state.loading);
        assert_eq!(request.campaign_name, "Summer Sale");
        assert_eq!(request.campaigns[0].clicks, 0);

        assert!(state.complete_submission::<()>(Ok(response())));
        assert!(!state.loading);
        assert_eq!(state.response, Some(response()));
    }

    #[test]
    fn failed_submission_clears_previous_result() {
        let mut state = WizardState::new();
        state.response = Some(response());
        state.begin_submission();

        assert!(!state.complete_submission(Err("service down")));
        assert!(!state.loading);
        assert!(state.response.is_none());
    }

    #[test]
    fn fresh_state_has_no_results_or_history() {
        let mut state = WizardState::new();
        assert!(state.response.is_none());
        assert!(state.history.is_empty());
        assert!(!state.show_history);
        state.toggle_history();
        assert!(state.show_history);
    }
}
