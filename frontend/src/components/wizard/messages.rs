use common::model::ad_entry::AdField;
use common::model::analysis::AnalysisResponse;
use common::model::history::HistoryItem;
use common::wizard::Step;

use crate::services::ServiceError;

#[derive(Clone)]
pub enum Msg {
    SetCampaignName(String),
    AddEntry,
    RemoveEntry(usize),
    EditField {
        index: usize,
        field: AdField,
        value: String,
    },
    Navigate(Step),
    Submit,
    AnalysisFinished(Result<AnalysisResponse, ServiceError>),
    ToggleHistory,
    HistoryLoaded(Vec<HistoryItem>),
}
