use serde::{Deserialize, Serialize};

use crate::model::ad_entry::AdEntry;

/// One ad as sent to the analysis service, with numeric fields parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub name: String,
    pub ad_title: String,
    pub clicks: u64,
    pub impressions: u64,
    pub current_budget: f64,
}

/// Request payload for the campaign analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub campaign_name: String,
    pub campaigns: Vec<CampaignInput>,
}

impl From<&AdEntry> for CampaignInput {
    fn from(entry: &AdEntry) -> Self {
        Self {
            name: entry.name.clone(),
            ad_title: entry.ad_title.clone(),
            clicks: entry.parsed_clicks(),
            impressions: entry.parsed_impressions(),
            current_budget: entry.parsed_budget(),
        }
    }
}

impl AnalysisRequest {
    pub fn from_form(campaign_name: &str, entries: &[AdEntry]) -> Self {
        Self {
            campaign_name: campaign_name.to_string(),
            campaigns: entries.iter().map(CampaignInput::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_wire_field_names() {
        let entry = AdEntry {
            key: 9,
            name: "Ad1".into(),
            ad_title: "T".into(),
            clicks: "100".into(),
            impressions: "oops".into(),
            current_budget: "50".into(),
        };
        let request = AnalysisRequest::from_form("Summer Sale", &[entry]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["campaign_name"], "Summer Sale");
        assert_eq!(json["campaigns"][0]["ad_title"], "T");
        assert_eq!(json["campaigns"][0]["clicks"], 100);
        assert_eq!(json["campaigns"][0]["impressions"], 0);
        assert_eq!(json["campaigns"][0]["current_budget"], 50.0);
        assert!(json["campaigns"][0].get("key").is_none());
    }
}
