use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categorical label attached to an ad by the synthetic analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Visual tone used for the sentiment badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Destructive,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl BadgeTone {
    /// Tone for any sentiment label a service may send. Matching ignores case
    /// and surrounding whitespace; unknown labels are neutral.
    pub fn for_label(label: &str) -> BadgeTone {
        match label.trim().to_lowercase().as_str() {
            "positive" => BadgeTone::Success,
            "negative" => BadgeTone::Destructive,
            _ => BadgeTone::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Destructive => "badge badge-destructive",
            BadgeTone::Neutral => "badge badge-neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Label as sent by the service, shown verbatim.
    pub sentiment: String,
    #[serde(default)]
    pub explanation: String,
}

impl SentimentAnalysis {
    pub fn tone(&self) -> BadgeTone {
        BadgeTone::for_label(&self.sentiment)
    }
}

/// Budget suggestion for one ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdAllocation {
    pub name: String,
    pub current_budget: f64,
    pub algo_suggested_budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<SentimentAnalysis>,
}

/// Body returned by an analysis service.
///
/// `gpt_recommendation` is free-form: the view only pretty-prints it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub gpt_recommendation: Value,
    pub data_driven_allocation: Vec<AdAllocation>,
}

/// Shape of the recommendation produced by the synthetic analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub summary: String,
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_sentiment_label_decodes() {
        for label in ["Mixed", "pOsitive", "Positive ", "negative", ""] {
            let raw = format!(r#"{{"sentiment":"{label}","explanation":"x"}}"#);
            let parsed: SentimentAnalysis = serde_json::from_str(&raw).unwrap();
            assert_eq!(parsed.sentiment, label);
        }
    }

    #[test]
    fn tones_ignore_case_and_default_to_neutral() {
        assert_eq!(BadgeTone::for_label("Positive"), BadgeTone::Success);
        assert_eq!(BadgeTone::for_label("pOsitive"), BadgeTone::Success);
        assert_eq!(BadgeTone::for_label(" NEGATIVE "), BadgeTone::Destructive);
        assert_eq!(BadgeTone::for_label("Neutral"), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_label("Mixed"), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_label(""), BadgeTone::Neutral);
        assert_eq!(BadgeTone::Destructive.css_class(), "badge badge-destructive");
    }

    #[test]
    fn unknown_label_keeps_the_whole_response() {
        let raw = r#"{
            "gpt_recommendation": null,
            "data_driven_allocation": [
                {"name": "Ad1", "current_budget": 10.0, "algo_suggested_budget": 14.5,
                 "sentiment_analysis": {"sentiment": "Mixed", "explanation": "split audience"}}
            ]
        }"#;
        let response: AnalysisResponse = serde_json::from_str(raw).unwrap();
        let analysis = response.data_driven_allocation[0].sentiment_analysis.as_ref().unwrap();
        assert_eq!(analysis.sentiment, "Mixed");
        assert_eq!(analysis.tone(), BadgeTone::Neutral);
    }

    #[test]
    fn allocation_without_sentiment_decodes() {
        let raw = r#"{
            "gpt_recommendation": "shift spend to search",
            "data_driven_allocation": [
                {"name": "Ad1", "current_budget": 10.0, "algo_suggested_budget": 14.5}
            ]
        }"#;
        let response: AnalysisResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.data_driven_allocation.len(), 1);
        assert!(response.data_driven_allocation[0].sentiment_analysis.is_none());
        assert_eq!(response.gpt_recommendation, Value::String("shift spend to search".into()));
    }
}
