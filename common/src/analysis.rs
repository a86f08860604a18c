//! Locally fabricated analysis used until a real service is wired in.
//!
//! For every submitted ad the suggested budget is the current budget `B`
//! scaled by a uniform factor in `[1.2, 1.8)`, and always lands in
//! `[1.2·B, 1.8·B)`. The sentiment is a uniform pick of the three labels.
//! Draws come from a [`RandomSource`] so callers choose the generator (the
//! browser's `Math.random`, or a scripted one in tests).

use serde_json::json;

use crate::model::analysis::{
    AdAllocation, AnalysisResponse, Recommendation, Sentiment, SentimentAnalysis,
};
use crate::requests::AnalysisRequest;

pub const MIN_BUDGET_FACTOR: f64 = 1.2;
pub const BUDGET_FACTOR_SPAN: f64 = 0.6;
/// Exclusive upper bound of the scaling factor.
pub const MAX_BUDGET_FACTOR: f64 = 1.8;

const SUMMARY: &str = "Based on your campaign data, here are optimization recommendations";
const INSIGHTS: [&str; 2] = [
    "Increase budget for high-performing ads",
    "Optimize ad titles for better CTR",
];
const EXPLANATION: &str = "AI-powered sentiment analysis based on ad performance metrics";

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Builds a synthetic response for `request`, preserving ad order.
///
/// Each ad consumes two draws: the budget factor first, then the sentiment.
pub fn synthesize(request: &AnalysisRequest, rng: &mut impl RandomSource) -> AnalysisResponse {
    let recommendation = Recommendation {
        summary: SUMMARY.to_string(),
        insights: INSIGHTS.iter().map(|s| s.to_string()).collect(),
    };

    let data_driven_allocation = request
        .campaigns
        .iter()
        .enumerate()
        .map(|(i, campaign)| {
            let name = if campaign.name.is_empty() {
                format!("Ad {}", i + 1)
            } else {
                campaign.name.clone()
            };
            let factor = MIN_BUDGET_FACTOR + unit(rng) * BUDGET_FACTOR_SPAN;
            let sentiment = pick_sentiment(unit(rng));

            AdAllocation {
                name,
                current_budget: campaign.current_budget,
                algo_suggested_budget: below_ceiling(campaign.current_budget, factor),
                sentiment_analysis: Some(SentimentAnalysis {
                    sentiment: sentiment.label().to_string(),
                    explanation: EXPLANATION.to_string(),
                }),
            }
        })
        .collect();

    AnalysisResponse {
        gpt_recommendation: json!(recommendation),
        data_driven_allocation,
    }
}

/// Clamps a draw into `[0, 1)` so a misbehaving source cannot leave the range.
fn unit(rng: &mut impl RandomSource) -> f64 {
    let r = rng.next_unit();
    if r.is_nan() || r < 0.0 {
        0.0
    } else if r >= 1.0 {
        1.0 - f64::EPSILON
    } else {
        r
    }
}

/// `budget * factor`, pulled under `budget * 1.8` when rounding lands on it.
fn below_ceiling(budget: f64, factor: f64) -> f64 {
    let suggested = budget * factor;
    let ceiling = budget * MAX_BUDGET_FACTOR;
    if budget > 0.0 && suggested >= ceiling {
        f64::from_bits(ceiling.to_bits() - 1)
    } else {
        suggested
    }
}

fn pick_sentiment(r: f64) -> Sentiment {
    let idx = ((r * Sentiment::ALL.len() as f64) as usize).min(Sentiment::ALL.len() - 1);
    Sentiment::ALL[idx]
}
