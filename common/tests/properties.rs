use common::analysis::{synthesize, MAX_BUDGET_FACTOR, MIN_BUDGET_FACTOR};
use common::model::ad_entry::{parse_amount, parse_count, AdField};
use common::model::analysis::Sentiment;
use common::requests::{AnalysisRequest, CampaignInput};
use common::wizard::WizardState;
use proptest::prelude::*;

const FIELDS: [AdField; 5] = [
    AdField::Name,
    AdField::AdTitle,
    AdField::Clicks,
    AdField::Impressions,
    AdField::CurrentBudget,
];

fn field() -> impl Strategy<Value = AdField> {
    prop_oneof![
        Just(AdField::Name),
        Just(AdField::AdTitle),
        Just(AdField::Clicks),
        Just(AdField::Impressions),
        Just(AdField::CurrentBudget),
    ]
}

/// Free text, number-like text with trailing garbage, and blank text.
fn form_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ \t]{0,2}[+-]?[0-9]{0,25}(\\.[0-9]{0,5})?([eE][+-]?[0-9]{0,4})?.{0,3}",
        "[ \t\n]{0,4}",
    ]
}

/// A wizard with `count` entries whose fields all hold distinct text.
fn filled_state(count: usize) -> WizardState {
    let mut state = WizardState::new();
    for _ in 1..count {
        state.add_entry();
    }
    for index in 0..count {
        for field in FIELDS {
            state.edit_field(index, field, format!("{index}-{field:?}"));
        }
    }
    state
}

proptest! {
    #[test]
    fn prop_parse_count_never_panics(input in form_text()) {
        let _ = parse_count(&input);
    }

    #[test]
    fn prop_parse_count_reads_leading_digits(
        digits in "[0-9]{1,18}",
        tail in "[a-dx é😀,]{0,4}",
    ) {
        let expected: u64 = digits.parse().unwrap();
        prop_assert_eq!(parse_count(&format!("{digits}{tail}")), expected);
        prop_assert_eq!(parse_count(&format!("-{digits}{tail}")), 0);
    }

    #[test]
    fn prop_parse_amount_is_finite_and_not_negative(input in form_text()) {
        let amount = parse_amount(&input);
        prop_assert!(amount.is_finite());
        prop_assert!(amount >= 0.0);
    }

    #[test]
    fn prop_advance_requires_non_blank_name(name in form_text()) {
        let mut state = WizardState::new();
        state.campaign_name = name.clone();
        prop_assert_eq!(state.can_advance(), !name.trim().is_empty());
    }

    #[test]
    fn prop_edit_touches_only_one_field(
        count in 1usize..6,
        index in 0usize..8,
        target in field(),
        value in any::<String>(),
    ) {
        let mut state = filled_state(count);
        let before = state.clone();

        let edited = state.edit_field(index, target, value.clone());
        prop_assert_eq!(edited, index < count);
        prop_assert_eq!(state.entries().len(), count);

        for (i, (after, original)) in state.entries().iter().zip(before.entries()).enumerate() {
            prop_assert_eq!(after.key, original.key);
            for field in FIELDS {
                if i == index && field == target {
                    prop_assert_eq!(after.field(field), value.as_str());
                } else {
                    prop_assert_eq!(after.field(field), original.field(field));
                }
            }
        }
    }

    #[test]
    fn prop_suggested_budget_stays_in_range(
        budget in prop_oneof![0.0f64..1e12, Just(0.0), Just(10.0), Just(50.0), Just(0.1428571)],
        factor_draw in prop_oneof![
            0.0f64..1.0,
            Just(0.0),
            Just(1.0 - f64::EPSILON / 2.0),
            Just(1.0),
        ],
        sentiment_draw in 0.0f64..1.0,
    ) {
        let request = AnalysisRequest {
            campaign_name: "Range".to_string(),
            campaigns: vec![CampaignInput {
                name: "Ad".to_string(),
                ad_title: String::new(),
                clicks: 0,
                impressions: 0,
                current_budget: budget,
            }],
        };
        let mut draws = [factor_draw, sentiment_draw].into_iter();
        let response = synthesize(&request, &mut || draws.next().unwrap_or(0.0));

        let allocation = &response.data_driven_allocation[0];
        let suggested = allocation.algo_suggested_budget;
        prop_assert_eq!(allocation.current_budget, budget);
        if budget == 0.0 {
            prop_assert_eq!(suggested, 0.0);
        } else {
            prop_assert!(suggested >= budget * MIN_BUDGET_FACTOR, "{} for {}", suggested, budget);
            prop_assert!(suggested < budget * MAX_BUDGET_FACTOR, "{} for {}", suggested, budget);
        }

        let sentiment = allocation
            .sentiment_analysis
            .as_ref()
            .map(|analysis| analysis.sentiment.clone())
            .unwrap_or_default();
        prop_assert!(Sentiment::ALL.iter().any(|s| s.label() == sentiment));
    }
}
