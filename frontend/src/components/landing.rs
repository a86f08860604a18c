//! Landing page mounted at `/`.

use yew::{html, Callback, Component, Context, Html, MouseEvent};
use yew_router::prelude::*;

use crate::route::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "📊",
        "Data-Driven Insights",
        "Get AI-powered recommendations based on your campaign performance data",
    ),
    (
        "📈",
        "Budget Optimization",
        "Automatically optimize budget allocation across your ad campaigns",
    ),
    (
        "🎯",
        "Sentiment Analysis",
        "Understand how your audience responds to your ad content",
    ),
    (
        "⚡",
        "Real-time Analysis",
        "Get instant feedback and recommendations for campaign improvements",
    ),
];

pub struct Landing;

impl Component for Landing {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Landing
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigator = ctx.link().navigator();
        let on_start = Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CampaignInfo);
            }
        });

        html! {
            <div class="page">
                <header class="hero">
                    <h1>{"Ad Campaign Optimization"}</h1>
                    <p>{"Plan, analyze and optimize your ad spend across campaigns using data and AI insights."}</p>
                    <button class="btn btn-light btn-lg" onclick={on_start}>{"Get Started →"}</button>
                </header>
                <div class="container feature-grid">
                    {
                        for FEATURES.iter().map(|(icon, title, description)| html! {
                            <div class="card feature-card">
                                <div class="feature-icon">{ *icon }</div>
                                <h3 class="card-title">{ *title }</h3>
                                <p class="muted">{ *description }</p>
                            </div>
                        })
                    }
                </div>
            </div>
        }
    }
}
