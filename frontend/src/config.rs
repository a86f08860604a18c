//! Build-time configuration.
//!
//! The app runs entirely in the browser, so optional endpoints are baked in
//! when the bundle is built (e.g. `CAMPAIGN_HISTORY_URL=... trunk build`).
//! With nothing set, analysis is synthesized locally and history stays off.

const DEFAULT_ANALYSIS_DELAY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Simulated latency of the synthetic analysis.
    pub analysis_delay_ms: u32,
    /// Endpoint of a real analysis service; replaces the synthetic one when set.
    pub analysis_endpoint: Option<&'static str>,
    /// Endpoint listing past analyses; fetched once on mount when set.
    pub history_endpoint: Option<&'static str>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            analysis_endpoint: None,
            history_endpoint: None,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            analysis_endpoint: non_empty(option_env!("CAMPAIGN_ANALYSIS_URL")),
            history_endpoint: non_empty(option_env!("CAMPAIGN_HISTORY_URL")),
            ..Self::default()
        }
    }
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
