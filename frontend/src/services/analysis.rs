//! Campaign analysis behind a single async seam.
//!
//! The wizard only talks to [`AnalysisService::submit_campaign`]. The default
//! implementation fabricates a result after a fixed delay; an HTTP-backed one
//! takes over when an analysis endpoint is configured.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use common::analysis::synthesize;
use common::model::analysis::AnalysisResponse;
use common::requests::AnalysisRequest;

use super::ServiceError;
use crate::config::AppConfig;

#[async_trait(?Send)]
pub trait AnalysisService {
    async fn submit_campaign(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, ServiceError>;
}

/// Local stand-in that waits `delay_ms` and then synthesizes a result.
pub struct SyntheticAnalysisService {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl AnalysisService for SyntheticAnalysisService {
    async fn submit_campaign(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, ServiceError> {
        TimeoutFuture::new(self.delay_ms).await;
        let mut draw = js_sys::Math::random;
        Ok(synthesize(&request, &mut draw))
    }
}

/// Posts the request as JSON and decodes an `AnalysisResponse`.
pub struct HttpAnalysisService {
    pub url: String,
}

#[async_trait(?Send)]
impl AnalysisService for HttpAnalysisService {
    async fn submit_campaign(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, ServiceError> {
        let response = Request::post(&self.url).json(&request)?.send().await?;
        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }
        Ok(response.json::<AnalysisResponse>().await?)
    }
}

/// Shared handle passed down as a component property.
///
/// Two handles are equal when they point at the same service instance.
#[derive(Clone)]
pub struct AnalysisHandle(pub Rc<dyn AnalysisService>);

impl PartialEq for AnalysisHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AnalysisHandle {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.analysis_endpoint {
            Some(url) => AnalysisHandle(Rc::new(HttpAnalysisService {
                url: url.to_string(),
            })),
            None => AnalysisHandle(Rc::new(SyntheticAnalysisService {
                delay_ms: config.analysis_delay_ms,
            })),
        }
    }
}
