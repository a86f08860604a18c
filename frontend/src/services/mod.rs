//! Seams to the outside world: campaign analysis and the history listing.
//!
//! Failures are typed here but never shown to the user; callers log them.

pub mod analysis;
pub mod history;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ServiceError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ServiceError::Decode(e.to_string()),
            other => ServiceError::Transport(other.to_string()),
        }
    }
}
