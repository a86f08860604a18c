//! Shared model and pure logic for the ad campaign optimizer.
//!
//! Everything here is free of browser APIs so it can be unit tested natively
//! and reused by both the Yew frontend and the embedding backend.

pub mod analysis;
pub mod chart;
pub mod model;
pub mod requests;
pub mod wizard;
