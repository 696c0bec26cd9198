//! Remote image search against the NASA SkyView survey service.
//!
//! [`SkyViewClient`] implements [`sky_common::SurveySearch`]: it asks
//! SkyView for a FITS cutout of a named object (or position) from one
//! survey, retrying transient failures with exponential backoff, and decodes
//! the answer with `fits-parser`.

pub mod client;
pub mod config;
pub mod query;

pub use client::SkyViewClient;
pub use config::SurveyClientConfig;
pub use query::{build_query_url, interpret_response, is_retryable_status};
