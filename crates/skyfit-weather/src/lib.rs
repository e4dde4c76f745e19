//! Weather service for skyfit
//!
//! Fetches current weather and an outfit suggestion from the skyfit API,
//! with location resolution, request caching, rate limiting, and persistence
//! of the last successful report.

pub mod cache;
pub mod client;
pub mod location;
pub mod rate_limit;
pub mod store;
pub mod types;

pub use cache::RequestCache;
pub use client::WeatherClient;
pub use location::{LocationError, LocationSource, Position};
pub use rate_limit::{RateLimitStatus, RateLimiter};
pub use store::ReportStore;
pub use types::*;
