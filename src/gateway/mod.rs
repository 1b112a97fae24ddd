//! # HTTP Gateway
//!
//! Wraps outbound calls to the remote inventory API and classifies every outcome
//! into success or exactly one [`GatewayError`] shape.
//!
//! - [`InventoryApi`] - one method per remote endpoint; the seam operations depend on
//! - [`HttpGateway`] - the `reqwest` implementation
//! - [`GatewayConfig`] - base URL and request timeout
//! - [`mock::MockGateway`] - scripted implementation for tests

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use api::*;
pub use config::*;
pub use error::*;
pub use http::*;
