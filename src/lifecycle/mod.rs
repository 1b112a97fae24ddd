//! Runtime wiring and observability.
//!
//! # Main Components
//!
//! - [`InventorySystem`] - Starts the store actor and hands out the client
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use tracing::*;
