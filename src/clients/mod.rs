//! The outward face of the inventory layer.
//!
//! Presentation talks only to [`InventoryClient`]; it never sees the gateway or
//! raw store messages.

pub mod error;
pub mod inventory_client;

pub use error::{failure_message, OperationError};
pub use inventory_client::InventoryClient;
