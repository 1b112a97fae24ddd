//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the inventory layer.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! providing hierarchical spans that show the complete request flow through the system.
//!
//! ## Configuration
//!
//! The framework uses a compact format that hides the crate/module prefix (`with_target(false)`).
//! This keeps log lines short while still providing rich structured data.
//!
//! - **Structured logging** with `tracing` crate
//! - **Hierarchical spans** for request tracing
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: Startup, shutdown, and the final state summary
//! - **Transitions**: Every dispatched action (debug) and the state after it (info)
//! - **Operations**: One span per client operation, with its outcome
//! - **Gateway Failures**: Method, path and HTTP status or transport reason
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show every dispatched action and outgoing request
//! RUST_LOG=debug cargo run
//!
//! # Only the gateway
//! RUST_LOG=inventory_planner::gateway=debug cargo run
//! ```
//!
//! ## Example Output
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Store started state_type="InventoryState"
//! INFO Applied state_type="InventoryState" state=materials=0 products=0 suggestions=0 loading=true error=-
//! INFO create_product{name=Chair materials=1}: Fulfilled operation=inventory/createProduct
//! INFO create_product{name=Chair materials=1}: Applied state_type="InventoryState" state=materials=0 products=1 suggestions=0 loading=false error=-
//! ```
//!
//! A gateway failure shows up once at `error` level where it happened, then as
//! the rejected transition:
//!
//! ```text
//! ERROR fetch_products: Network error; server unreachable method=GET path="/products" reason=Connection refused
//! INFO fetch_products: Rejected operation=inventory/fetchProducts message=Connection refused
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use state_type instead
        .compact() // Compact format shows spans inline (e.g., "create_product{name=Chair}")
        .init();
}
