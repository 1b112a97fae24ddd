//! # Inventory Planner
//!
//! > **The client-side state layer of an inventory and production-planning app.**
//!
//! Raw materials, products and server-computed production suggestions live in one
//! state value owned by a single Tokio task. Presentation triggers named
//! operations; each operation calls the remote API and reports its progress to
//! the store as `Pending`, then `Fulfilled` or `Rejected`.
//!
//! ## Architecture Notes
//!
//! ### 1. One Owner, Many Dispatchers
//! [`InventoryState`](store::InventoryState) is never shared. The
//! [`StoreActor`](framework::StoreActor) applies [`InventoryAction`](store::InventoryAction)
//! messages one at a time, so no operation ever observes a half-applied transition
//! of another. Every new state is published on a `watch` channel.
//!
//! ### 2. Closed Action Set
//! Each operation has exactly three outcomes, and the reducer is an exhaustive
//! `match`. There is no way to dispatch an action the store does not understand.
//!
//! ### 3. Classified Failures
//! The [`gateway`] turns every failed call into a [`GatewayError`](gateway::GatewayError)
//! (timeout, unreachable, HTTP status, undecodable body) and logs it. Operations turn
//! that into a single message for the store's error slot.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging. Every client operation is a
//! span. See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic single-state store actor and its client.
//! - **Key items**: [`StoreEntity`](framework::StoreEntity), [`StoreActor`](framework::StoreActor).
//!
//! ### 2. The Store ([`store`])
//! - **Role**: The inventory reducer, its actions and the local id generator.
//!
//! ### 3. The Wire ([`gateway`], [`model`])
//! - **Role**: One async method per endpoint, behind the [`InventoryApi`](gateway::InventoryApi) trait.
//! - **Key items**: [`HttpGateway`](gateway::HttpGateway), [`MockGateway`](gateway::mock::MockGateway).
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: [`InventoryClient`](clients::InventoryClient) exposes the seven operations and the two local actions.
//!
//! ### 5. Presentation Helpers ([`views`], [`forms`])
//! Pure dashboard figures, currency formatting and form validation.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`InventorySystem`](lifecycle::InventorySystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### Running the Demo
//!
//! ```bash
//! # Against a local API
//! INVENTORY_API_URL=http://localhost:8080/api RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod forms;
pub mod framework;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod store;
pub mod views;
