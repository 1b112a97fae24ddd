//! Generic single-state store built on the actor model.
//!
//! This module provides the building blocks for owning one state value in one task
//! and mutating it only through typed action messages.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait the owned state implements (its reducer)
//! - [`StoreActor`] - The task that owns the state
//! - [`StoreClient`] - Cloneable handle for dispatching actions and reading state
//! - [`FrameworkError`] - Common channel errors
//!
//! # Testing
//!
//! See [`mock`] for utilities that capture dispatched actions without running an actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
