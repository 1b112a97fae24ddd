//! Inventory Store
//!
//! The single owner of [`InventoryState`]. Mutations arrive only as
//! [`InventoryAction`] messages, applied one at a time by a
//! [`StoreActor`](crate::framework::StoreActor).

pub mod actions;
pub mod local_id;
pub mod state;

pub use actions::{InventoryAction, OperationKind, Outcome};
pub use local_id::LocalIdGenerator;
pub use state::InventoryState;

use crate::framework::{StoreActor, StoreClient};

/// Capacity of the store's request channel.
pub const STORE_BUFFER_SIZE: usize = 32;

/// Handle used to talk to the inventory store.
pub type InventoryStore = StoreClient<InventoryState>;

/// Creates an empty inventory store actor and its client.
///
/// The actor must be spawned with a [`LocalIdGenerator`] as its context.
pub fn new() -> (StoreActor<InventoryState>, InventoryStore) {
    StoreActor::new(STORE_BUFFER_SIZE)
}
