//! Read-only computations over [`InventoryState`](crate::store::InventoryState).

pub mod currency;
pub mod dashboard;

pub use currency::format_currency;
pub use dashboard::*;
