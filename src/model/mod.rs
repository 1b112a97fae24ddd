//! Data transferred to and from the inventory API.
//!
//! Field names follow the API's camelCase JSON. Identities are server-assigned
//! strings; see [`id`] for how numeric ids on the wire are accepted.

pub mod id;
pub mod material;
pub mod product;
pub mod suggestion;

pub use material::*;
pub use product::*;
pub use suggestion::*;
