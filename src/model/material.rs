use serde::{Deserialize, Serialize};

/// A stocked input resource.
///
/// Created on the server (which assigns `id`) and only ever replaced wholesale
/// on fetch, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    #[serde(deserialize_with = "crate::model::id::deserialize")]
    pub id: String,
    pub name: String,
    pub stock_quantity: u32,
}

/// Payload for creating a raw material (`POST /raw-materials`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRawMaterial {
    pub name: String,
    pub stock_quantity: u32,
}

impl NewRawMaterial {
    pub fn new(name: impl Into<String>, stock_quantity: u32) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }

    /// Attaches an identity, producing the full entity.
    pub fn with_id(self, id: impl Into<String>) -> RawMaterial {
        RawMaterial {
            id: id.into(),
            name: self.name,
            stock_quantity: self.stock_quantity,
        }
    }
}
