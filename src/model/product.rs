use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product's requirement of one raw material (the association record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    #[serde(deserialize_with = "crate::model::id::deserialize")]
    pub raw_material_id: String,
    pub required_quantity: u32,
}

impl MaterialRequirement {
    pub fn new(raw_material_id: impl Into<String>, required_quantity: u32) -> Self {
        Self {
            raw_material_id: raw_material_id.into(),
            required_quantity,
        }
    }
}

/// A manufacturable item with a sale value and its material requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "crate::model::id::deserialize")]
    pub id: String,
    pub name: String,
    pub value: Decimal,
    #[serde(default)]
    pub raw_materials: Vec<MaterialRequirement>,
}

/// The core fields of a product (`POST /products` body; no associations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCore {
    pub name: String,
    pub value: Decimal,
}

/// Input for the composite create-product operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub value: Decimal,
    pub raw_materials: Vec<MaterialRequirement>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            raw_materials: Vec::new(),
        }
    }

    pub fn with_material(mut self, raw_material_id: impl Into<String>, required_quantity: u32) -> Self {
        self.raw_materials
            .push(MaterialRequirement::new(raw_material_id, required_quantity));
        self
    }

    /// Splits into the core payload and the associations to post afterwards.
    pub fn into_parts(self) -> (ProductCore, Vec<MaterialRequirement>) {
        (
            ProductCore {
                name: self.name,
                value: self.value,
            },
            self.raw_materials,
        )
    }
}

/// Full desired state of a product (`PUT /products/{id}` body).
///
/// The server diffs `raw_materials` against what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    pub value: Decimal,
    pub raw_materials: Vec<MaterialRequirement>,
}

impl From<Product> for ProductUpdate {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            value: product.value,
            raw_materials: product.raw_materials,
        }
    }
}
