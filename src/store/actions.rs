//! Actions accepted by the inventory store.
//!
//! Each async operation contributes one variant carrying an [`Outcome`]; the two
//! synchronous local actions complete the closed set. The store's reducer is an
//! exhaustive match over these variants.

use crate::model::{NewRawMaterial, Product, ProductionSuggestion, RawMaterial};
use std::fmt;

/// Lifecycle of one async operation run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The request is outstanding.
    Pending,
    /// The operation succeeded with its merge payload.
    Fulfilled(T),
    /// The operation failed. `None` means no message could be extracted.
    Rejected(Option<String>),
}

/// The named async operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    FetchMaterials,
    CreateMaterial,
    FetchProducts,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    FetchSuggestions,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        Self::FetchMaterials,
        Self::CreateMaterial,
        Self::FetchProducts,
        Self::CreateProduct,
        Self::UpdateProduct,
        Self::DeleteProduct,
        Self::FetchSuggestions,
    ];

    /// Stable name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchMaterials => "inventory/fetchMaterials",
            Self::CreateMaterial => "inventory/createMaterial",
            Self::FetchProducts => "inventory/fetchProducts",
            Self::CreateProduct => "inventory/createProduct",
            Self::UpdateProduct => "inventory/updateProduct",
            Self::DeleteProduct => "inventory/deleteProduct",
            Self::FetchSuggestions => "inventory/fetchProductionSuggestions",
        }
    }

    /// Message used when a failure carries no message of its own.
    pub fn default_failure_message(&self) -> &'static str {
        match self {
            Self::FetchMaterials => "Failed to fetch raw materials.",
            Self::CreateMaterial => "Failed to create raw material.",
            Self::FetchProducts => "Failed to fetch products.",
            Self::CreateProduct => "Failed to create product.",
            Self::UpdateProduct => "Failed to update product.",
            Self::DeleteProduct => "Failed to delete product.",
            Self::FetchSuggestions => "Failed to fetch production suggestions.",
        }
    }

    /// Message stored when a rejection arrives with no reason at all.
    pub fn unknown_error(&self) -> String {
        format!("Unknown error in {}", self.as_str())
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every transition the inventory store can apply.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    FetchMaterials(Outcome<Vec<RawMaterial>>),
    CreateMaterial(Outcome<RawMaterial>),
    FetchProducts(Outcome<Vec<Product>>),
    CreateProduct(Outcome<Product>),
    UpdateProduct(Outcome<Product>),
    /// Fulfilled payload is the deleted id.
    DeleteProduct(Outcome<String>),
    FetchSuggestions(Outcome<Vec<ProductionSuggestion>>),
    /// Appends a material with a client-generated id. No server round-trip.
    AddMaterialLocally(NewRawMaterial),
    ClearError,
}

impl InventoryAction {
    /// The operation this action belongs to; `None` for the local actions.
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Self::FetchMaterials(_) => Some(OperationKind::FetchMaterials),
            Self::CreateMaterial(_) => Some(OperationKind::CreateMaterial),
            Self::FetchProducts(_) => Some(OperationKind::FetchProducts),
            Self::CreateProduct(_) => Some(OperationKind::CreateProduct),
            Self::UpdateProduct(_) => Some(OperationKind::UpdateProduct),
            Self::DeleteProduct(_) => Some(OperationKind::DeleteProduct),
            Self::FetchSuggestions(_) => Some(OperationKind::FetchSuggestions),
            Self::AddMaterialLocally(_) | Self::ClearError => None,
        }
    }

    /// The rejected action for `kind`, carrying `reason`.
    pub fn rejected(kind: OperationKind, reason: Option<String>) -> Self {
        match kind {
            OperationKind::FetchMaterials => Self::FetchMaterials(Outcome::Rejected(reason)),
            OperationKind::CreateMaterial => Self::CreateMaterial(Outcome::Rejected(reason)),
            OperationKind::FetchProducts => Self::FetchProducts(Outcome::Rejected(reason)),
            OperationKind::CreateProduct => Self::CreateProduct(Outcome::Rejected(reason)),
            OperationKind::UpdateProduct => Self::UpdateProduct(Outcome::Rejected(reason)),
            OperationKind::DeleteProduct => Self::DeleteProduct(Outcome::Rejected(reason)),
            OperationKind::FetchSuggestions => Self::FetchSuggestions(Outcome::Rejected(reason)),
        }
    }

    /// The pending action for `kind`.
    pub fn pending(kind: OperationKind) -> Self {
        match kind {
            OperationKind::FetchMaterials => Self::FetchMaterials(Outcome::Pending),
            OperationKind::CreateMaterial => Self::CreateMaterial(Outcome::Pending),
            OperationKind::FetchProducts => Self::FetchProducts(Outcome::Pending),
            OperationKind::CreateProduct => Self::CreateProduct(Outcome::Pending),
            OperationKind::UpdateProduct => Self::UpdateProduct(Outcome::Pending),
            OperationKind::DeleteProduct => Self::DeleteProduct(Outcome::Pending),
            OperationKind::FetchSuggestions => Self::FetchSuggestions(Outcome::Pending),
        }
    }
}
