//! Client-side validation failures.

use thiserror::Error;

/// Why a form cannot be submitted. Caught before any request is sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must not be blank")]
    BlankName,

    #[error("Stock quantity must not be negative")]
    NegativeQuantity,

    #[error("Price must be greater than zero")]
    NonPositivePrice,

    #[error("At least one raw material is required")]
    NoMaterials,

    /// Entry `{0}` has no material selected.
    #[error("Material entry {0} has no raw material selected")]
    MissingMaterial(usize),

    /// Entry `{0}` names a material that is not in the current list.
    #[error("Material entry {0} refers to an unknown raw material")]
    UnknownMaterial(usize),

    #[error("Material entry {0} must require at least one unit")]
    NonPositiveRequirement(usize),
}
