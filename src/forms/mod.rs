//! Client-side form handling.
//!
//! Forms validate before anything is dispatched; a form that fails validation is
//! simply not submittable and never reaches the gateway.

pub mod error;
pub mod material_form;
pub mod price;
pub mod product_form;

pub use error::ValidationError;
pub use material_form::MaterialForm;
pub use price::{format_price_input, parse_price_input};
pub use product_form::{MaterialEntry, ProductForm};
