use crate::forms::ValidationError;
use crate::model::{MaterialRequirement, NewProduct, Product, ProductUpdate, RawMaterial};
use rust_decimal::Decimal;

/// One material row in the product form. An empty id means nothing is selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialEntry {
    pub raw_material_id: String,
    pub required_quantity: i64,
}

impl MaterialEntry {
    pub fn new(raw_material_id: impl Into<String>, required_quantity: i64) -> Self {
        Self {
            raw_material_id: raw_material_id.into(),
            required_quantity,
        }
    }
}

/// Product entry as typed by the user, for both create and edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: Decimal,
    pub materials: Vec<MaterialEntry>,
}

impl ProductForm {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            materials: Vec::new(),
        }
    }

    pub fn with_entry(mut self, raw_material_id: impl Into<String>, required_quantity: i64) -> Self {
        self.materials
            .push(MaterialEntry::new(raw_material_id, required_quantity));
        self
    }

    /// Pre-fills the form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.value,
            materials: product
                .raw_materials
                .iter()
                .map(|r| MaterialEntry::new(r.raw_material_id.clone(), r.required_quantity.into()))
                .collect(),
        }
    }

    /// Checks every field, returning the trimmed name and the requirements.
    ///
    /// Every entry must point at one of `materials`, the list the user picks from.
    fn check(&self, materials: &[RawMaterial]) -> Result<(String, Vec<MaterialRequirement>), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
        if self.materials.is_empty() {
            return Err(ValidationError::NoMaterials);
        }

        let requirements = self
            .materials
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = entry.raw_material_id.trim();
                if id.is_empty() {
                    return Err(ValidationError::MissingMaterial(index));
                }
                if !materials.iter().any(|m| m.id == id) {
                    return Err(ValidationError::UnknownMaterial(index));
                }
                match u32::try_from(entry.required_quantity) {
                    Ok(quantity) if quantity >= 1 => Ok(MaterialRequirement::new(id, quantity)),
                    _ => Err(ValidationError::NonPositiveRequirement(index)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((name.to_string(), requirements))
    }

    /// Input for the composite create operation.
    pub fn to_new_product(&self, materials: &[RawMaterial]) -> Result<NewProduct, ValidationError> {
        let (name, raw_materials) = self.check(materials)?;
        Ok(NewProduct {
            name,
            value: self.price,
            raw_materials,
        })
    }

    /// Full payload for updating an existing product.
    pub fn to_update(&self, materials: &[RawMaterial]) -> Result<ProductUpdate, ValidationError> {
        let (name, raw_materials) = self.check(materials)?;
        Ok(ProductUpdate {
            name,
            value: self.price,
            raw_materials,
        })
    }

    pub fn can_submit(&self, materials: &[RawMaterial]) -> bool {
        self.check(materials).is_ok()
    }
}
