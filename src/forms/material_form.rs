use crate::forms::ValidationError;
use crate::model::NewRawMaterial;

/// Raw material entry as typed by the user.
///
/// `stock_quantity` is signed so that a negative entry can be represented and
/// rejected rather than silently wrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialForm {
    pub name: String,
    pub stock_quantity: i64,
}

impl MaterialForm {
    pub fn new(name: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }

    /// Checks the form and produces the create payload with a trimmed name.
    pub fn validate(&self) -> Result<NewRawMaterial, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }
        let quantity =
            u32::try_from(self.stock_quantity).map_err(|_| ValidationError::NegativeQuantity)?;
        Ok(NewRawMaterial::new(name, quantity))
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}
