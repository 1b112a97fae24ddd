use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-computed recommendation of how much of a product to produce.
///
/// `product_name` is a display label, not a foreign key. `total_value` is
/// `quantity_to_produce × unit value`, computed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    pub product_name: String,
    pub quantity_to_produce: u32,
    pub total_value: Decimal,
}

impl ProductionSuggestion {
    pub fn new(product_name: impl Into<String>, quantity_to_produce: u32, total_value: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            quantity_to_produce,
            total_value,
        }
    }
}
