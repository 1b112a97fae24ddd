//! Dashboard figures computed from a store snapshot.
//!
//! Everything here is a pure function of its input and can be recomputed on
//! every render.

use crate::model::{ProductionSuggestion, RawMaterial};
use crate::store::InventoryState;
use rust_decimal::Decimal;

/// Materials with strictly fewer units than this are low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Potential revenue across all suggestions.
pub fn total_revenue(suggestions: &[ProductionSuggestion]) -> Decimal {
    suggestions.iter().map(|s| s.total_value).sum()
}

/// Number of producible products.
///
/// Counts suggestions rather than catalogued products: an item the server cannot
/// suggest is not producible.
pub fn total_products(suggestions: &[ProductionSuggestion]) -> usize {
    suggestions.len()
}

pub fn low_stock_materials(materials: &[RawMaterial]) -> Vec<&RawMaterial> {
    materials
        .iter()
        .filter(|m| m.stock_quantity < LOW_STOCK_THRESHOLD)
        .collect()
}

pub fn has_low_stock(materials: &[RawMaterial]) -> bool {
    materials
        .iter()
        .any(|m| m.stock_quantity < LOW_STOCK_THRESHOLD)
}

/// Suggestions by `total_value`, highest first. Ties keep their fetched order.
pub fn sorted_suggestions(suggestions: &[ProductionSuggestion]) -> Vec<&ProductionSuggestion> {
    let mut sorted: Vec<&ProductionSuggestion> = suggestions.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    sorted
}

/// Text for the stock status card, e.g. `2 materiais com menos de 10 unidades`.
pub fn low_stock_notice(count: usize) -> String {
    let noun = if count == 1 { "material" } else { "materiais" };
    format!(
        "{} {} com menos de {} unidades",
        count, noun, LOW_STOCK_THRESHOLD
    )
}

/// All dashboard figures from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_revenue: Decimal,
    pub total_products: usize,
    pub low_stock: Vec<RawMaterial>,
    pub suggestions: Vec<ProductionSuggestion>,
}

impl DashboardSummary {
    pub fn from_state(state: &InventoryState) -> Self {
        Self {
            total_revenue: total_revenue(&state.suggestions),
            total_products: total_products(&state.suggestions),
            low_stock: low_stock_materials(&state.materials)
                .into_iter()
                .cloned()
                .collect(),
            suggestions: sorted_suggestions(&state.suggestions)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn has_low_stock(&self) -> bool {
        !self.low_stock.is_empty()
    }

    /// The stock status line, or `None` when stock is fine.
    pub fn stock_notice(&self) -> Option<String> {
        self.has_low_stock()
            .then(|| low_stock_notice(self.low_stock.len()))
    }
}
