use crate::framework::StoreEntity;
use crate::model::{Product, ProductionSuggestion, RawMaterial};
use crate::store::actions::{InventoryAction, OperationKind, Outcome};
use crate::store::local_id::LocalIdGenerator;

/// Everything the inventory screens read.
///
/// `loading` is a single flag shared by every operation, so overlapping operations
/// will clear it as soon as the first one settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryState {
    pub materials: Vec<RawMaterial>,
    pub products: Vec<Product>,
    pub suggestions: Vec<ProductionSuggestion>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InventoryState {
    /// Applies the shared Pending/Fulfilled/Rejected bookkeeping and, on success,
    /// the operation-specific `merge`.
    fn settle<T>(&mut self, kind: OperationKind, outcome: Outcome<T>, merge: impl FnOnce(&mut Self, T)) {
        match outcome {
            Outcome::Pending => {
                self.loading = true;
                self.error = None;
            }
            Outcome::Fulfilled(value) => {
                self.loading = false;
                merge(self, value);
            }
            Outcome::Rejected(reason) => {
                self.loading = false;
                self.error = Some(reason.unwrap_or_else(|| kind.unknown_error()));
            }
        }
    }
}

impl StoreEntity for InventoryState {
    type Action = InventoryAction;
    type Context = LocalIdGenerator;

    fn reduce(&mut self, action: InventoryAction, ids: &LocalIdGenerator) {
        use InventoryAction::*;

        match action {
            FetchMaterials(outcome) => {
                self.settle(OperationKind::FetchMaterials, outcome, |s, materials| {
                    s.materials = materials
                })
            }
            CreateMaterial(outcome) => {
                self.settle(OperationKind::CreateMaterial, outcome, |s, material| {
                    s.materials.push(material)
                })
            }
            FetchProducts(outcome) => {
                self.settle(OperationKind::FetchProducts, outcome, |s, products| {
                    s.products = products
                })
            }
            CreateProduct(outcome) => {
                self.settle(OperationKind::CreateProduct, outcome, |s, product| {
                    s.products.push(product)
                })
            }
            UpdateProduct(outcome) => {
                self.settle(OperationKind::UpdateProduct, outcome, |s, product| {
                    // Unknown ids are ignored.
                    if let Some(slot) = s.products.iter_mut().find(|p| p.id == product.id) {
                        *slot = product;
                    }
                })
            }
            DeleteProduct(outcome) => {
                self.settle(OperationKind::DeleteProduct, outcome, |s, id| {
                    s.products.retain(|p| p.id != id)
                })
            }
            FetchSuggestions(outcome) => {
                self.settle(OperationKind::FetchSuggestions, outcome, |s, suggestions| {
                    s.suggestions = suggestions
                })
            }
            AddMaterialLocally(draft) => self.materials.push(draft.with_id(ids.next_id())),
            ClearError => self.error = None,
        }
    }

    fn describe(&self) -> String {
        format!(
            "materials={} products={} suggestions={} loading={} error={}",
            self.materials.len(),
            self.products.len(),
            self.suggestions.len(),
            self.loading,
            self.error.as_deref().unwrap_or("-"),
        )
    }
}
