use crate::clients::error::{failure_message, OperationError};
use crate::forms::MaterialForm;
use crate::framework::FrameworkError;
use crate::gateway::{GatewayError, InventoryApi};
use crate::model::{NewProduct, NewRawMaterial, Product, ProductUpdate, ProductionSuggestion, RawMaterial};
use crate::store::{InventoryAction, InventoryState, InventoryStore, OperationKind, Outcome};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// The operations presentation may trigger.
///
/// Each operation dispatches `Pending`, performs its gateway calls, then
/// dispatches `Fulfilled` or `Rejected` and returns the same result to the
/// caller. Operations are independent: nothing stops two from overlapping.
#[derive(Clone)]
pub struct InventoryClient {
    api: Arc<dyn InventoryApi>,
    store: InventoryStore,
}

impl InventoryClient {
    pub fn new(api: Arc<dyn InventoryApi>, store: InventoryStore) -> Self {
        Self { api, store }
    }

    #[instrument(skip(self))]
    pub async fn fetch_materials(&self) -> Result<Vec<RawMaterial>, OperationError> {
        self.run(
            OperationKind::FetchMaterials,
            InventoryAction::FetchMaterials,
            self.api.list_materials(),
        )
        .await
    }

    /// Validates the form first; an invalid form is never dispatched.
    #[instrument(skip(self, form))]
    pub async fn create_material(&self, form: &MaterialForm) -> Result<RawMaterial, OperationError> {
        let material = form.validate().inspect_err(|reason| {
            debug!(%reason, "Material form rejected");
        })?;
        self.run(
            OperationKind::CreateMaterial,
            InventoryAction::CreateMaterial,
            async { self.api.create_material(&material).await },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, OperationError> {
        self.run(
            OperationKind::FetchProducts,
            InventoryAction::FetchProducts,
            self.api.list_products(),
        )
        .await
    }

    /// Creates the product, then attaches each material one request at a time.
    ///
    /// A failed attachment fails the whole operation. The product itself stays
    /// on the server without the remaining materials.
    #[instrument(skip(self, product), fields(name = %product.name, materials = product.raw_materials.len()))]
    pub async fn create_product(&self, product: NewProduct) -> Result<Product, OperationError> {
        self.run(
            OperationKind::CreateProduct,
            InventoryAction::CreateProduct,
            self.create_product_steps(product),
        )
        .await
    }

    async fn create_product_steps(&self, product: NewProduct) -> Result<Product, GatewayError> {
        let (core, requirements) = product.into_parts();
        let created = self.api.create_product(&core).await?;
        debug!(product_id = %created.id, "Product core created");

        let mut accepted = Vec::with_capacity(requirements.len());
        for requirement in &requirements {
            match self.api.add_product_material(&created.id, requirement).await {
                Ok(association) => accepted.push(association),
                Err(err) => {
                    warn!(
                        product_id = %created.id,
                        attached = accepted.len(),
                        requested = requirements.len(),
                        "Product created but a material could not be attached; it is left on the server"
                    );
                    return Err(err);
                }
            }
        }

        Ok(Product {
            raw_materials: accepted,
            ..created
        })
    }

    /// Sends the complete desired product; the server reconciles its materials.
    #[instrument(skip(self, update))]
    pub async fn update_product(&self, id: &str, update: ProductUpdate) -> Result<Product, OperationError> {
        self.run(
            OperationKind::UpdateProduct,
            InventoryAction::UpdateProduct,
            async { self.api.update_product(id, &update).await },
        )
        .await
    }

    /// Resolves to the deleted id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<String, OperationError> {
        self.run(
            OperationKind::DeleteProduct,
            InventoryAction::DeleteProduct,
            async { self.api.delete_product(id).await.map(|()| id.to_string()) },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_suggestions(&self) -> Result<Vec<ProductionSuggestion>, OperationError> {
        self.run(
            OperationKind::FetchSuggestions,
            InventoryAction::FetchSuggestions,
            self.api.list_suggestions(),
        )
        .await
    }

    /// Appends a material with a client-generated id. Nothing is sent to the server.
    pub async fn add_material_locally(&self, material: NewRawMaterial) -> Result<(), FrameworkError> {
        self.store
            .dispatch(InventoryAction::AddMaterialLocally(material))
            .await
    }

    pub async fn clear_error(&self) -> Result<(), FrameworkError> {
        self.store.dispatch(InventoryAction::ClearError).await
    }

    pub async fn snapshot(&self) -> Result<InventoryState, FrameworkError> {
        self.store.snapshot().await
    }

    /// Observes every state the store publishes.
    pub fn subscribe(&self) -> watch::Receiver<InventoryState> {
        self.store.subscribe()
    }

    /// Drives one operation through Pending and then Fulfilled or Rejected.
    async fn run<T, F>(
        &self,
        kind: OperationKind,
        wrap: fn(Outcome<T>) -> InventoryAction,
        call: F,
    ) -> Result<T, OperationError>
    where
        T: Clone,
        F: Future<Output = Result<T, GatewayError>>,
    {
        self.deliver(kind, wrap(Outcome::Pending)).await;

        match call.await {
            Ok(value) => {
                info!(operation = %kind, "Fulfilled");
                self.deliver(kind, wrap(Outcome::Fulfilled(value.clone())))
                    .await;
                Ok(value)
            }
            Err(err) => {
                let message = failure_message(kind, &err);
                info!(operation = %kind, %message, "Rejected");
                self.deliver(kind, wrap(Outcome::Rejected(Some(message.clone()))))
                    .await;
                Err(OperationError::Rejected(message))
            }
        }
    }

    /// A store that has already shut down only loses the transition.
    async fn deliver(&self, kind: OperationKind, action: InventoryAction) {
        if let Err(e) = self.store.dispatch(action).await {
            warn!(operation = %kind, error = %e, "Store unavailable, transition dropped");
        }
    }
}
