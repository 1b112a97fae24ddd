//! # InventoryApi Trait
//!
//! The remote API as the operations see it: one async method per endpoint.
//! [`HttpGateway`](crate::gateway::HttpGateway) is the production implementation;
//! [`MockGateway`](crate::gateway::mock::MockGateway) scripts responses in tests.

use crate::gateway::GatewayError;
use crate::model::{
    MaterialRequirement, NewRawMaterial, Product, ProductCore, ProductUpdate,
    ProductionSuggestion, RawMaterial,
};
use async_trait::async_trait;

#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /raw-materials`
    async fn list_materials(&self) -> Result<Vec<RawMaterial>, GatewayError>;

    /// `POST /raw-materials`
    async fn create_material(&self, material: &NewRawMaterial) -> Result<RawMaterial, GatewayError>;

    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// `POST /products` with the core fields only.
    async fn create_product(&self, core: &ProductCore) -> Result<Product, GatewayError>;

    /// `POST /products/{id}/raw-materials`
    async fn add_product_material(
        &self,
        product_id: &str,
        requirement: &MaterialRequirement,
    ) -> Result<MaterialRequirement, GatewayError>;

    /// `PUT /products/{id}` with the full desired product.
    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, GatewayError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: &str) -> Result<(), GatewayError>;

    /// `GET /production/suggestions`
    async fn list_suggestions(&self) -> Result<Vec<ProductionSuggestion>, GatewayError>;
}
