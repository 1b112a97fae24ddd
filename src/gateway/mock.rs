//! # Mock Gateway
//!
//! A scripted [`InventoryApi`] for testing operations without a server.
//!
//! Queue one reply per expected call with the fluent builders, share the mock with
//! the code under test, then assert on [`MockGateway::calls`] and
//! [`MockGateway::verify`].
//!
//! ```ignore
//! let mock = Arc::new(MockGateway::new());
//! mock.expect_create_product().return_ok(product);
//! mock.expect_add_product_material().return_err(GatewayError::Timeout(secs(60)));
//!
//! let client = InventoryClient::new(mock.clone(), store);
//! // ...
//! mock.verify(); // Ensures every queued reply was consumed
//! ```

use crate::gateway::{GatewayError, InventoryApi};
use crate::model::{
    MaterialRequirement, NewRawMaterial, Product, ProductCore, ProductUpdate,
    ProductionSuggestion, RawMaterial,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A call the mock received, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListMaterials,
    CreateMaterial(NewRawMaterial),
    ListProducts,
    CreateProduct(ProductCore),
    AddProductMaterial {
        product_id: String,
        requirement: MaterialRequirement,
    },
    UpdateProduct {
        id: String,
        update: ProductUpdate,
    },
    DeleteProduct(String),
    ListSuggestions,
}

/// A queued reply. The variant must match the next call.
#[derive(Debug)]
enum Reply {
    Materials(Result<Vec<RawMaterial>, GatewayError>),
    Material(Result<RawMaterial, GatewayError>),
    Products(Result<Vec<Product>, GatewayError>),
    Product(Result<Product, GatewayError>),
    Requirement(Result<MaterialRequirement, GatewayError>),
    Deleted(Result<(), GatewayError>),
    Suggestions(Result<Vec<ProductionSuggestion>, GatewayError>),
}

/// A mock gateway with expectation tracking.
#[derive(Default)]
pub struct MockGateway {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<ApiCall>>,
}

/// Builder that queues one reply.
pub struct ReplyBuilder<'a, T> {
    replies: &'a Mutex<VecDeque<Reply>>,
    wrap: fn(Result<T, GatewayError>) -> Reply,
}

impl<T> ReplyBuilder<'_, T> {
    /// The call succeeds with `value`.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: GatewayError) {
        self.push(Err(error));
    }

    fn push(self, result: Result<T, GatewayError>) {
        self.replies.lock().unwrap().push_back((self.wrap)(result));
    }
}

impl MockGateway {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    fn expect<T>(&self, wrap: fn(Result<T, GatewayError>) -> Reply) -> ReplyBuilder<'_, T> {
        ReplyBuilder {
            replies: &self.replies,
            wrap,
        }
    }

    pub fn expect_list_materials(&self) -> ReplyBuilder<'_, Vec<RawMaterial>> {
        self.expect(Reply::Materials)
    }

    pub fn expect_create_material(&self) -> ReplyBuilder<'_, RawMaterial> {
        self.expect(Reply::Material)
    }

    pub fn expect_list_products(&self) -> ReplyBuilder<'_, Vec<Product>> {
        self.expect(Reply::Products)
    }

    /// Queues a reply for either `create_product` or `update_product`.
    pub fn expect_product(&self) -> ReplyBuilder<'_, Product> {
        self.expect(Reply::Product)
    }

    pub fn expect_create_product(&self) -> ReplyBuilder<'_, Product> {
        self.expect_product()
    }

    pub fn expect_update_product(&self) -> ReplyBuilder<'_, Product> {
        self.expect_product()
    }

    pub fn expect_add_product_material(&self) -> ReplyBuilder<'_, MaterialRequirement> {
        self.expect(Reply::Requirement)
    }

    pub fn expect_delete_product(&self) -> ReplyBuilder<'_, ()> {
        self.expect(Reply::Deleted)
    }

    pub fn expect_list_suggestions(&self) -> ReplyBuilder<'_, Vec<ProductionSuggestion>> {
        self.expect(Reply::Suggestions)
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all queued replies were consumed.
    pub fn verify(&self) {
        let replies = self.replies.lock().unwrap();
        if !replies.is_empty() {
            panic!("Not all expectations were met. {} remaining", replies.len());
        }
    }

    fn next(&self, call: ApiCall) -> Reply {
        self.calls.lock().unwrap().push(call.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => panic!("Unexpected call with no reply queued: {:?}", call),
        }
    }
}

fn mismatch(call: &str, reply: Reply) -> ! {
    panic!("Expectation mismatch: {} received but {:?} was queued", call, reply)
}

#[async_trait]
impl InventoryApi for MockGateway {
    async fn list_materials(&self) -> Result<Vec<RawMaterial>, GatewayError> {
        match self.next(ApiCall::ListMaterials) {
            Reply::Materials(result) => result,
            other => mismatch("list_materials", other),
        }
    }

    async fn create_material(&self, material: &NewRawMaterial) -> Result<RawMaterial, GatewayError> {
        match self.next(ApiCall::CreateMaterial(material.clone())) {
            Reply::Material(result) => result,
            other => mismatch("create_material", other),
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        match self.next(ApiCall::ListProducts) {
            Reply::Products(result) => result,
            other => mismatch("list_products", other),
        }
    }

    async fn create_product(&self, core: &ProductCore) -> Result<Product, GatewayError> {
        match self.next(ApiCall::CreateProduct(core.clone())) {
            Reply::Product(result) => result,
            other => mismatch("create_product", other),
        }
    }

    async fn add_product_material(
        &self,
        product_id: &str,
        requirement: &MaterialRequirement,
    ) -> Result<MaterialRequirement, GatewayError> {
        let call = ApiCall::AddProductMaterial {
            product_id: product_id.to_string(),
            requirement: requirement.clone(),
        };
        match self.next(call) {
            Reply::Requirement(result) => result,
            other => mismatch("add_product_material", other),
        }
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, GatewayError> {
        let call = ApiCall::UpdateProduct {
            id: id.to_string(),
            update: update.clone(),
        };
        match self.next(call) {
            Reply::Product(result) => result,
            other => mismatch("update_product", other),
        }
    }

    async fn delete_product(&self, id: &str) -> Result<(), GatewayError> {
        match self.next(ApiCall::DeleteProduct(id.to_string())) {
            Reply::Deleted(result) => result,
            other => mismatch("delete_product", other),
        }
    }

    async fn list_suggestions(&self) -> Result<Vec<ProductionSuggestion>, GatewayError> {
        match self.next(ApiCall::ListSuggestions) {
            Reply::Suggestions(result) => result,
            other => mismatch("list_suggestions", other),
        }
    }
}
