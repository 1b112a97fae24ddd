//! HTTP client for the inventory API

use crate::gateway::error::extract_server_message;
use crate::gateway::{GatewayConfig, GatewayError, InventoryApi};
use crate::model::{
    MaterialRequirement, NewRawMaterial, Product, ProductCore, ProductUpdate,
    ProductionSuggestion, RawMaterial,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

const MATERIALS_PATH: &str = "/raw-materials";
const PRODUCTS_PATH: &str = "/products";
const SUGGESTIONS_PATH: &str = "/production/suggestions";

/// `reqwest`-backed implementation of [`InventoryApi`].
///
/// Every request carries the configured timeout and JSON content headers. Every
/// failure is logged at `error` with the method, path and status or transport
/// reason before it is returned.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpGateway {
    /// Create a new gateway from configuration
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Sends the request and turns any non-success status into [`GatewayError::Http`].
    async fn execute(&self, method: &Method, path: &str, request: RequestBuilder) -> Result<Response, GatewayError> {
        debug!(%method, path, "Sending request");
        let response = request
            .send()
            .await
            .map_err(|e| self.report(method, path, GatewayError::from_transport(&e, self.timeout)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The body is only used to find a server message; failing to read it is not fatal.
        let body = response.text().await.unwrap_or_default();
        Err(self.report(
            method,
            path,
            GatewayError::Http {
                status: status.as_u16(),
                message: extract_server_message(&body),
            },
        ))
    }

    async fn call<T: DeserializeOwned>(&self, method: Method, path: &str, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = self.execute(&method, path, request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.report(&method, path, GatewayError::from_transport(&e, self.timeout)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| self.report(&method, path, GatewayError::Decode(e.to_string())))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.call(Method::GET, path, self.request(Method::GET, path)).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<T, GatewayError> {
        let request = self.request(method.clone(), path).json(body);
        self.call(method, path, request).await
    }

    fn report(&self, method: &Method, path: &str, err: GatewayError) -> GatewayError {
        match &err {
            GatewayError::Timeout(after) => {
                error!(%method, path, timeout_secs = after.as_secs(), "Request timed out; the server may be cold-starting")
            }
            GatewayError::NetworkUnreachable(reason) => {
                error!(%method, path, reason = %reason, "Network error; server unreachable")
            }
            GatewayError::Http { status, message } => {
                error!(%method, path, status, message = message.as_deref().unwrap_or(""), "HTTP error")
            }
            GatewayError::Decode(reason) => {
                error!(%method, path, reason = %reason, "Response did not match the API contract")
            }
        }
        err
    }
}

#[async_trait]
impl InventoryApi for HttpGateway {
    async fn list_materials(&self) -> Result<Vec<RawMaterial>, GatewayError> {
        self.get(MATERIALS_PATH).await
    }

    async fn create_material(&self, material: &NewRawMaterial) -> Result<RawMaterial, GatewayError> {
        self.send_json(Method::POST, MATERIALS_PATH, material).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.get(PRODUCTS_PATH).await
    }

    async fn create_product(&self, core: &ProductCore) -> Result<Product, GatewayError> {
        self.send_json(Method::POST, PRODUCTS_PATH, core).await
    }

    async fn add_product_material(
        &self,
        product_id: &str,
        requirement: &MaterialRequirement,
    ) -> Result<MaterialRequirement, GatewayError> {
        let path = format!("{}/{}{}", PRODUCTS_PATH, product_id, MATERIALS_PATH);
        self.send_json(Method::POST, &path, requirement).await
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, GatewayError> {
        let path = format!("{}/{}", PRODUCTS_PATH, id);
        self.send_json(Method::PUT, &path, update).await
    }

    async fn delete_product(&self, id: &str) -> Result<(), GatewayError> {
        let path = format!("{}/{}", PRODUCTS_PATH, id);
        self.execute(&Method::DELETE, &path, self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }

    async fn list_suggestions(&self) -> Result<Vec<ProductionSuggestion>, GatewayError> {
        self.get(SUGGESTIONS_PATH).await
    }
}
