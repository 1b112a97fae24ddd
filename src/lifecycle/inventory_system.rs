use crate::clients::InventoryClient;
use crate::gateway::{GatewayConfig, HttpGateway, InventoryApi};
use crate::store::{self, LocalIdGenerator};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Wires the gateway, the store actor and the client together.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(&GatewayConfig::from_env())?;
///
/// let materials = system.client.fetch_materials().await?;
///
/// // Stops the store once every client clone is dropped
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Handle for presentation. Clone freely.
    pub client: InventoryClient,

    /// The store actor's task (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Starts a system talking to the API described by `config`.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let gateway = HttpGateway::new(config)?;
        info!(base_url = gateway.base_url(), timeout_secs = config.timeout.as_secs(), "Gateway ready");
        Ok(Self::with_api(Arc::new(gateway)))
    }

    /// Starts a system on top of any [`InventoryApi`], e.g. a mock.
    pub fn with_api(api: Arc<dyn InventoryApi>) -> Self {
        let (actor, store) = store::new();
        let handle = tokio::spawn(actor.run(LocalIdGenerator::new()));

        Self {
            client: InventoryClient::new(api, store),
            handle,
        }
    }

    /// Drops this system's client and waits for the store actor to finish.
    ///
    /// The actor exits once the last clone of the client is gone, so any clone
    /// still held elsewhere keeps this waiting.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down inventory system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Store task failed");
            return Err(e);
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}
