use std::sync::Arc;
use tracing::{error, info, instrument};
use crate::cache_actor::CacheActor;
use crate::clients::CacheClient;
use crate::resolver::OrderResolver;
use crate::supplier::{ReqwestTransport, SupplierClient, Transport};
use super::Config;

/// Owns the running pieces: the cache actor and the resolver wired to it.
///
/// Responsible for startup order, dependency injection, and shutdown.
pub struct AggregatorSystem {
    pub resolver: OrderResolver,
    cache_client: CacheClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AggregatorSystem {
    /// Starts the cache actor and builds one supplier client per configured endpoint.
    #[instrument(name = "aggregator_system", skip(config))]
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        info!("Starting aggregator system");
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new(config.supplier_timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Same as [`AggregatorSystem::new`] with a caller-supplied transport.
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        let (cache_actor, cache_client) = CacheActor::new();
        let handles = vec![tokio::spawn(cache_actor.run())];

        let suppliers = config
            .suppliers
            .iter()
            .map(|(id, url)| SupplierClient::new(*id, url.clone(), transport.clone()))
            .collect();
        let resolver = OrderResolver::new(suppliers, cache_client.clone());

        info!(suppliers = config.suppliers.len(), "Aggregator system started");
        Self {
            resolver,
            cache_client,
            handles,
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down aggregator system");
        if let Err(e) = self.cache_client.shutdown().await {
            error!(error = %e, "Cache actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Aggregator system shutdown complete");
        Ok(())
    }
}
