//! # Mock Framework
//!
//! Utilities for testing resolvers in isolation.
//!
//! [`StubTransport`] stands in for the network: canned bodies, failures and
//! delays per URL. [`create_mock_cache_client`] hands out a [`CacheClient`]
//! whose mailbox the test reads directly, so cache traffic can be asserted with
//! [`expect_put`] and [`expect_get_all`] without running a `CacheActor`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use crate::cache_actor::CacheRequest;
use crate::clients::CacheClient;
use crate::domain::{Catalog, SupplierId};
use crate::supplier::{SupplierClient, SupplierError, Transport};

pub const FRUIT_URL: &str = "http://suppliers.test/fruits";
pub const VEGETABLE_URL: &str = "http://suppliers.test/vegetables";
pub const GRAIN_URL: &str = "http://suppliers.test/grains";

#[derive(Clone)]
struct Route {
    result: Result<Vec<u8>, SupplierError>,
    delay: Option<Duration>,
}

/// In-memory [`Transport`]. URLs without a route fail with a transport error.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, Route>>,
    hits: Mutex<HashMap<String, usize>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.set_body(url, body);
        self
    }

    pub fn with_failure(self, url: &str, reason: &str) -> Self {
        self.set_route(url, Err(SupplierError::Transport(reason.to_string())));
        self
    }

    /// Delays every response for `url`, keeping whatever route it has.
    pub fn with_delay(self, url: &str, delay: Duration) -> Self {
        if let Some(route) = self.routes.lock().unwrap().get_mut(url) {
            route.delay = Some(delay);
        }
        self
    }

    /// Replaces the body served for `url`, e.g. to simulate new upstream stock.
    pub fn set_body(&self, url: &str, body: &str) {
        self.set_route(url, Ok(body.as_bytes().to_vec()));
    }

    pub fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    fn set_route(&self, url: &str, result: Result<Vec<u8>, SupplierError>) {
        let mut routes = self.routes.lock().unwrap();
        let delay = routes.get(url).and_then(|r| r.delay);
        routes.insert(url.to_string(), Route { result, delay });
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SupplierError> {
        *self.hits.lock().unwrap().entry(url.to_string()).or_default() += 1;
        let route = self.routes.lock().unwrap().get(url).cloned();
        match route {
            Some(route) => {
                if let Some(delay) = route.delay {
                    tokio::time::sleep(delay).await;
                }
                route.result
            }
            None => Err(SupplierError::Transport(format!("no route for {url}"))),
        }
    }
}

/// The three suppliers in priority order, all served by `transport`.
pub fn stub_suppliers(transport: Arc<StubTransport>) -> Vec<SupplierClient> {
    vec![
        SupplierClient::new(SupplierId::Fruit, FRUIT_URL, transport.clone()),
        SupplierClient::new(SupplierId::Vegetable, VEGETABLE_URL, transport.clone()),
        SupplierClient::new(SupplierId::Grain, GRAIN_URL, transport),
    ]
}

/// Fruit-schema JSON body for `(id, name, price, quantity)` rows.
pub fn fruit_body(rows: &[(&str, &str, &str, u32)]) -> String {
    body_with_keys("id", "name", rows)
}

pub fn vegetable_body(rows: &[(&str, &str, &str, u32)]) -> String {
    body_with_keys("productId", "productName", rows)
}

pub fn grain_body(rows: &[(&str, &str, &str, u32)]) -> String {
    body_with_keys("itemId", "itemName", rows)
}

fn body_with_keys(id_key: &str, name_key: &str, rows: &[(&str, &str, &str, u32)]) -> String {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .map(|(id, name, price, quantity)| {
            serde_json::json!({ id_key: id, name_key: name, "price": price, "quantity": quantity })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}

/// Creates a cache client and the receiving end of its mailbox.
///
/// Nothing answers requests unless the test does, which makes it possible to
/// assert exactly which writes a resolver issued.
pub fn create_mock_cache_client() -> (CacheClient, mpsc::UnboundedReceiver<CacheRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (CacheClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Put
pub async fn expect_put(receiver: &mut mpsc::UnboundedReceiver<CacheRequest>) -> Option<(SupplierId, Catalog)> {
    match receiver.recv().await {
        Some(CacheRequest::Put { supplier, catalog }) => Some((supplier, catalog)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetAll
pub async fn expect_get_all(
    receiver: &mut mpsc::UnboundedReceiver<CacheRequest>,
) -> Option<oneshot::Sender<HashMap<SupplierId, Catalog>>> {
    match receiver.recv().await {
        Some(CacheRequest::GetAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_cache_client() {
        let (client, mut receiver) = create_mock_cache_client();

        let read = tokio::spawn({
            let client = client.clone();
            async move { client.get_all().await }
        });
        let responder = expect_get_all(&mut receiver).await.expect("Expected GetAll request");
        responder.send(HashMap::new()).unwrap();
        assert_eq!(read.await.unwrap(), Ok(HashMap::new()));

        client.put(SupplierId::Fruit, Vec::new());
        let (supplier, catalog) = expect_put(&mut receiver).await.expect("Expected Put request");
        assert_eq!(supplier, SupplierId::Fruit);
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_stub_transport_counts_hits_and_fails_unknown_urls() {
        let transport = StubTransport::new().with_body(FRUIT_URL, "[]");
        assert_eq!(transport.fetch_bytes(FRUIT_URL).await.unwrap(), b"[]".to_vec());
        assert!(transport.fetch_bytes(GRAIN_URL).await.is_err());
        assert_eq!(transport.hits(FRUIT_URL), 1);
        assert_eq!(transport.hits(GRAIN_URL), 1);
    }
}
