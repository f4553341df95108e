//! End-to-end flows through the public `Store` API.

use std::sync::Arc;

use async_trait::async_trait;
use shopcart_client::{CatalogTransport, Store, TransportError, TransportResult};
use shopcart_core::selectors::{catalog_error, catalog_status, items_array, subtotal, total_items};
use shopcart_core::{FetchStatus, Money, Product, ProductId, RawProduct};
use tokio::sync::Notify;

/// Resolves once `release` is notified, with the given outcome.
struct HeldTransport {
    release: Arc<Notify>,
    outcome: Result<String, String>,
}

#[async_trait]
impl CatalogTransport for HeldTransport {
    async fn fetch_catalog(&self) -> TransportResult<Vec<RawProduct>> {
        self.release.notified().await;
        match &self.outcome {
            Ok(body) => Ok(serde_json::from_str(body)?),
            Err(message) => Err(TransportError::Message(message.clone())),
        }
    }
}

fn held(outcome: Result<&str, &str>) -> (HeldTransport, Arc<Notify>) {
    let release = Arc::new(Notify::new());
    let transport = HeldTransport {
        release: Arc::clone(&release),
        outcome: outcome.map(str::to_string).map_err(str::to_string),
    };
    (transport, release)
}

#[tokio::test]
async fn test_load_success_scenario() {
    let (transport, release) = held(Ok(r#"[{"id":1,"title":"X","price":5,"image":"u"}]"#));
    let store = Store::new(transport);
    assert_eq!(store.read(catalog_status), FetchStatus::Idle);

    let loader = {
        let store = store.clone();
        tokio::spawn(async move { store.load_catalog().await })
    };

    let mut rx = store.subscribe();
    rx.wait_for(|s| s.catalog.status == FetchStatus::Loading)
        .await
        .unwrap();
    assert_eq!(store.read(|s| catalog_error(s).map(str::to_string)), None);

    release.notify_one();
    assert_eq!(loader.await.unwrap(), FetchStatus::Succeeded);

    let state = store.snapshot();
    assert_eq!(
        state.catalog.entities,
        vec![Product::new(1, "X", Money::from_cents(500), "u")]
    );
    assert_eq!(state.catalog.error, None);
}

#[tokio::test]
async fn test_load_failure_keeps_previous_entities() {
    let (transport, release) = held(Err("timeout"));
    let seeded = {
        let mut state = shopcart_core::AppState::new();
        state.catalog = state
            .catalog
            .begin_load()
            .load_succeeded(vec![Product::new(9, "Old", Money::from_cents(100), "")]);
        state
    };
    let store = Store::with_state(transport, seeded);

    release.notify_one();
    assert_eq!(store.load_catalog().await, FetchStatus::Failed);

    let state = store.snapshot();
    assert_eq!(catalog_error(&state), Some("timeout"));
    assert_eq!(state.catalog.entities.len(), 1);
    assert_eq!(state.catalog.entities[0].id, ProductId::from(9));
}

#[tokio::test]
async fn test_retry_after_failure() {
    let (transport, release) = held(Err("offline"));
    let store = Store::new(transport);

    release.notify_one();
    assert_eq!(store.ensure_loaded().await, FetchStatus::Failed);

    // ensure_loaded does not retry on its own; an explicit load does.
    assert_eq!(store.ensure_loaded().await, FetchStatus::Failed);
    release.notify_one();
    assert_eq!(store.load_catalog().await, FetchStatus::Failed);
    assert_eq!(store.read(|s| s.catalog.error.clone()).as_deref(), Some("offline"));
}

#[tokio::test]
async fn test_shopping_session() {
    let (transport, release) = held(Ok(
        r#"[{"id":1,"title":"A","price":9.99,"image":"a.png"},{"id":"2","title":"B","price":0.5}]"#,
    ));
    let store = Store::new(transport);

    release.notify_one();
    store.ensure_loaded().await;
    let catalog = store.read(|s| s.catalog.entities.clone());
    assert_eq!(catalog.len(), 2);

    store.add_to_cart(catalog[0].clone());
    store.add_to_cart(catalog[0].clone());
    store.increment_qty(1);
    store.add_to_cart(catalog[1].clone());

    let state = store.snapshot();
    assert_eq!(total_items(&state), 4);
    assert_eq!(subtotal(&state).to_string(), "$30.47");
    let titles: Vec<String> = items_array(&state).iter().map(|l| l.title.clone()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    store.decrement_qty(1);
    store.decrement_qty(1);
    store.decrement_qty(1);
    let state = store.snapshot();
    assert!(!state.cart.contains(&ProductId::from(1)));
    assert_eq!(total_items(&state), 1);

    store.clear_cart();
    assert_eq!(store.read(subtotal), Money::zero());
}
