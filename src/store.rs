//! The store that synchronizes remote entities into process-local state.
//!
//! Two collections are tracked independently: the singleton service info and
//! the list of orders. Each carries its own [`RequestState`] and moves
//! `idle → loading → {idle, error}` per refresh; a failed refresh keeps the
//! previously held value. Refreshes are not coalesced: concurrent calls each
//! run to completion and apply their result in completion order. Callers that
//! need single-flight behavior serialize at the call site.

use tokio::sync::RwLock;

use crate::client::RemoteClient;
use crate::entities::InfoEntity;
use crate::entities::OrderEntity;
use crate::entities::RequestState;

/// A value paired with the request state of its last refresh.
#[derive(Debug, Clone, Default)]
struct Tracked<T> {
    state: RequestState,
    value: T,
}

#[derive(Debug, Default)]
struct StoreState {
    info: Tracked<InfoEntity>,
    orders: Tracked<Vec<OrderEntity>>,
}

/// Owned, single-writer container for the synchronized entities.
///
/// State is mutated only through the refresh commands and read only through
/// the selectors; the lock is never held across a remote call.
pub struct SyncStore<C> {
    client: C,
    state: RwLock<StoreState>,
}

impl<C: RemoteClient> SyncStore<C> {
    /// Creates a store with zero-placeholder values and both collections idle.
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Fetches the service info snapshot and replaces the held one wholesale.
    ///
    /// On failure the previous snapshot is kept and the info state is set to
    /// `Error`; no error escapes to the caller.
    pub async fn refresh_info(&self) {
        self.state.write().await.info.state = RequestState::Loading;

        match self.client.get_info().await {
            Ok(info) => {
                let mut state = self.state.write().await;
                state.info.value = info;
                state.info.state = RequestState::Idle;
                tracing::debug!("info refreshed");
            }
            Err(err) => {
                self.state.write().await.info.state = RequestState::Error;
                tracing::warn!(%err, "info refresh failed");
            }
        }
    }

    /// Fetches one order and upserts it into the collection by `_id`.
    ///
    /// A known id is replaced in place, preserving its position; an unknown
    /// id is appended. On failure the collection is left unmodified and the
    /// orders state is set to `Error`.
    pub async fn refresh_order(&self, order_id: &str) {
        self.state.write().await.orders.state = RequestState::Loading;

        match self.client.get_order(order_id).await {
            Ok(order) => {
                let mut state = self.state.write().await;
                // Linear scan; the collection holds tens of orders at most.
                let orders = &mut state.orders.value;
                match orders.iter().position(|o| o.id == order.id) {
                    Some(index) => orders[index] = order,
                    None => orders.push(order),
                }
                state.orders.state = RequestState::Idle;
                tracing::debug!(order_id, "order refreshed");
            }
            Err(err) => {
                self.state.write().await.orders.state = RequestState::Error;
                tracing::warn!(%err, order_id, "order refresh failed");
            }
        }
    }

    /// Returns the currently held info snapshot.
    pub async fn current_info(&self) -> InfoEntity {
        self.state.read().await.info.value.clone()
    }

    /// Returns the request state of the info collection.
    pub async fn info_state(&self) -> RequestState {
        self.state.read().await.info.state
    }

    /// Returns the currently held orders, in insertion order.
    pub async fn current_orders(&self) -> Vec<OrderEntity> {
        self.state.read().await.orders.value.clone()
    }

    /// Returns the request state of the orders collection.
    pub async fn orders_state(&self) -> RequestState {
        self.state.read().await.orders.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RemoteError;
    use crate::entities::Capacity;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;

    /// A scripted remote: serves canned payloads, or fails on demand.
    struct ScriptedClient {
        info: InfoEntity,
        orders: Mutex<HashMap<String, OrderEntity>>,
        fail: AtomicBool,
    }

    impl ScriptedClient {
        fn new() -> Self {
            Self {
                info: InfoEntity {
                    capacity: Capacity {
                        local_balance: 5_000_000,
                        remote_balance: 10_000_000,
                    },
                    ..Default::default()
                },
                orders: Mutex::new(HashMap::new()),
                fail: AtomicBool::new(false),
            }
        }

        fn set_failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        fn put_order(&self, order: OrderEntity) {
            self.orders
                .lock()
                .unwrap()
                .insert(order.id.clone(), order);
        }
    }

    impl RemoteClient for &ScriptedClient {
        async fn get_info(&self) -> Result<InfoEntity, RemoteError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RemoteError::Service("scripted failure".to_string()));
            }
            Ok(self.info.clone())
        }

        async fn get_order(&self, order_id: &str) -> Result<OrderEntity, RemoteError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RemoteError::Service("scripted failure".to_string()));
            }
            self.orders
                .lock()
                .unwrap()
                .get(order_id)
                .cloned()
                .ok_or_else(|| RemoteError::Service(format!("order {order_id} not found")))
        }
    }

    fn order(id: &str, state_message: &str) -> OrderEntity {
        OrderEntity {
            id: id.to_string(),
            state_message: state_message.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn starts_idle_with_zero_placeholders() {
        let client = ScriptedClient::new();
        let store = SyncStore::new(&client);

        assert!(store.info_state().await.is_idle());
        assert!(store.orders_state().await.is_idle());
        assert_eq!(store.current_info().await, InfoEntity::default());
        assert!(store.current_orders().await.is_empty());
    }

    #[tokio::test]
    async fn refresh_info_replaces_snapshot_wholesale() {
        let client = ScriptedClient::new();
        let store = SyncStore::new(&client);

        store.refresh_info().await;

        assert!(store.info_state().await.is_idle());
        assert_eq!(store.current_info().await.capacity.local_balance, 5_000_000);
    }

    #[tokio::test]
    async fn failed_info_refresh_preserves_previous_value() {
        let client = ScriptedClient::new();
        let store = SyncStore::new(&client);

        store.refresh_info().await;
        let before = store.current_info().await;

        client.set_failing(true);
        store.refresh_info().await;

        assert!(store.info_state().await.is_error());
        assert_eq!(store.current_info().await, before);
        // The orders collection is tracked independently.
        assert!(store.orders_state().await.is_idle());
    }

    #[tokio::test]
    async fn error_state_clears_on_successful_retry() {
        let client = ScriptedClient::new();
        let store = SyncStore::new(&client);

        client.set_failing(true);
        store.refresh_info().await;
        assert!(store.info_state().await.is_error());

        client.set_failing(false);
        store.refresh_info().await;
        assert!(store.info_state().await.is_idle());
    }

    #[tokio::test]
    async fn refresh_order_appends_unknown_ids_in_call_order() {
        let client = ScriptedClient::new();
        client.put_order(order("1", "Created"));
        client.put_order(order("2", "Created"));
        client.put_order(order("3", "Created"));
        let store = SyncStore::new(&client);

        store.refresh_order("1").await;
        store.refresh_order("2").await;
        store.refresh_order("3").await;

        let ids: Vec<String> = store
            .current_orders()
            .await
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn refresh_order_replaces_known_id_in_place() {
        let client = ScriptedClient::new();
        client.put_order(order("1", "Created"));
        client.put_order(order("2", "Created"));
        let store = SyncStore::new(&client);

        store.refresh_order("1").await;
        store.refresh_order("2").await;

        client.put_order(order("1", "Paid"));
        store.refresh_order("1").await;

        let orders = store.current_orders().await;
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "1");
        assert_eq!(orders[0].state_message, "Paid");
        assert_eq!(orders[1].id, "2");
    }

    #[tokio::test]
    async fn refresh_order_is_idempotent_for_identical_payloads() {
        let client = ScriptedClient::new();
        client.put_order(order("1", "Created"));
        let store = SyncStore::new(&client);

        store.refresh_order("1").await;
        let first = store.current_orders().await;

        store.refresh_order("1").await;
        let second = store.current_orders().await;

        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[tokio::test]
    async fn failed_order_refresh_leaves_collection_untouched() {
        let client = ScriptedClient::new();
        client.put_order(order("1", "Created"));
        client.put_order(order("2", "Created"));
        let store = SyncStore::new(&client);

        store.refresh_order("1").await;
        store.refresh_order("2").await;
        let before = store.current_orders().await;

        client.set_failing(true);
        store.refresh_order("1").await;

        assert!(store.orders_state().await.is_error());
        assert_eq!(store.current_orders().await, before);
        assert!(store.info_state().await.is_idle());
    }

    #[tokio::test]
    async fn unknown_order_id_is_an_error_not_an_append() {
        let client = ScriptedClient::new();
        let store = SyncStore::new(&client);

        store.refresh_order("missing").await;

        assert!(store.orders_state().await.is_error());
        assert!(store.current_orders().await.is_empty());
    }
}
