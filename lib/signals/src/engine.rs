use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::dispatch::{Dispatcher, IntentPayload};
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// The portal engine: one state tree plus one intent bus.
///
/// Everything the rendering layer does goes through three path-based
/// primitives:
/// - `get(path)` reads state (zero-copy slot handle),
/// - `emit(path, payload)` raises an intent routed to its handler(s),
/// - `subscribe(pattern)` observes state writes.
///
/// The portal application registers its handlers at startup; platforms
/// never mutate state directly.
pub struct Engine {
    store: Arc<StateStore>,
    bus: Dispatcher,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            bus: Dispatcher::new(),
        }
    }

    // ====================================================================
    // State reads
    // ====================================================================

    /// Slot at `path`, if set.
    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Downcast-and-clone convenience read.
    pub fn get_cloned<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.store.get_cloned(path)
    }

    /// Entries strictly below `prefix`, in path order.
    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        self.store.scan(prefix)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        self.store.snapshot()
    }

    // ====================================================================
    // Intents
    // ====================================================================

    /// Raise an intent and wait until every matching handler finished.
    /// Unhandled intents are dropped silently.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.bus
            .dispatch(path, Arc::new(payload), Arc::clone(&self.store))
            .await;
    }

    /// Raise an intent whose payload is already shared.
    pub async fn emit_shared(&self, path: &str, payload: IntentPayload) {
        self.bus.dispatch(path, payload, Arc::clone(&self.store)).await;
    }

    /// Register an async intent handler under a pattern (`+`/`#` wildcards
    /// as in subscriptions).
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, IntentPayload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.bus.on(pattern, handler);
    }

    /// Whether any handler would fire for this concrete intent path.
    pub fn handles(&self, path: &str) -> bool {
        self.bus.accepts(path)
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Observe state writes matching `pattern`. Fires synchronously on the
    /// writing thread, after the value is in the tree.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // ====================================================================
    // Plumbing
    // ====================================================================

    /// Shared handle to the underlying state tree, for handlers registered
    /// outside `on` (the host bridge, tests).
    pub fn store(&self) -> Arc<StateStore> {
        Arc::clone(&self.store)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
