use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::trie::PatternTrie;
use crate::value::{StateValue, SubscriptionId};

/// Callback invoked with `(path, new value)` on every matching write.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// The portal state tree: every page view model, the session, and the
/// current route live here under a `/`-separated path.
///
/// - `set(path, value)` stores and synchronously notifies matching
///   subscribers; the value is in the tree before any callback runs.
/// - `get(path)` hands back the `Arc`-backed slot, no data copy.
/// - `scan(prefix)` walks children in path order (`BTreeMap` keys).
/// - `subscribe(pattern, f)` / `unsubscribe(id)` use the trie pattern
///   language (`+` one segment, `#` remainder).
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    subscribers: PatternTrie<Subscriber>,
    /// id -> pattern, so detaching needs only the id.
    registry: RwLock<HashMap<SubscriptionId, String>>,
    next_id: AtomicU64,
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            subscribers: PatternTrie::new(),
            registry: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store a typed value, wrapping it into a [`StateValue`] slot.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Store a pre-wrapped slot and notify every matching subscriber.
    ///
    /// The write lock is released before callbacks run, so a handler may
    /// read or even write the tree again.
    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        tracing::trace!(path, "state write");
        for sub in self.subscribers.matches(path) {
            (sub.handler)(path, &value);
        }
    }

    /// Current slot at `path`, if any. Cheap `Arc` clone.
    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.values.read().unwrap().get(path).cloned()
    }

    /// Downcast-and-clone convenience over [`StateStore::get`].
    pub fn get_cloned<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.to_owned::<T>())
    }

    /// Drop the value at `path`. Subscribers are not notified; removal is
    /// bookkeeping (logout clearing the session), not a state change.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        self.values.write().unwrap().remove(path)
    }

    /// All entries strictly below `prefix`, in path order. The entry at
    /// `prefix` itself is not included.
    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap();
        let below = format!("{}/", prefix);
        values
            .range(below.clone()..)
            .take_while(|(k, _)| k.starts_with(&below))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.values.read().unwrap().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a change handler for every path matching `pattern`.
    /// Fires synchronously from inside `set` / `set_value`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.insert(
            pattern,
            Subscriber {
                id,
                handler: Arc::new(handler),
            },
        );
        self.registry
            .write()
            .unwrap()
            .insert(id, pattern.to_string());
        id
    }

    /// Detach a subscriber by id. Returns whether it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let pattern = self.registry.write().unwrap().remove(&id);
        match pattern {
            Some(p) => self.subscribers.remove(&p, |s| s.id == id),
            None => false,
        }
    }

    /// Full ordered copy of the tree. Slot clones only, no data copies.
    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap();
        values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn paths(&self) -> Vec<String> {
        self.values.read().unwrap().keys().cloned().collect()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
