use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::store::StateStore;
use crate::trie::PatternTrie;

/// Type-erased intent payload, shared into every matching handler.
pub type IntentPayload = Arc<dyn Any + Send + Sync>;

/// Boxed `Send` future produced by intent handlers.
pub type HandlerFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

type ErasedHandler =
    Arc<dyn Fn(String, IntentPayload, Arc<StateStore>) -> HandlerFuture + Send + Sync>;

/// Routes UI intents (navigation, form submission, page loads) to async
/// handlers by path pattern.
///
/// Handlers receive owned copies of the matched path, the payload handle,
/// and the state tree, so the returned future is `'static`. All matching
/// handlers run sequentially; an intent nobody handles is dropped silently.
pub struct Dispatcher {
    handlers: PatternTrie<ErasedHandler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: PatternTrie::new(),
        }
    }

    /// Register an async handler. The pattern language is the trie's:
    /// `"nav/goto"` exact, `"pages/+/load"` one level, `"settings/#"`
    /// whole subtree.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, IntentPayload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let erased: ErasedHandler = Arc::new(
            move |path: String, payload: IntentPayload, store: Arc<StateStore>| -> HandlerFuture {
                Box::pin(handler(path, payload, store))
            },
        );
        self.handlers.insert(pattern, erased);
    }

    /// Run every handler matching `path`, in match order, one after the
    /// other. Each handler finishes (including its state writes) before the
    /// next starts.
    pub async fn dispatch(&self, path: &str, payload: IntentPayload, store: Arc<StateStore>) {
        let matched = self.handlers.matches(path);
        if matched.is_empty() {
            tracing::debug!(path, "intent had no handler");
            return;
        }
        tracing::trace!(path, handlers = matched.len(), "dispatching intent");
        for handler in matched {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Whether a handler is registered under exactly this pattern.
    pub fn has_intent(&self, pattern: &str) -> bool {
        self.handlers.has_pattern(pattern)
    }

    /// Whether any handler would fire for this concrete path.
    pub fn accepts(&self, path: &str) -> bool {
        !self.handlers.matches(path).is_empty()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn tree() -> Arc<StateStore> {
        Arc::new(StateStore::new())
    }

    // ========================================================================
    // Dispatch basics
    // ========================================================================

    #[tokio::test]
    async fn exact_intent_runs_its_handler() {
        let bus = Dispatcher::new();
        let calls = Arc::new(AtomicU64::new(0));
        let calls2 = calls.clone();

        bus.on("nav/goto", move |_path, _payload, _store| {
            let calls = calls2.clone();
            async move {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        });

        bus.dispatch("nav/goto", Arc::new(()), tree()).await;
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn unhandled_intent_is_dropped() {
        let bus = Dispatcher::new();
        let calls = Arc::new(AtomicU64::new(0));
        let calls2 = calls.clone();

        bus.on("auth/login", move |_, _, _| {
            let calls = calls2.clone();
            async move {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        });

        bus.dispatch("auth/logout", Arc::new(()), tree()).await;
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn handler_gets_the_matched_path() {
        let bus = Dispatcher::new();
        let seen = Arc::new(Mutex::new(String::new()));
        let seen2 = seen.clone();

        bus.on("pages/+/load", move |path, _, _| {
            let seen = seen2.clone();
            async move {
                *seen.lock().unwrap() = path;
            }
        });

        bus.dispatch("pages/schools/load", Arc::new(()), tree()).await;
        assert_eq!(*seen.lock().unwrap(), "pages/schools/load");
    }

    // ========================================================================
    // Typed payloads
    // ========================================================================

    #[tokio::test]
    async fn payload_downcasts_to_the_request_type() {
        struct NavigateReq {
            url: String,
        }

        let bus = Dispatcher::new();
        let target = Arc::new(Mutex::new(String::new()));
        let target2 = target.clone();

        bus.on("nav/goto", move |_, payload, _| {
            let target = target2.clone();
            async move {
                if let Some(req) = payload.downcast_ref::<NavigateReq>() {
                    *target.lock().unwrap() = req.url.clone();
                }
            }
        });

        let req = NavigateReq { url: "/schools".to_string() };
        bus.dispatch("nav/goto", Arc::new(req), tree()).await;
        assert_eq!(*target.lock().unwrap(), "/schools");
    }

    #[tokio::test]
    async fn wrong_payload_type_downcasts_to_none() {
        let bus = Dispatcher::new();
        let misses = Arc::new(AtomicU64::new(0));
        let misses2 = misses.clone();

        bus.on("ping", move |_, payload, _| {
            let misses = misses2.clone();
            async move {
                if payload.downcast_ref::<String>().is_none() {
                    misses.fetch_add(1, Ordering::Relaxed);
                }
            }
        });

        bus.dispatch("ping", Arc::new(3u8), tree()).await;
        assert_eq!(misses.load(Ordering::Relaxed), 1);
    }

    // ========================================================================
    // State interaction
    // ========================================================================

    #[tokio::test]
    async fn handler_writes_are_visible_after_dispatch() {
        let bus = Dispatcher::new();
        bus.on("auth/login", |_, _, store: Arc<StateStore>| async move {
            store.set("session/user", "admin@eduva.vn".to_string());
        });

        let store = tree();
        bus.dispatch("auth/login", Arc::new(()), Arc::clone(&store)).await;

        assert_eq!(
            store.get_cloned::<String>("session/user").unwrap(),
            "admin@eduva.vn"
        );
    }

    #[tokio::test]
    async fn handlers_run_sequentially_in_match_order() {
        let bus = Dispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let (o1, o2) = (order.clone(), order.clone());

        bus.on("lessons/generate", move |_, _, _| {
            let o = o1.clone();
            async move {
                o.lock().unwrap().push("first");
            }
        });
        bus.on("lessons/generate", move |_, _, _| {
            let o = o2.clone();
            async move {
                o.lock().unwrap().push("second");
            }
        });

        bus.dispatch("lessons/generate", Arc::new(()), tree()).await;
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn wildcard_handler_sees_every_page_load() {
        let bus = Dispatcher::new();
        let calls = Arc::new(AtomicU64::new(0));
        let calls2 = calls.clone();

        bus.on("pages/#", move |_, _, _| {
            let calls = calls2.clone();
            async move {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        });

        let store = tree();
        bus.dispatch("pages/schools/load", Arc::new(()), Arc::clone(&store)).await;
        bus.dispatch("pages/invoices/load", Arc::new(()), Arc::clone(&store)).await;
        bus.dispatch("auth/login", Arc::new(()), store).await;

        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    // ========================================================================
    // has_intent / accepts
    // ========================================================================

    #[test]
    fn has_intent_is_pattern_exact() {
        let bus = Dispatcher::new();
        bus.on("pages/+/load", |_, _, _| async {});

        assert!(bus.has_intent("pages/+/load"));
        assert!(!bus.has_intent("pages/schools/load"));
    }

    #[test]
    fn accepts_expands_wildcards() {
        let bus = Dispatcher::new();
        bus.on("pages/+/load", |_, _, _| async {});

        assert!(bus.accepts("pages/schools/load"));
        assert!(bus.accepts("pages/teachers/load"));
        assert!(!bus.accepts("layout/heading"));
    }

    #[test]
    fn default_dispatcher_accepts_nothing() {
        let bus = Dispatcher::default();
        assert!(!bus.accepts("anything"));
    }
}
