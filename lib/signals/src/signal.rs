use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::value::SubscriptionId;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A versioned single-value cell: the layout stores (heading, breadcrumb
/// trail, document title, theme) are each one of these.
///
/// Convention: exactly one owner writes a given signal (the navigation
/// handler for layout metadata, the theme handler for the theme); everyone
/// else holds a cloned handle and reads. A write is pushed to every
/// subscriber before `set` returns, so a reader triggered by the write
/// never observes the previous value.
pub struct Signal<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    value: RwLock<T>,
    version: AtomicU64,
    subscribers: RwLock<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: AtomicU64,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                version: AtomicU64::new(0),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Clone the current value out.
    pub fn get(&self) -> T {
        self.inner.value.read().unwrap().clone()
    }

    /// Run `f` over a borrow of the current value, without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.read().unwrap())
    }

    /// Replace the value, bump the version, and notify subscribers
    /// synchronously. Last writer wins; no history is kept.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.write().unwrap();
            *guard = value;
        }
        self.inner.version.fetch_add(1, Ordering::SeqCst);
        self.notify();
    }

    /// Mutate the value in place, then bump and notify as `set` does.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut guard = self.inner.value.write().unwrap();
            f(&mut guard);
        }
        self.inner.version.fetch_add(1, Ordering::SeqCst);
        self.notify();
    }

    /// Monotonic write counter. Computed derivations key their memo on this.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::SeqCst)
    }

    /// Register a callback invoked with the new value on every write.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        self.inner
            .subscribers
            .write()
            .unwrap()
            .push((id, Arc::new(f)));
        id
    }

    /// Detach a subscriber. Returns whether it was present.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.inner.subscribers.write().unwrap();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() < before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.read().unwrap().len()
    }

    // Callbacks run outside both locks: the value is cloned once and the
    // subscriber list is snapshotted, so a callback may freely call back
    // into `get` or `subscribe`.
    fn notify(&self) {
        let current = self.get();
        let subs: Vec<Callback<T>> = self
            .inner
            .subscribers
            .read()
            .unwrap()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in subs {
            cb(&current);
        }
    }
}

type VersionProbe = Arc<dyn Fn() -> u64 + Send + Sync>;

/// A lazy derivation over one or more signals, re-evaluated on read only
/// when a tracked dependency has been written since the memoized run.
///
/// The show-date flag is the canonical instance: derived from the breadcrumb
/// signal, recomputed only after a navigation actually rewrote the trail.
pub struct Computed<T> {
    inner: Arc<ComputedInner<T>>,
}

struct ComputedInner<T> {
    probes: RwLock<Vec<VersionProbe>>,
    eval: Box<dyn Fn() -> T + Send + Sync>,
    memo: Mutex<Option<(Vec<u64>, T)>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Computed<T> {
    /// Derive from a single signal. The common case; tracking is wired
    /// automatically.
    pub fn from_signal<U: Clone + Send + Sync + 'static>(
        source: &Signal<U>,
        f: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Send + Sync + 'static,
    {
        let probe_src = source.clone();
        let eval_src = source.clone();
        Self {
            inner: Arc::new(ComputedInner {
                probes: RwLock::new(vec![Arc::new(move || probe_src.version())]),
                eval: Box::new(move || eval_src.read(|v| f(v))),
                memo: Mutex::new(None),
            }),
        }
    }

    /// Derive from an arbitrary closure. Every signal the closure reads must
    /// be registered with [`Computed::track`], or the memo never invalidates.
    pub fn new(eval: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(ComputedInner {
                probes: RwLock::new(Vec::new()),
                eval: Box::new(eval),
                memo: Mutex::new(None),
            }),
        }
    }

    /// Track an additional dependency. Returns `self` so construction chains.
    pub fn track<U: Clone + Send + Sync + 'static>(self, source: &Signal<U>) -> Self {
        let probe_src = source.clone();
        self.inner
            .probes
            .write()
            .unwrap()
            .push(Arc::new(move || probe_src.version()));
        self
    }

    /// Current value: memoized when no tracked dependency changed, otherwise
    /// re-evaluated and re-memoized.
    pub fn get(&self) -> T {
        let versions: Vec<u64> = self
            .inner
            .probes
            .read()
            .unwrap()
            .iter()
            .map(|p| p())
            .collect();
        let mut memo = self.inner.memo.lock().unwrap();
        if let Some((seen, value)) = memo.as_ref() {
            if *seen == versions {
                return value.clone();
            }
        }
        let value = (self.inner.eval)();
        *memo = Some((versions, value.clone()));
        value
    }
}
