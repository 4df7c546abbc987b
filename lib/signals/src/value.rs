use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted slot in the portal state tree.
///
/// Every page state (school list, lesson generation job, session, ...) is
/// stored behind one of these. Wrapping `Arc<dyn Any + Send + Sync>` keeps
/// reads zero-copy: a clone is an atomic increment, and every reader that
/// downcasts sees the same allocation.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
}

impl StateValue {
    /// Wrap any `Send + Sync` value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Wrap an already-shared value without re-boxing it.
    pub fn from_arc(inner: Arc<dyn Any + Send + Sync>) -> Self {
        Self { inner }
    }

    /// Borrow the stored value as `T`, or `None` when the type differs.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Downcast and clone the stored value.
    pub fn to_owned<T: Any + Clone>(&self) -> Option<T> {
        self.inner.downcast_ref::<T>().cloned()
    }

    /// Whether the stored value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// `TypeId` of the stored value.
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Strong count of the underlying allocation. Test hook for verifying
    /// that clones stay zero-copy.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type_id", &(*self.inner).type_id())
            .finish()
    }
}

/// Handle returned by `subscribe` calls on signals and the state tree.
///
/// Pass it back to the issuing object's `unsubscribe` to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct SchoolRow {
        id: u64,
        name: String,
    }

    #[test]
    fn downcast_matching_type() {
        let v = StateValue::new(7u32);
        assert_eq!(v.downcast_ref::<u32>(), Some(&7u32));
    }

    #[test]
    fn downcast_mismatched_type_is_none() {
        let v = StateValue::new(7u32);
        assert_eq!(v.downcast_ref::<i32>(), None);
        assert_eq!(v.downcast_ref::<String>(), None);
    }

    #[test]
    fn downcast_domain_struct() {
        let v = StateValue::new(SchoolRow {
            id: 12,
            name: "THPT Chu Văn An".to_string(),
        });
        let row = v.downcast_ref::<SchoolRow>().unwrap();
        assert_eq!(row.id, 12);
        assert_eq!(row.name, "THPT Chu Văn An");
    }

    #[test]
    fn downcast_vec_of_rows() {
        let rows = vec![
            SchoolRow { id: 1, name: "A".into() },
            SchoolRow { id: 2, name: "B".into() },
        ];
        let v = StateValue::new(rows.clone());
        assert_eq!(v.downcast_ref::<Vec<SchoolRow>>(), Some(&rows));
    }

    #[test]
    fn to_owned_clones_out() {
        let v = StateValue::new(SchoolRow { id: 3, name: "C".into() });
        let owned: SchoolRow = v.to_owned().unwrap();
        assert_eq!(owned.id, 3);
        assert_eq!(v.to_owned::<String>(), None);
    }

    #[test]
    fn is_and_type_id() {
        let v = StateValue::new(true);
        assert!(v.is::<bool>());
        assert!(!v.is::<u8>());
        assert_eq!(v.type_id(), TypeId::of::<bool>());
    }

    #[test]
    fn clone_shares_the_allocation() {
        let v1 = StateValue::new(vec![0u8; 64 * 1024]);
        assert_eq!(v1.ref_count(), 1);

        let v2 = v1.clone();
        assert_eq!(v1.ref_count(), 2);

        let p1 = v1.downcast_ref::<Vec<u8>>().unwrap().as_ptr();
        let p2 = v2.downcast_ref::<Vec<u8>>().unwrap().as_ptr();
        assert_eq!(p1, p2);

        drop(v2);
        assert_eq!(v1.ref_count(), 1);
    }

    #[test]
    fn from_arc_does_not_rebox() {
        let shared: Arc<dyn std::any::Any + Send + Sync> = Arc::new(99u64);
        let v = StateValue::from_arc(shared);
        assert_eq!(v.downcast_ref::<u64>(), Some(&99));
    }

    #[test]
    fn option_values_round_trip() {
        let some = StateValue::new(Some("x".to_string()));
        assert_eq!(
            some.downcast_ref::<Option<String>>(),
            Some(&Some("x".to_string()))
        );
        let none = StateValue::new(None::<String>);
        assert_eq!(none.downcast_ref::<Option<String>>(), Some(&None));
    }

    #[test]
    fn debug_output_names_the_wrapper() {
        let v = StateValue::new(1u8);
        let s = format!("{:?}", v);
        assert!(s.contains("StateValue"));
    }

    #[test]
    fn subscription_id_is_copy_eq_hash() {
        use std::collections::HashSet;

        let a = SubscriptionId(5);
        let b = a;
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(SubscriptionId(1));
        set.insert(SubscriptionId(2));
        set.insert(SubscriptionId(1));
        assert_eq!(set.len(), 2);
    }

    // Compile-time: state values cross handler task boundaries.
    fn _assert_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<StateValue>();
        assert_sync::<StateValue>();
    }
}
