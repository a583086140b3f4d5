//! The keyed store contract and its snapshot type.
//!
//! The store is a hierarchical JSON tree addressed by slash-separated
//! paths (`users/{uid}/clicks`). Reads come back as a [`Snapshot`]: the
//! child key plus the value at that path, with accessors for reaching
//! into child fields the way the provider's data snapshot does.

use serde_json::Value;

use crate::StoreError;

/// A hierarchical remote key/value store.
///
/// Same bounds story as [`IdentityProvider`](crate::IdentityProvider):
/// `Send + Sync + 'static`, every method a single remote call resolving
/// to a typed result.
pub trait KeyedStore: Send + Sync + 'static {
    /// Reads the value at `path`.
    ///
    /// # Returns
    /// - `Ok(Some(snapshot))` — a value exists at the path
    /// - `Ok(None)` — nothing stored there (not an error; the score
    ///   synchronizer heals this case)
    /// - `Err(StoreError)` — the store could not answer
    fn get(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Snapshot>, StoreError>> + Send;

    /// Writes `value` at `path`, creating intermediate nodes as needed.
    fn set(
        &self,
        path: &str,
        value: Value,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Returns the children of the node at `path`, ordered ascending by
    /// the named child field (the store's native ordering).
    ///
    /// Ties are stable: children with equal field values keep the store's
    /// own key order. Children missing the field sort first, as zero.
    fn query_ordered_by_child(
        &self,
        path: &str,
        field: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Snapshot>, StoreError>> + Send;
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A value read from the store, paired with the key it lives under.
///
/// For a `get("users/u-1")` the key is `"u-1"`; for an ordered query each
/// snapshot is one child of the queried node, keyed by its child name.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    key: String,
    value: Value,
}

impl Snapshot {
    /// Creates a snapshot from a key and the value stored under it.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The last path segment this value lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Looks up a direct child field, if the value is an object that has it.
    pub fn child(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }

    /// Reads a direct child field as a non-negative integer.
    pub fn child_u64(&self, name: &str) -> Option<u64> {
        self.child(name).and_then(Value::as_u64)
    }

    /// Reads a direct child field as a string.
    pub fn child_str(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Value::as_str)
    }

    /// Consumes the snapshot, returning the value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_snapshot_child_accessors() {
        let snap = Snapshot::new(
            "u-1",
            json!({ "username": "Kim", "clicks": 7 }),
        );
        assert_eq!(snap.key(), "u-1");
        assert_eq!(snap.child_str("username"), Some("Kim"));
        assert_eq!(snap.child_u64("clicks"), Some(7));
    }

    #[test]
    fn test_snapshot_missing_child_is_none() {
        let snap = Snapshot::new("u-1", json!({ "username": "Kim" }));
        assert_eq!(snap.child("clicks"), None);
        assert_eq!(snap.child_u64("clicks"), None);
    }

    #[test]
    fn test_snapshot_child_on_non_object_is_none() {
        // A leaf value (e.g. the clicks counter itself) has no children.
        let snap = Snapshot::new("clicks", json!(5));
        assert_eq!(snap.child("anything"), None);
    }

    #[test]
    fn test_snapshot_child_u64_rejects_wrong_type() {
        let snap = Snapshot::new("u-1", json!({ "clicks": "nine" }));
        assert_eq!(snap.child_u64("clicks"), None);
    }
}
