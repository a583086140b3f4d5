//! In-memory backends for the remote contracts.
//!
//! These stand in for the hosted provider in the demo and in happy-path
//! tests: [`MemoryIdentity`] is a HashMap account registry that enforces
//! the full provider error taxonomy, and [`MemoryStore`] is a JSON tree
//! addressed by the same slash-separated paths the real store uses.
//!
//! Neither is meant for production — there is no persistence and no real
//! credential hashing. They exist so the whole client can run, and be
//! exercised end to end, without a network.

use std::collections::HashMap;
use std::sync::Mutex;

use clickrank_protocol::{Identity, UserId};
use rand::Rng;
use serde_json::{Map, Value};

use crate::{AuthError, IdentityProvider, KeyedStore, Snapshot, StoreError};

// ---------------------------------------------------------------------------
// MemoryIdentity
// ---------------------------------------------------------------------------

/// One registered account.
struct Account {
    user_id: UserId,
    password: String,
    display_name: String,
}

/// An in-memory [`IdentityProvider`].
///
/// Accounts are keyed by email. The provider-side validation mirrors the
/// hosted service's taxonomy: empty fields, malformed emails, unknown
/// accounts, wrong passwords, weak passwords, and duplicate emails each
/// come back as their own [`AuthError`] code.
pub struct MemoryIdentity {
    accounts: Mutex<HashMap<String, Account>>,
}

impl MemoryIdentity {
    /// Creates a provider with no accounts.
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Registers an account directly, bypassing validation.
    ///
    /// Demo and test convenience: sets up a known account without going
    /// through the full registration flow. Returns the minted user id.
    pub fn seed_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> UserId {
        let user_id = generate_user_id();
        let mut accounts = self.accounts.lock().expect("lock poisoned");
        accounts.insert(
            email.to_string(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
                display_name: display_name.to_string(),
            },
        );
        user_id
    }
}

impl Default for MemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for MemoryIdentity {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }

        let accounts = self.accounts.lock().expect("lock poisoned");
        let account =
            accounts.get(email).ok_or(AuthError::UserNotFound)?;
        if account.password != password {
            return Err(AuthError::WrongPassword);
        }

        tracing::info!(user_id = %account.user_id, "sign-in accepted");
        Ok(Identity {
            user_id: account.user_id.clone(),
            display_name: account.display_name.clone(),
            email: email.to_string(),
        })
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        if password.len() < 6 {
            return Err(AuthError::WeakPassword);
        }

        let mut accounts = self.accounts.lock().expect("lock poisoned");
        if accounts.contains_key(email) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        // New accounts start with the provider-default empty display name;
        // attaching the chosen name is the caller's dependent second call.
        let user_id = generate_user_id();
        accounts.insert(
            email.to_string(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
                display_name: String::new(),
            },
        );

        tracing::info!(%user_id, "account created");
        Ok(Identity {
            user_id,
            display_name: String::new(),
            email: email.to_string(),
        })
    }

    async fn update_display_name(
        &self,
        user_id: &UserId,
        display_name: &str,
    ) -> Result<(), AuthError> {
        let mut accounts = self.accounts.lock().expect("lock poisoned");
        let account = accounts
            .values_mut()
            .find(|a| a.user_id == *user_id)
            .ok_or(AuthError::UserNotFound)?;
        account.display_name = display_name.to_string();
        tracing::info!(%user_id, display_name, "display name updated");
        Ok(())
    }

    async fn sign_out(&self, user_id: &UserId) {
        // Nothing to invalidate in the memory backend; acknowledged only.
        tracing::debug!(%user_id, "sign-out acknowledged");
    }
}

/// Generates a random 32-character hex user id (128 bits of entropy).
///
/// Opaque to the core, unique enough to never collide in practice.
fn generate_user_id() -> UserId {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    UserId::new(
        bytes
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<String>(),
    )
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// An in-memory [`KeyedStore`]: one JSON object tree behind a mutex.
///
/// `serde_json`'s map keeps children in key order, which is this store's
/// native ordering; the ordered query's stable sort preserves it among
/// ties.
pub struct MemoryStore {
    root: Mutex<Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            root: Mutex::new(Value::Object(Map::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a path into its segments, rejecting empty paths and segments.
fn split_path(path: &str) -> Result<Vec<&str>, StoreError> {
    if path.is_empty() {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

/// Walks `node` down the given segments. `None` if any hop is missing.
fn descend<'v>(mut node: &'v Value, segments: &[&str]) -> Option<&'v Value> {
    for segment in segments {
        node = node.get(segment)?;
    }
    Some(node)
}

impl KeyedStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<Snapshot>, StoreError> {
        let segments = split_path(path)?;
        let root = self.root.lock().expect("lock poisoned");

        let Some(node) = descend(&root, &segments) else {
            return Ok(None);
        };
        if node.is_null() {
            return Ok(None);
        }

        // split_path guarantees at least one segment.
        let key = segments.last().expect("non-empty path");
        Ok(Some(Snapshot::new(*key, node.clone())))
    }

    async fn set(&self, path: &str, value: Value) -> Result<(), StoreError> {
        let segments = split_path(path)?;
        let mut root = self.root.lock().expect("lock poisoned");

        let (last, parents) = segments.split_last().expect("non-empty path");
        let mut node = &mut *root;
        for segment in parents {
            // Intermediate hops must be objects. A leaf in the way is
            // replaced, matching the store's overwrite-on-deepen behavior.
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            node = node
                .as_object_mut()
                .expect("just ensured object")
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        node.as_object_mut()
            .expect("just ensured object")
            .insert((*last).to_string(), value);

        tracing::debug!(path, "store write");
        Ok(())
    }

    async fn query_ordered_by_child(
        &self,
        path: &str,
        field: &str,
    ) -> Result<Vec<Snapshot>, StoreError> {
        let segments = split_path(path)?;
        let root = self.root.lock().expect("lock poisoned");

        let Some(node) = descend(&root, &segments) else {
            return Ok(Vec::new());
        };
        let Some(children) = node.as_object() else {
            return Ok(Vec::new());
        };

        let mut snapshots: Vec<Snapshot> = children
            .iter()
            .map(|(key, value)| Snapshot::new(key.clone(), value.clone()))
            .collect();
        // Stable sort: children with equal (or missing, read as 0) field
        // values keep the map's key order.
        snapshots.sort_by_key(|s| s.child_u64(field).unwrap_or(0));
        Ok(snapshots)
    }
}
