//! Core data model types.
//!
//! These structures travel between the session controller, the score
//! synchronizer, the leaderboard aggregator, and the client facade.
//! Only the store shapes ([`ScoreRecord`], [`LeaderboardEntry`]) derive
//! serde traits; form payloads are transient and never serialized.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ErrorKind;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique, opaque identifier for a player account.
///
/// The identity provider mints these; the core never inspects the contents.
/// A newtype wrapper keeps a `UserId` from being confused with any other
/// string (an email, a display name) in function signatures, and makes it
/// usable as a map key.
///
/// `#[serde(transparent)]` serializes this as the bare string, so a
/// `UserId("u-1")` is `"u-1"` on the wire, not `{ "0": "u-1" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a `UserId` from a provider-issued string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated player.
///
/// Owned exclusively by the session controller once established and cleared
/// entirely on sign-out; its lifetime is one authenticated session. The
/// `display_name` is whatever the provider holds for the account, which is
/// empty for a freshly created account until the profile update lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-issued account id.
    pub user_id: UserId,
    /// The player's public name, shown on the leaderboard.
    pub display_name: String,
    /// The email the account was created with.
    pub email: String,
}

// ---------------------------------------------------------------------------
// Form payloads
// ---------------------------------------------------------------------------

/// What the player typed into the login form.
///
/// Transient: lives only for the duration of one sign-in call and is never
/// persisted. Field-level validation (missing email, wrong password) is the
/// identity provider's job; the provider's error taxonomy is authoritative.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `Debug` is implemented by hand so a stray `{:?}` in a log line can never
/// leak the password.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the player typed into the registration form.
///
/// Unlike [`Credentials`], this carries two locally-checkable invariants:
/// the password confirmation must match and the display name must be
/// non-empty. [`validate`](Self::validate) checks both before any remote
/// call is made.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub display_name: String,
}

impl Registration {
    /// Checks the local registration invariants.
    ///
    /// Returns the first violation found, in the order the original form
    /// checks them: missing display name, then password mismatch. A `Ok(())`
    /// here means the request is fit to send to the provider.
    pub fn validate(&self) -> Result<(), ErrorKind> {
        if self.display_name.is_empty() {
            return Err(ErrorKind::MissingUsername);
        }
        if self.password != self.password_confirmation {
            return Err(ErrorKind::PasswordMismatch);
        }
        Ok(())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Store shapes
// ---------------------------------------------------------------------------

/// A player's record in the keyed store, stored under `users/{uid}`.
///
/// The user id is the record's key in the tree, not a field of the value,
/// matching the store's `users/{uid}/{username,clicks}` layout. Created
/// lazily on the first successful login and mutated only by the score
/// synchronizer for the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Public name, denormalized here so the leaderboard query needs no
    /// second lookup.
    pub username: String,
    /// The persisted counter. Never negative.
    pub clicks: u64,
}

impl ScoreRecord {
    /// The canonical first-login record: known display name, zero clicks.
    ///
    /// Writing the full record (not just the username) means a player who
    /// has authenticated but never clicked is still ranked, at zero.
    pub fn fresh(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            clicks: 0,
        }
    }
}

/// One row of the leaderboard view.
///
/// Derived, read-only, rebuilt on every leaderboard request. The aggregator
/// guarantees rows arrive sorted by `clicks` descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub clicks: u64,
}

// =========================================================================
// Tests
// =========================================================================
