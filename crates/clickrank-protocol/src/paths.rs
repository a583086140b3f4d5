//! Store path construction.
//!
//! The keyed store is addressed by slash-separated paths. Every path the
//! core touches is built here so the tree layout lives in one place:
//!
//! ```text
//! users/                     ← ranked query root
//! users/{uid}/               ← one ScoreRecord per user
//! users/{uid}/username
//! users/{uid}/clicks
//! ```

use crate::UserId;

/// Root of all user records; the leaderboard query runs against this.
pub const USERS: &str = "users";

/// The child field the ranked query orders by.
pub const CLICKS_FIELD: &str = "clicks";

/// The child field carrying a record's display name.
pub const USERNAME_FIELD: &str = "username";

/// Path to a user's full score record.
pub fn user(id: &UserId) -> String {
    format!("{USERS}/{id}")
}

/// Path to a user's display name within their record.
pub fn username(id: &UserId) -> String {
    format!("{USERS}/{id}/username")
}

/// Path to a user's click counter within their record.
pub fn clicks(id: &UserId) -> String {
    format!("{USERS}/{id}/{CLICKS_FIELD}")
}
