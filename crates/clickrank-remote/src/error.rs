//! Typed errors reported by the remote collaborators.
//!
//! These are the provider-side taxonomies, before any mapping to the
//! user-facing [`ErrorKind`](clickrank_protocol::ErrorKind). Keeping them
//! separate matters: the provider decides *what went wrong*, the session
//! layer decides *what the player is told*.

/// Error codes reported by the identity provider.
///
/// Mirrors the provider's own auth error taxonomy. The session layer maps
/// each code to an [`ErrorKind`](clickrank_protocol::ErrorKind); codes it
/// has no mapping for arrive as [`Other`](Self::Other) and degrade to the
/// generic login/register failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No email was supplied.
    #[error("missing email")]
    MissingEmail,

    /// No password was supplied.
    #[error("missing password")]
    MissingPassword,

    /// The password does not match the account.
    #[error("wrong password")]
    WrongPassword,

    /// The email is not a well-formed address.
    #[error("invalid email")]
    InvalidEmail,

    /// No account exists for the email.
    #[error("user not found")]
    UserNotFound,

    /// The password does not meet the provider's strength requirements.
    /// Only reported on account creation.
    #[error("weak password")]
    WeakPassword,

    /// An account already exists for the email.
    /// Only reported on account creation.
    #[error("email already in use")]
    EmailAlreadyInUse,

    /// Any provider fault outside the mapped taxonomy (quota, network,
    /// internal error). The string is the provider's own description.
    #[error("provider fault: {0}")]
    Other(String),
}

/// Errors reported by the keyed store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the call was rejected.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The path is malformed (empty, or an empty segment).
    #[error("invalid path: {0:?}")]
    InvalidPath(String),
}
