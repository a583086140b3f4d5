//! The session state machine.
//!
//! One value describes where the player is in the authentication
//! lifecycle:
//!
//! ```text
//!   SignedOut ──(login / register)──→ Authenticating
//!       ↑                                  │
//!       │                      ┌───────────┴───────────┐
//!       │                 (failure, or              (login
//!       │               registration done)          success)
//!       │                      │                        │
//!       └──────────────────────┘                        ▼
//!       ↑                                           SignedIn
//!       │                                               │
//!       └────────── SigningOut ←──(sign_out)────────────┘
//! ```
//!
//! `Authenticating` covers every chained sub-step of an attempt (account
//! creation plus profile finalization counts as one `Authenticating`
//! stretch). Registration never ends in `SignedIn`: a successful
//! registration returns the player to the signed-out login screen.

use std::fmt;

use clickrank_protocol::Identity;

/// The current phase of the player's session.
///
/// `SignedIn` is the only phase that carries data: the authenticated
/// [`Identity`], owned here exclusively and dropped entirely on sign-out.
/// There is deliberately no half-initialized in-between — a failed attempt
/// lands back on `SignedOut` with no identity remnants.
#[derive(Debug, Clone)]
pub enum Session {
    /// No authenticated player. Login and registration are accepted.
    SignedOut,

    /// A login or registration attempt is in flight, possibly spanning
    /// multiple chained remote calls.
    Authenticating,

    /// A player is authenticated for the lifetime of this value.
    SignedIn(Identity),

    /// Sign-out in progress: the identity is already invalidated locally,
    /// the provider-side invalidation is in flight (fire-and-forget).
    SigningOut,
}

impl Session {
    /// Returns `true` if a new login or registration attempt may begin.
    ///
    /// Only `SignedOut` qualifies: this is the explicit serialization
    /// guard against a second attempt while one is in flight.
    pub fn can_begin_auth(&self) -> bool {
        matches!(self, Self::SignedOut)
    }

    /// Returns `true` if a player is authenticated.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedOut => write!(f, "SignedOut"),
            Self::Authenticating => write!(f, "Authenticating"),
            Self::SignedIn(identity) => {
                write!(f, "SignedIn({})", identity.user_id)
            }
            Self::SigningOut => write!(f, "SigningOut"),
        }
    }
}
