//! Events the core reports to the presentation layer.
//!
//! Every command the client accepts resolves to at least one event here.
//! The contract with the warning slot: failure events carry an
//! [`ErrorKind`] whose `Display` is the message to show; every success
//! event supersedes whatever warning is currently showing, so a stale
//! warning never coexists with a new success signal. The core reports —
//! screen navigation is the presentation layer's reaction, never the
//! core's action.

use clickrank_protocol::{ErrorKind, Identity, LeaderboardEntry};

/// A completion reported by the client actor.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Login resolved: the player is authenticated. The dependent score
    /// load is already in flight; its result follows as its own event.
    SignedIn(Identity),

    /// Login failed; the session is back to signed-out.
    LoginFailed(ErrorKind),

    /// Registration fully succeeded (account + display name). The player
    /// returns to the login screen; registration never signs them in.
    RegistrationComplete,

    /// Registration failed — locally, remotely, or partially
    /// ([`ErrorKind::ProfileUpdateFailed`]: the account exists but its
    /// display name was not attached).
    RegisterFailed(ErrorKind),

    /// The local session is gone. Provider-side invalidation is
    /// fire-and-forget and not reported.
    SignedOut,

    /// The displayed click counter changed: a completed score load, or
    /// an optimistic bump emitted before the save resolves.
    ScoreChanged(u64),

    /// A score load or save failed. After a failed save the optimistic
    /// displayed value stays — the warning reports the failure, it does
    /// not roll the display back.
    ScoreWarning(ErrorKind),

    /// A freshly built leaderboard, highest clicks first.
    Leaderboard(Vec<LeaderboardEntry>),

    /// The leaderboard query failed; any previous view is already gone.
    LeaderboardFailed(ErrorKind),
}

impl ClientEvent {
    /// The warning message to show for this event, if it is a failure.
    ///
    /// `None` means success: the presentation layer clears its warning
    /// slot instead.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::LoginFailed(kind)
            | Self::RegisterFailed(kind)
            | Self::ScoreWarning(kind)
            | Self::LeaderboardFailed(kind) => Some(kind.to_string()),
            _ => None,
        }
    }
}
