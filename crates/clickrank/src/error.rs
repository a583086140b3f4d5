//! Error type for the client handle.
//!
//! Operation failures (wrong password, store down) are not errors here —
//! they are [`ClientEvent`](crate::ClientEvent)s. This type only covers
//! the handle itself failing to reach the actor.

/// Errors from the caller's side of the command channel.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client actor has stopped; no further commands can be accepted.
    #[error("client is no longer running")]
    Closed,
}
