//! Session management for Clickrank.
//!
//! This crate owns the lifecycle of the player's authenticated session:
//!
//! 1. **State machine** — which phase the session is in ([`Session`])
//! 2. **Operations** — login, registration with profile finalization,
//!    sign-out ([`SessionController`])
//! 3. **Error mapping** — provider codes to user-facing
//!    [`ErrorKind`](clickrank_protocol::ErrorKind) messages
//!
//! # How it fits in the stack
//!
//! ```text
//! Client facade (above)   ← drives the controller, one operation at a time
//!     ↕
//! Session layer (this crate)  ← state machine + chained remote calls
//!     ↕
//! Remote layer (below)    ← IdentityProvider contract
//! ```

mod controller;
mod mapping;
mod state;

pub use controller::{Registered, SessionController};
pub use state::Session;
