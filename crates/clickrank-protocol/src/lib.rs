//! Shared data model for Clickrank.
//!
//! This crate defines every value that crosses a component boundary:
//!
//! 1. **Identity types** — who the player is ([`UserId`], [`Identity`])
//! 2. **Form payloads** — what the player typed ([`Credentials`],
//!    [`Registration`])
//! 3. **Store shapes** — what lives in the keyed store ([`ScoreRecord`])
//!    and what the leaderboard derives from it ([`LeaderboardEntry`])
//! 4. **Outcomes** — the uniform result of every remote operation
//!    ([`Outcome`], [`ErrorKind`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Client facade (above)   ← reports ErrorKind messages to the presentation
//!     ↕
//! Session / Score / Board ← operate on Identity, ScoreRecord, Outcome
//!     ↕
//! Remote layer (below)    ← moves ScoreRecord values through the store
//! ```

mod error;
pub mod paths;
mod types;

pub use error::{ErrorKind, Outcome};
pub use types::{
    Credentials, Identity, LeaderboardEntry, Registration, ScoreRecord,
    UserId,
};
