//! Remote collaborator contracts for Clickrank.
//!
//! The core talks to two external systems, both modeled as traits so the
//! real providers, the in-memory backends, and test stubs are
//! interchangeable:
//!
//! 1. **Identity provider** ([`IdentityProvider`]) — credential sign-in,
//!    account creation, profile updates
//! 2. **Keyed store** ([`KeyedStore`]) — a hierarchical key/value database
//!    addressed by slash-separated paths
//!
//! # How it fits in the stack
//!
//! ```text
//! Session / Score / Board (above)  ← issue calls through the traits
//!     ↕
//! Remote layer (this crate)        ← contracts + typed provider errors
//!     ↕
//! Provider SDK or memory backend   ← MemoryIdentity, MemoryStore
//! ```
//!
//! Each trait method is one remote call with one await point; errors come
//! back as typed values ([`AuthError`], [`StoreError`]), never as faults.

mod error;
mod identity;
mod memory;
mod store;

pub use error::{AuthError, StoreError};
pub use identity::IdentityProvider;
pub use memory::{MemoryIdentity, MemoryStore};
pub use store::{KeyedStore, Snapshot};
