//! # Clickrank
//!
//! Game client core for a clicker game with accounts and a leaderboard.
//!
//! Clickrank signs players in against a remote identity provider, keeps
//! each player's click counter in a hierarchical keyed store, and builds
//! a ranked leaderboard view. The presentation layer drives it entirely
//! through channels: commands in through a [`ClientHandle`], results out
//! as [`ClientEvent`]s. The core never touches a view component.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use clickrank::prelude::*;
//!
//! # async fn run() {
//! let provider = Arc::new(MemoryIdentity::new());
//! let store = Arc::new(MemoryStore::new());
//!
//! let (handle, mut events) =
//!     spawn_client(provider, store, ClientConfig::default());
//!
//! handle
//!     .login(Credentials {
//!         email: "kim@example.com".into(),
//!         password: "secret1".into(),
//!     })
//!     .await
//!     .expect("client running");
//!
//! while let Some(event) = events.recv().await {
//!     println!("{event:?}");
//! }
//! # }
//! ```

mod client;
mod error;
mod event;

pub use client::{spawn_client, ClientConfig, ClientHandle, EventReceiver};
pub use error::ClientError;
pub use event::ClientEvent;

/// Everything a typical caller needs, in one import.
pub mod prelude {
    pub use clickrank_protocol::{
        Credentials, ErrorKind, Identity, LeaderboardEntry, Outcome,
        Registration, ScoreRecord, UserId,
    };
    pub use clickrank_remote::{
        IdentityProvider, KeyedStore, MemoryIdentity, MemoryStore,
    };
    pub use clickrank_session::Session;

    pub use crate::{
        spawn_client, ClientConfig, ClientError, ClientEvent, ClientHandle,
        EventReceiver,
    };
}
