//! The identity provider contract.
//!
//! Clickrank doesn't implement authentication itself — that's the remote
//! provider's job. This trait is the seam: the session controller calls
//! it, and anything that can answer these four calls (a hosted identity
//! service, [`MemoryIdentity`](crate::MemoryIdentity), a test stub) can
//! stand behind it.
//!
//! Field-level credential validation is deliberately NOT done on this side
//! of the seam: the provider's error taxonomy is authoritative, so even
//! "missing email" comes back as an [`AuthError`] from the call rather
//! than being pre-checked locally.

use clickrank_protocol::{Identity, UserId};

use crate::AuthError;

/// A remote service that can authenticate players and manage accounts.
///
/// # Trait bounds
///
/// - `Send + Sync` → shared across async tasks.
/// - `'static` → owns its data; it lives as long as the client.
///
/// Every method returns a `Send` future with a single await point on the
/// caller's side; a failed call resolves to a typed [`AuthError`], never
/// a fault.
pub trait IdentityProvider: Send + Sync + 'static {
    /// Signs a player in with email and password.
    ///
    /// # Returns
    /// - `Ok(Identity)` — the account exists and the password matches
    /// - `Err(AuthError)` — the provider's code for what was wrong
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Identity, AuthError>> + Send;

    /// Creates a new account.
    ///
    /// The returned identity carries the provider-default (empty) display
    /// name; attaching the chosen name is a separate, dependent call to
    /// [`update_display_name`](Self::update_display_name).
    fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Identity, AuthError>> + Send;

    /// Attaches a display name to an existing account.
    fn update_display_name(
        &self,
        user_id: &UserId,
        display_name: &str,
    ) -> impl std::future::Future<Output = Result<(), AuthError>> + Send;

    /// Invalidates the player's session on the provider side.
    ///
    /// Fire-and-forget: there is no outcome to report, and the caller does
    /// not track completion. The local session is already gone by the time
    /// this runs.
    fn sign_out(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = ()> + Send;
}
