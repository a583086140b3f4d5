//! The session controller: drives the state machine through the provider.
//!
//! One controller per client. Each operation runs to completion with a
//! single await point per remote call, transitions the [`Session`] value,
//! and resolves to an [`Outcome`] the caller can report. Dependent calls
//! are chained strictly after observed success — the profile update is
//! never issued unless account creation succeeded.

use std::sync::Arc;

use clickrank_protocol::{
    Credentials, ErrorKind, Identity, Outcome, Registration,
};
use clickrank_remote::IdentityProvider;

use crate::mapping;
use crate::Session;

/// How a registration attempt ended, for attempts that got past local
/// validation and created an account.
///
/// The distinction matters because the partial case is not rolled back:
/// the account exists either way, and the caller must surface the partial
/// case as its own failure rather than merging it into a generic one.
#[derive(Debug, Clone)]
pub enum Registered {
    /// Account created and display name attached.
    Complete(Identity),

    /// Account created, but attaching the display name failed. The
    /// identity still carries the provider-default (empty) name.
    Partial(Identity),
}

impl Registered {
    /// The created account's identity, whichever way the attempt ended.
    pub fn identity(&self) -> &Identity {
        match self {
            Self::Complete(identity) | Self::Partial(identity) => identity,
        }
    }

    /// `true` if the profile was finalized.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Owns the authentication state machine and the current identity.
///
/// Operations take `&mut self`, so the borrow checker already serializes
/// them within one task; the [`Session::can_begin_auth`] guard additionally
/// rejects attempts that arrive between operations while a session is
/// established. The session value is never left half-initialized: every
/// path out of an operation lands on a state from the diagram.
pub struct SessionController<P> {
    provider: Arc<P>,
    session: Session,
}

impl<P: IdentityProvider> SessionController<P> {
    /// Creates a signed-out controller backed by the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            session: Session::SignedOut,
        }
    }

    /// The current session phase.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The authenticated identity, if signed in.
    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Signs a player in.
    ///
    /// No local validation: the provider's taxonomy is authoritative, so
    /// even empty fields travel to the remote call and come back as mapped
    /// codes. On success the session transitions to `SignedIn` and the
    /// identity is stored; on failure it returns to `SignedOut`.
    ///
    /// The dependent score load is the caller's follow-up, issued after it
    /// observes this success — the session counts as signed in as soon as
    /// the identity resolves.
    pub async fn login(
        &mut self,
        credentials: &Credentials,
    ) -> Outcome<Identity> {
        if !self.session.can_begin_auth() {
            tracing::debug!(
                session = %self.session,
                "login rejected, session not signed out"
            );
            return Err(ErrorKind::AlreadySignedIn);
        }
        self.session = Session::Authenticating;

        match self
            .provider
            .sign_in(&credentials.email, &credentials.password)
            .await
        {
            Ok(identity) => {
                tracing::info!(
                    user_id = %identity.user_id,
                    display_name = %identity.display_name,
                    "player signed in"
                );
                self.session = Session::SignedIn(identity.clone());
                Ok(identity)
            }
            Err(code) => {
                let kind = mapping::map_login_error(&code);
                tracing::warn!(error = %code, "sign-in failed");
                self.session = Session::SignedOut;
                Err(kind)
            }
        }
    }

    /// Registers a new account and finalizes its profile.
    ///
    /// Local validation short-circuits first: an empty display name or a
    /// password mismatch fails without any remote call. Otherwise the
    /// account is created, and only on observed success is the dependent
    /// display-name update issued. A failed update is reported as
    /// [`Registered::Partial`] — the account is not rolled back.
    ///
    /// Registration never authenticates the session: every path out of
    /// here ends in `SignedOut`, and the player logs in afterwards.
    pub async fn register(
        &mut self,
        request: &Registration,
    ) -> Outcome<Registered> {
        if !self.session.can_begin_auth() {
            tracing::debug!(
                session = %self.session,
                "registration rejected, session not signed out"
            );
            return Err(ErrorKind::AlreadySignedIn);
        }
        request.validate()?;
        self.session = Session::Authenticating;

        let created = match self
            .provider
            .create_account(&request.email, &request.password)
            .await
        {
            Ok(identity) => identity,
            Err(code) => {
                let kind = mapping::map_register_error(&code);
                tracing::warn!(error = %code, "account creation failed");
                self.session = Session::SignedOut;
                return Err(kind);
            }
        };

        // Dependent call: only issued after the creation succeeded.
        let registered = match self
            .provider
            .update_display_name(&created.user_id, &request.display_name)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    user_id = %created.user_id,
                    display_name = %request.display_name,
                    "account registered"
                );
                Registered::Complete(Identity {
                    display_name: request.display_name.clone(),
                    ..created
                })
            }
            Err(code) => {
                // The account now exists without its chosen name. This
                // asymmetry is surfaced, not repaired.
                tracing::warn!(
                    user_id = %created.user_id,
                    error = %code,
                    "display name update failed after account creation"
                );
                Registered::Partial(created)
            }
        };

        self.session = Session::SignedOut;
        Ok(registered)
    }

    /// Signs the player out.
    ///
    /// Unconditionally drops the local identity and lands on `SignedOut`.
    /// The provider-side invalidation is spawned fire-and-forget; no
    /// outcome is tracked. Idempotent: calling this with no active session
    /// is a quiet no-op.
    pub fn sign_out(&mut self) {
        let previous =
            std::mem::replace(&mut self.session, Session::SigningOut);
        match previous {
            Session::SignedIn(identity) => {
                let provider = Arc::clone(&self.provider);
                let user_id = identity.user_id.clone();
                tokio::spawn(async move {
                    provider.sign_out(&identity.user_id).await;
                });
                tracing::info!(user_id = %user_id, "player signed out");
            }
            _ => {
                tracing::debug!("sign-out with no active session");
            }
        }
        self.session = Session::SignedOut;
    }
}
