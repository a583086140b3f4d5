//! The client actor: one task that owns all mutable client state.
//!
//! The presentation layer never calls the core directly. It sends
//! commands through a [`ClientHandle`] and consumes [`ClientEvent`]s from
//! the event channel, so the UI context is never blocked on a remote
//! call. The actor owns the session controller and the displayed click
//! counter and processes one command at a time — that serialization, plus
//! the controller's own signed-out guard, is what keeps two auth attempts
//! from ever interleaving.
//!
//! Ordering: a dependent follow-up (the score load after a login) is
//! issued only after the triggering operation's success is observed, and
//! always after the success event is already emitted — the UI shows
//! "signed in" while the score load is still in flight.

use std::sync::Arc;

use clickrank_protocol::{Credentials, ErrorKind, Registration};
use clickrank_remote::{IdentityProvider, KeyedStore};
use clickrank_session::SessionController;
use tokio::sync::mpsc;

use crate::{ClientError, ClientEvent};

/// Default command channel size.
const DEFAULT_COMMAND_BUFFER: usize = 64;

/// Configuration for the client actor.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bound of the command channel. When full, handle calls wait —
    /// backpressure instead of unbounded queueing of button presses.
    pub command_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

/// Commands sent from the presentation layer to the actor.
enum ClientCommand {
    Login(Credentials),
    Register(Registration),
    SignOut,
    SaveScore,
    LoadLeaderboard,
    Shutdown,
}

/// Channel receiver for [`ClientEvent`]s, handed to the presentation
/// layer at spawn time.
pub type EventReceiver = mpsc::UnboundedReceiver<ClientEvent>;

/// Handle to a running client actor. Cheap to clone.
#[derive(Clone)]
pub struct ClientHandle {
    sender: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Requests a login attempt with the given credentials.
    ///
    /// Resolves as soon as the command is accepted; the outcome arrives
    /// as [`ClientEvent::SignedIn`] or [`ClientEvent::LoginFailed`].
    pub async fn login(
        &self,
        credentials: Credentials,
    ) -> Result<(), ClientError> {
        self.send(ClientCommand::Login(credentials)).await
    }

    /// Requests a registration attempt.
    pub async fn register(
        &self,
        request: Registration,
    ) -> Result<(), ClientError> {
        self.send(ClientCommand::Register(request)).await
    }

    /// Requests a sign-out. Always succeeds from the session's point of
    /// view; [`ClientEvent::SignedOut`] confirms it.
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        self.send(ClientCommand::SignOut).await
    }

    /// Requests a click: bump the counter and persist it.
    pub async fn save_score(&self) -> Result<(), ClientError> {
        self.send(ClientCommand::SaveScore).await
    }

    /// Requests a fresh leaderboard view.
    pub async fn load_leaderboard(&self) -> Result<(), ClientError> {
        self.send(ClientCommand::LoadLeaderboard).await
    }

    /// Tells the actor to stop after the commands already queued.
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        self.send(ClientCommand::Shutdown).await
    }

    async fn send(&self, command: ClientCommand) -> Result<(), ClientError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| ClientError::Closed)
    }
}

/// Spawns the client actor and returns its handle and event stream.
///
/// The actor runs until [`ClientHandle::shutdown`] is called or every
/// handle is dropped.
pub fn spawn_client<P, S>(
    provider: Arc<P>,
    store: Arc<S>,
    config: ClientConfig,
) -> (ClientHandle, EventReceiver)
where
    P: IdentityProvider,
    S: KeyedStore,
{
    let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let actor = ClientActor {
        controller: SessionController::new(provider),
        store,
        clicks: 0,
        receiver: command_rx,
        events: event_tx,
    };

    tokio::spawn(actor.run());

    (
        ClientHandle {
            sender: command_tx,
        },
        event_rx,
    )
}

/// The internal actor state. Runs inside one Tokio task.
struct ClientActor<P, S> {
    controller: SessionController<P>,
    store: Arc<S>,
    /// The displayed counter. Updated optimistically on save, reset on
    /// sign-out, replaced by the loaded value after login.
    clicks: u64,
    receiver: mpsc::Receiver<ClientCommand>,
    events: mpsc::UnboundedSender<ClientEvent>,
}

impl<P, S> ClientActor<P, S>
where
    P: IdentityProvider,
    S: KeyedStore,
{
    /// Runs the actor loop, processing commands until shutdown.
    async fn run(mut self) {
        tracing::info!("client actor started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                ClientCommand::Login(credentials) => {
                    self.handle_login(credentials).await;
                }
                ClientCommand::Register(request) => {
                    self.handle_register(request).await;
                }
                ClientCommand::SignOut => self.handle_sign_out(),
                ClientCommand::SaveScore => self.handle_save_score().await,
                ClientCommand::LoadLeaderboard => {
                    self.handle_leaderboard().await;
                }
                ClientCommand::Shutdown => {
                    tracing::info!("client shutting down");
                    break;
                }
            }
        }

        tracing::info!("client actor stopped");
    }

    async fn handle_login(&mut self, credentials: Credentials) {
        match self.controller.login(&credentials).await {
            Ok(identity) => {
                // The session counts as signed in now; the score load is
                // the dependent follow-up, after the event is out.
                self.emit(ClientEvent::SignedIn(identity.clone()));

                match clickrank_score::load_score(&*self.store, &identity)
                    .await
                {
                    Ok(clicks) => {
                        self.clicks = clicks;
                        self.emit(ClientEvent::ScoreChanged(clicks));
                    }
                    Err(kind) => {
                        self.emit(ClientEvent::ScoreWarning(kind));
                    }
                }
            }
            Err(kind) => {
                self.emit(ClientEvent::LoginFailed(kind));
            }
        }
    }

    async fn handle_register(&mut self, request: Registration) {
        match self.controller.register(&request).await {
            Ok(registered) if registered.is_complete() => {
                self.emit(ClientEvent::RegistrationComplete);
            }
            Ok(partial) => {
                // Account created, profile not finalized. Distinct from
                // a plain registration failure and not rolled back.
                tracing::warn!(
                    user_id = %partial.identity().user_id,
                    "registration partially complete"
                );
                self.emit(ClientEvent::RegisterFailed(
                    ErrorKind::ProfileUpdateFailed,
                ));
            }
            Err(kind) => {
                self.emit(ClientEvent::RegisterFailed(kind));
            }
        }
    }

    fn handle_sign_out(&mut self) {
        self.controller.sign_out();
        self.clicks = 0;
        self.emit(ClientEvent::SignedOut);
    }

    async fn handle_save_score(&mut self) {
        let Some(identity) = self.controller.identity() else {
            tracing::debug!("save ignored, no authenticated player");
            self.emit(ClientEvent::ScoreWarning(ErrorKind::SaveFailed));
            return;
        };
        let user_id = identity.user_id.clone();

        // Optimistic: the displayed value moves before the write
        // resolves, and a failed write does not move it back.
        let previous = self.clicks;
        self.clicks += 1;
        self.emit(ClientEvent::ScoreChanged(self.clicks));

        if let Err(kind) = clickrank_score::increment_and_save(
            &*self.store,
            &user_id,
            previous,
        )
        .await
        {
            self.emit(ClientEvent::ScoreWarning(kind));
        }
    }

    async fn handle_leaderboard(&mut self) {
        match clickrank_board::load_leaderboard(&*self.store).await {
            Ok(entries) => self.emit(ClientEvent::Leaderboard(entries)),
            Err(kind) => self.emit(ClientEvent::LeaderboardFailed(kind)),
        }
    }

    /// Sends an event to the presentation layer. A gone receiver is not
    /// the core's problem; the send result is dropped.
    fn emit(&self, event: ClientEvent) {
        let _ = self.events.send(event);
    }
}
