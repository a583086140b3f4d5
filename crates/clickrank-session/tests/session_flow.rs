//! Integration tests for the session controller using a scripted provider.
//!
//! The scripted provider records every call it receives, which lets these
//! tests pin the two ordering guarantees that matter most: local
//! validation short-circuits before any remote call, and the profile
//! update is only issued after account creation succeeded.

use std::sync::{Arc, Mutex};

use clickrank_protocol::{
    Credentials, ErrorKind, Identity, Registration, UserId,
};
use clickrank_remote::{AuthError, IdentityProvider};
use clickrank_session::{Registered, SessionController};

// =========================================================================
// Scripted provider
// =========================================================================

/// An identity provider with pre-scripted responses and a call log.
struct ScriptedProvider {
    sign_in: Result<Identity, AuthError>,
    create: Result<Identity, AuthError>,
    profile: Result<(), AuthError>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    /// Everything unscripted fails loudly, so a test that forgets to
    /// script a call it triggers will notice.
    fn new() -> Self {
        Self {
            sign_in: Err(AuthError::Other("unscripted".into())),
            create: Err(AuthError::Other("unscripted".into())),
            profile: Err(AuthError::Other("unscripted".into())),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn sign_in_ok(mut self, identity: Identity) -> Self {
        self.sign_in = Ok(identity);
        self
    }

    fn sign_in_err(mut self, code: AuthError) -> Self {
        self.sign_in = Err(code);
        self
    }

    fn create_ok(mut self, identity: Identity) -> Self {
        self.create = Ok(identity);
        self
    }

    fn create_err(mut self, code: AuthError) -> Self {
        self.create = Err(code);
        self
    }

    fn profile_ok(mut self) -> Self {
        self.profile = Ok(());
        self
    }

    fn profile_err(mut self, code: AuthError) -> Self {
        self.profile = Err(code);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: &str) {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(call.to_string());
    }
}

impl IdentityProvider for ScriptedProvider {
    async fn sign_in(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Identity, AuthError> {
        self.record("sign_in");
        self.sign_in.clone()
    }

    async fn create_account(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Identity, AuthError> {
        self.record("create_account");
        self.create.clone()
    }

    async fn update_display_name(
        &self,
        _user_id: &UserId,
        _display_name: &str,
    ) -> Result<(), AuthError> {
        self.record("update_display_name");
        self.profile.clone()
    }

    async fn sign_out(&self, _user_id: &UserId) {
        self.record("sign_out");
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn identity(user_id: &str, display_name: &str) -> Identity {
    Identity {
        user_id: UserId::new(user_id),
        display_name: display_name.into(),
        email: "kim@example.com".into(),
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "kim@example.com".into(),
        password: "secret1".into(),
    }
}

fn registration() -> Registration {
    Registration {
        email: "kim@example.com".into(),
        password: "secret1".into(),
        password_confirmation: "secret1".into(),
        display_name: "Kim".into(),
    }
}

fn controller(
    provider: ScriptedProvider,
) -> (SessionController<ScriptedProvider>, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    (SessionController::new(Arc::clone(&provider)), provider)
}

// =========================================================================
// login()
// =========================================================================

#[tokio::test]
async fn test_login_success_transitions_to_signed_in() {
    let (mut ctrl, _provider) =
        controller(ScriptedProvider::new().sign_in_ok(identity("u-1", "Kim")));

    let resolved = ctrl.login(&credentials()).await.expect("should sign in");

    assert_eq!(resolved.user_id, UserId::new("u-1"));
    assert!(ctrl.session().is_signed_in());
    assert_eq!(ctrl.identity(), Some(&identity("u-1", "Kim")));
}

#[tokio::test]
async fn test_login_failure_returns_to_signed_out() {
    let (mut ctrl, _provider) = controller(
        ScriptedProvider::new().sign_in_err(AuthError::WrongPassword),
    );

    let result = ctrl.login(&credentials()).await;

    assert_eq!(result, Err(ErrorKind::WrongPassword));
    assert!(!ctrl.session().is_signed_in());
    assert!(ctrl.identity().is_none(), "no identity remnants on failure");
}

#[tokio::test]
async fn test_login_maps_each_provider_code_to_its_message() {
    let expectations = [
        (AuthError::MissingEmail, "Missing Email"),
        (AuthError::MissingPassword, "Missing Password"),
        (AuthError::WrongPassword, "Wrong Password"),
        (AuthError::InvalidEmail, "Invalid Email"),
        (AuthError::UserNotFound, "User not found"),
        (AuthError::Other("boom".into()), "Login Failed"),
    ];
    for (code, message) in expectations {
        let (mut ctrl, _provider) =
            controller(ScriptedProvider::new().sign_in_err(code));
        let kind = ctrl
            .login(&credentials())
            .await
            .expect_err("should fail");
        assert_eq!(kind.to_string(), message);
    }
}

#[tokio::test]
async fn test_login_while_signed_in_is_rejected_without_remote_call() {
    let (mut ctrl, provider) =
        controller(ScriptedProvider::new().sign_in_ok(identity("u-1", "Kim")));
    ctrl.login(&credentials()).await.expect("first login");

    let result = ctrl.login(&credentials()).await;

    assert_eq!(result, Err(ErrorKind::AlreadySignedIn));
    assert_eq!(
        provider.calls(),
        vec!["sign_in"],
        "second attempt must not reach the provider"
    );
    // The established session is untouched.
    assert_eq!(ctrl.identity(), Some(&identity("u-1", "Kim")));
}

// =========================================================================
// register()
// =========================================================================

#[tokio::test]
async fn test_register_password_mismatch_makes_zero_remote_calls() {
    let (mut ctrl, provider) = controller(ScriptedProvider::new());
    let request = Registration {
        password_confirmation: "different".into(),
        ..registration()
    };

    let result = ctrl.register(&request).await;

    assert_eq!(result.unwrap_err(), ErrorKind::PasswordMismatch);
    assert!(provider.calls().is_empty(), "validation must short-circuit");
    assert!(!ctrl.session().is_signed_in());
}

#[tokio::test]
async fn test_register_empty_display_name_makes_zero_remote_calls() {
    let (mut ctrl, provider) = controller(ScriptedProvider::new());
    let request = Registration {
        display_name: String::new(),
        ..registration()
    };

    let result = ctrl.register(&request).await;

    assert_eq!(result.unwrap_err(), ErrorKind::MissingUsername);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_register_success_attaches_display_name() {
    let (mut ctrl, provider) = controller(
        ScriptedProvider::new()
            .create_ok(identity("u-2", ""))
            .profile_ok(),
    );

    let registered =
        ctrl.register(&registration()).await.expect("should register");

    assert!(registered.is_complete());
    assert_eq!(registered.identity().display_name, "Kim");
    // The update only runs after creation succeeded, in that order.
    assert_eq!(
        provider.calls(),
        vec!["create_account", "update_display_name"]
    );
    // Registration never authenticates the session.
    assert!(!ctrl.session().is_signed_in());
}

#[tokio::test]
async fn test_register_creation_failure_skips_profile_update() {
    let (mut ctrl, provider) = controller(
        ScriptedProvider::new().create_err(AuthError::EmailAlreadyInUse),
    );

    let result = ctrl.register(&registration()).await;

    assert_eq!(result.unwrap_err(), ErrorKind::EmailAlreadyInUse);
    assert_eq!(
        provider.calls(),
        vec!["create_account"],
        "dependent call must not be issued after a failure"
    );
}

#[tokio::test]
async fn test_register_profile_failure_is_partial_with_default_name() {
    // Account creation succeeds, profile update fails: the account exists
    // and is not rolled back, and the identity still carries the
    // provider-default empty display name.
    let (mut ctrl, provider) = controller(
        ScriptedProvider::new()
            .create_ok(identity("u-3", ""))
            .profile_err(AuthError::Other("backend hiccup".into())),
    );

    let registered =
        ctrl.register(&registration()).await.expect("account exists");

    match registered {
        Registered::Partial(identity) => {
            assert_eq!(identity.user_id, UserId::new("u-3"));
            assert_eq!(identity.display_name, "");
        }
        Registered::Complete(_) => panic!("expected partial outcome"),
    }
    assert_eq!(
        provider.calls(),
        vec!["create_account", "update_display_name"]
    );
}

#[tokio::test]
async fn test_register_unknown_creation_code_degrades_to_register_failed() {
    let (mut ctrl, _provider) = controller(
        ScriptedProvider::new().create_err(AuthError::Other("boom".into())),
    );

    let kind = ctrl
        .register(&registration())
        .await
        .expect_err("should fail");

    assert_eq!(kind, ErrorKind::RegisterFailed);
    assert_eq!(kind.to_string(), "Register Failed!");
}

// =========================================================================
// sign_out()
// =========================================================================

#[tokio::test]
async fn test_sign_out_clears_identity_and_notifies_provider() {
    let (mut ctrl, provider) =
        controller(ScriptedProvider::new().sign_in_ok(identity("u-1", "Kim")));
    ctrl.login(&credentials()).await.expect("should sign in");

    ctrl.sign_out();

    assert!(ctrl.identity().is_none());
    assert!(!ctrl.session().is_signed_in());

    // The provider-side invalidation is fire-and-forget on a spawned
    // task; yield so the current-thread runtime runs it.
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;
    assert!(provider.calls().contains(&"sign_out".to_string()));
}

#[tokio::test]
async fn test_sign_out_twice_is_idempotent() {
    let (mut ctrl, _provider) =
        controller(ScriptedProvider::new().sign_in_ok(identity("u-1", "Kim")));
    ctrl.login(&credentials()).await.expect("should sign in");

    ctrl.sign_out();
    ctrl.sign_out();

    assert!(ctrl.identity().is_none());
    assert!(!ctrl.session().is_signed_in());
}

#[tokio::test]
async fn test_sign_out_without_session_is_a_no_op() {
    let (mut ctrl, provider) = controller(ScriptedProvider::new());

    ctrl.sign_out();

    assert!(ctrl.identity().is_none());
    tokio::task::yield_now().await;
    assert!(
        provider.calls().is_empty(),
        "no provider call without an identity to invalidate"
    );
}

#[tokio::test]
async fn test_login_again_after_sign_out_succeeds() {
    let (mut ctrl, _provider) =
        controller(ScriptedProvider::new().sign_in_ok(identity("u-1", "Kim")));
    ctrl.login(&credentials()).await.expect("first login");
    ctrl.sign_out();

    let resolved = ctrl.login(&credentials()).await.expect("second login");

    assert_eq!(resolved.user_id, UserId::new("u-1"));
    assert!(ctrl.session().is_signed_in());
}
