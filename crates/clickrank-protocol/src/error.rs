//! The user-facing error taxonomy and the uniform outcome type.
//!
//! Every asynchronous remote operation in the core resolves to an
//! [`Outcome`]: success with a value, or failure with an [`ErrorKind`].
//! This replaces exception propagation across the async boundary — errors
//! are caught at the await point, mapped, and carried as plain values.

/// The uniform result of an asynchronous core operation.
pub type Outcome<T> = Result<T, ErrorKind>;

/// Every way a core operation can fail, with the exact message the
/// presentation layer shows for it.
///
/// The `#[error("...")]` strings are the UI message table — tests pin them,
/// and the presentation layer renders `kind.to_string()` directly into its
/// warning slot. Three families:
///
/// - provider codes mapped from the identity service (`MissingEmail` through
///   `EmailAlreadyInUse`), plus the generic fallbacks `LoginFailed` /
///   `RegisterFailed` for codes the table doesn't know
/// - local validation failures that short-circuit before any remote call
///   (`MissingUsername`, `PasswordMismatch`)
/// - store and sequencing failures (`FetchFailed`, `SaveFailed`,
///   `ProfileUpdateFailed`, `AlreadySignedIn`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The provider rejected the call because no email was supplied.
    #[error("Missing Email")]
    MissingEmail,

    /// The provider rejected the call because no password was supplied.
    #[error("Missing Password")]
    MissingPassword,

    /// The password does not match the account.
    #[error("Wrong Password")]
    WrongPassword,

    /// The email is not a well-formed address.
    #[error("Invalid Email")]
    InvalidEmail,

    /// No account exists for the email.
    #[error("User not found")]
    UserNotFound,

    /// The password does not meet the provider's strength requirements.
    #[error("Weak Password")]
    WeakPassword,

    /// An account already exists for the email.
    #[error("Email Already In Use")]
    EmailAlreadyInUse,

    /// Sign-in failed with a provider code the mapping table doesn't know.
    #[error("Login Failed")]
    LoginFailed,

    /// Account creation failed with a provider code the mapping table
    /// doesn't know.
    #[error("Register Failed!")]
    RegisterFailed,

    /// Local validation: the registration form's display name was empty.
    /// No remote call was made.
    #[error("Missing Username")]
    MissingUsername,

    /// Local validation: the two password fields differ. No remote call
    /// was made.
    #[error("Password Does Not Match!")]
    PasswordMismatch,

    /// The account was created but attaching the display name failed.
    /// The account exists with its provider-default (empty) name; nothing
    /// is rolled back.
    #[error("Username Set Failed!")]
    ProfileUpdateFailed,

    /// A keyed-store read failed (score load or leaderboard query).
    #[error("Could not load data")]
    FetchFailed,

    /// A keyed-store write failed. The optimistic local value is kept.
    #[error("Could not save data")]
    SaveFailed,

    /// A login or registration was attempted while a session was already
    /// established or being established. The attempt made no remote call.
    #[error("Already signed in")]
    AlreadySignedIn,
}

impl ErrorKind {
    /// Returns `true` for failures detected locally, before any remote
    /// call was issued.
    pub fn is_validation(self) -> bool {
        matches!(self, Self::MissingUsername | Self::PasswordMismatch)
    }

    /// Returns `true` for the partial-failure case: the account exists but
    /// its profile was not finalized.
    pub fn is_partial(self) -> bool {
        matches!(self, Self::ProfileUpdateFailed)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The message table is a contract with the presentation layer: these
    //! strings are shown verbatim in the warning slot, so each one is
    //! pinned here.

    use super::*;

    #[test]
    fn test_message_table_matches_ui_strings() {
        let table = [
            (ErrorKind::MissingEmail, "Missing Email"),
            (ErrorKind::MissingPassword, "Missing Password"),
            (ErrorKind::WrongPassword, "Wrong Password"),
            (ErrorKind::InvalidEmail, "Invalid Email"),
            (ErrorKind::UserNotFound, "User not found"),
            (ErrorKind::WeakPassword, "Weak Password"),
            (ErrorKind::EmailAlreadyInUse, "Email Already In Use"),
            (ErrorKind::LoginFailed, "Login Failed"),
            (ErrorKind::RegisterFailed, "Register Failed!"),
            (ErrorKind::MissingUsername, "Missing Username"),
            (ErrorKind::PasswordMismatch, "Password Does Not Match!"),
            (ErrorKind::ProfileUpdateFailed, "Username Set Failed!"),
        ];
        for (kind, message) in table {
            assert_eq!(kind.to_string(), message);
        }
    }

    #[test]
    fn test_is_validation_covers_only_local_checks() {
        assert!(ErrorKind::MissingUsername.is_validation());
        assert!(ErrorKind::PasswordMismatch.is_validation());
        assert!(!ErrorKind::MissingEmail.is_validation());
        assert!(!ErrorKind::FetchFailed.is_validation());
    }

    #[test]
    fn test_is_partial_covers_only_profile_update() {
        assert!(ErrorKind::ProfileUpdateFailed.is_partial());
        assert!(!ErrorKind::RegisterFailed.is_partial());
    }
}
