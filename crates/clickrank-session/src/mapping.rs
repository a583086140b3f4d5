//! Provider error code mapping.
//!
//! The identity provider reports typed [`AuthError`] codes; the player
//! sees [`ErrorKind`] messages. The table is shared between login and
//! registration — a code means the same thing in both flows — but each
//! flow has its own fallback for codes the table doesn't know:
//! `LoginFailed` or `RegisterFailed`.

use clickrank_protocol::ErrorKind;
use clickrank_remote::AuthError;

/// Maps a sign-in failure to its user-facing kind.
pub(crate) fn map_login_error(code: &AuthError) -> ErrorKind {
    map_code(code).unwrap_or(ErrorKind::LoginFailed)
}

/// Maps an account-creation failure to its user-facing kind.
pub(crate) fn map_register_error(code: &AuthError) -> ErrorKind {
    map_code(code).unwrap_or(ErrorKind::RegisterFailed)
}

/// The shared code table. `None` for anything outside it.
fn map_code(code: &AuthError) -> Option<ErrorKind> {
    match code {
        AuthError::MissingEmail => Some(ErrorKind::MissingEmail),
        AuthError::MissingPassword => Some(ErrorKind::MissingPassword),
        AuthError::WrongPassword => Some(ErrorKind::WrongPassword),
        AuthError::InvalidEmail => Some(ErrorKind::InvalidEmail),
        AuthError::UserNotFound => Some(ErrorKind::UserNotFound),
        AuthError::WeakPassword => Some(ErrorKind::WeakPassword),
        AuthError::EmailAlreadyInUse => Some(ErrorKind::EmailAlreadyInUse),
        AuthError::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    //! One assertion per code, pinning both the mapping and the message
    //! the player ends up seeing.

    use super::*;

    #[test]
    fn test_known_codes_map_identically_for_login_and_register() {
        let codes = [
            (AuthError::MissingEmail, ErrorKind::MissingEmail),
            (AuthError::MissingPassword, ErrorKind::MissingPassword),
            (AuthError::WrongPassword, ErrorKind::WrongPassword),
            (AuthError::InvalidEmail, ErrorKind::InvalidEmail),
            (AuthError::UserNotFound, ErrorKind::UserNotFound),
            (AuthError::WeakPassword, ErrorKind::WeakPassword),
            (AuthError::EmailAlreadyInUse, ErrorKind::EmailAlreadyInUse),
        ];
        for (code, kind) in codes {
            assert_eq!(map_login_error(&code), kind);
            assert_eq!(map_register_error(&code), kind);
        }
    }

    #[test]
    fn test_login_messages_match_table() {
        let expectations = [
            (AuthError::MissingEmail, "Missing Email"),
            (AuthError::MissingPassword, "Missing Password"),
            (AuthError::WrongPassword, "Wrong Password"),
            (AuthError::InvalidEmail, "Invalid Email"),
            (AuthError::UserNotFound, "User not found"),
        ];
        for (code, message) in expectations {
            assert_eq!(map_login_error(&code).to_string(), message);
        }
    }

    #[test]
    fn test_unknown_code_degrades_per_flow() {
        let code = AuthError::Other("quota exceeded".into());
        assert_eq!(map_login_error(&code), ErrorKind::LoginFailed);
        assert_eq!(map_register_error(&code), ErrorKind::RegisterFailed);
        assert_eq!(map_login_error(&code).to_string(), "Login Failed");
        assert_eq!(
            map_register_error(&code).to_string(),
            "Register Failed!"
        );
    }
}
