//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// Display strings are the user-visible messages shown by the front end.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email, wrong password, or role/credential mismatch.
    ///
    /// Deliberately does not distinguish the cases.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Signup attempted with an email already in the directory.
    #[error("Email already exists.")]
    EmailExists,

    /// Signup attempted with a malformed email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] auramart_core::EmailError),
}
