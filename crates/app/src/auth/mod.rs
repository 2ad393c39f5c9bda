//! Auth directory and session.
//!
//! A mapping from email to user record, seeded with one hardcoded
//! administrator account, plus the current session. The directory and
//! session are mirrored to storage on every change.
//!
//! Passwords are stored and compared in plaintext. That reproduces the
//! existing storefront contract (see DESIGN.md); a real system would hash
//! credentials.

mod error;

pub use error::AuthError;

use uuid::Uuid;

use auramart_core::{Email, UserId, UserRole};

use crate::models::User;
use crate::storage::{Store, keys};

/// Email of the hardcoded administrator account.
pub const ADMIN_EMAIL: &str = "aayushb963@gmail.com";

/// Password of the hardcoded administrator account.
///
/// Forced back onto the stored admin record on every directory load,
/// overriding any tampering (and, as a documented side effect, any
/// legitimate change).
pub const ADMIN_PASSWORD: &str = "Kazi$2684";

/// Fixed id of the administrator record.
const ADMIN_USER_ID: &str = "admin001";

/// The user directory plus the current session.
///
/// State machine over anonymous / authenticated-customer /
/// authenticated-admin, driven by [`login`](Self::login),
/// [`signup`](Self::signup), and [`logout`](Self::logout).
#[derive(Debug)]
pub struct AuthDirectory {
    users: Vec<User>,
    session: Option<User>,
}

impl AuthDirectory {
    /// Load the directory and session from storage.
    ///
    /// Enforces the admin invariant once per load: the admin record is
    /// located by email; synthesized if missing; role and password reset
    /// to the hardcoded values if they drifted. A repaired directory is
    /// re-persisted immediately.
    #[must_use]
    pub fn load(store: &Store) -> Self {
        let mut users: Vec<User> = store.load(keys::USERS, Vec::new());
        if enforce_admin_record(&mut users) {
            store.save(keys::USERS, &users);
        }

        let session = store.load(keys::CURRENT_USER, None);

        Self { users, session }
    }

    /// Every record in the directory.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The customer records (the admin dashboard's user table).
    pub fn customers(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.role == UserRole::Customer)
    }

    /// The currently authenticated user, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Attempt to log in.
    ///
    /// The admin path requires role=admin, the hardcoded email, and the
    /// hardcoded password; the customer path requires an exact plaintext
    /// password match. Success sets and persists the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any mismatch; the
    /// session is left unchanged.
    pub fn login(&mut self, email: &str, password: &str, store: &Store) -> Result<User, AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| u.email.as_str() == email)
            .ok_or(AuthError::InvalidCredentials)?;

        let authenticated = match user.role {
            UserRole::Admin => user.email.as_str() == ADMIN_EMAIL && password == ADMIN_PASSWORD,
            UserRole::Customer => user.password.as_deref() == Some(password),
        };

        if !authenticated {
            tracing::debug!(email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(email, role = ?user.role, "Login succeeded");
        let user = user.clone();
        self.session = Some(user.clone());
        self.persist_session(store);

        Ok(user)
    }

    /// Register a new customer account.
    ///
    /// The new record gets a generated unique id, is appended to the
    /// directory, and becomes the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailExists`] if the email is already present
    /// (byte-for-byte comparison - case sensitivity reproduces the stored
    /// behavior, see DESIGN.md). Returns [`AuthError::InvalidEmail`] for
    /// a malformed address.
    pub fn signup(
        &mut self,
        email: &str,
        password: &str,
        store: &Store,
    ) -> Result<User, AuthError> {
        if self.users.iter().any(|u| u.email.as_str() == email) {
            return Err(AuthError::EmailExists);
        }

        let email = Email::parse(email)?;
        let id = UserId::new(format!("user_{}", Uuid::new_v4().simple()));
        let user = User::customer(id, email, password.to_owned());

        tracing::info!(email = %user.email, id = %user.id, "Customer signed up");
        self.users.push(user.clone());
        store.save(keys::USERS, &self.users);

        self.session = Some(user.clone());
        self.persist_session(store);

        Ok(user)
    }

    /// Clear the session.
    pub fn logout(&mut self, store: &Store) {
        if let Some(user) = self.session.take() {
            tracing::info!(email = %user.email, "Logged out");
        }
        self.persist_session(store);
    }

    fn persist_session(&self, store: &Store) {
        store.save(keys::CURRENT_USER, &self.session);
    }
}

/// Repair or synthesize the hardcoded admin record.
///
/// Returns whether the directory changed.
fn enforce_admin_record(users: &mut Vec<User>) -> bool {
    if let Some(admin) = users.iter_mut().find(|u| u.email.as_str() == ADMIN_EMAIL) {
        let drifted =
            admin.role != UserRole::Admin || admin.password.as_deref() != Some(ADMIN_PASSWORD);
        if drifted {
            tracing::warn!("Stored admin record drifted, resetting role and password");
            admin.role = UserRole::Admin;
            admin.password = Some(ADMIN_PASSWORD.to_owned());
        }
        return drifted;
    }

    let mut admin = User::customer(
        UserId::new(ADMIN_USER_ID),
        Email::parse(ADMIN_EMAIL).expect("admin email constant is valid"),
        ADMIN_PASSWORD.to_owned(),
    );
    admin.role = UserRole::Admin;
    users.push(admin);
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, StorageBackend};

    #[test]
    fn test_load_synthesizes_admin_record() {
        let store = Store::in_memory();
        let directory = AuthDirectory::load(&store);

        assert_eq!(directory.users().len(), 1);
        let admin = &directory.users()[0];
        assert_eq!(admin.email.as_str(), ADMIN_EMAIL);
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.password.as_deref(), Some(ADMIN_PASSWORD));
    }

    #[test]
    fn test_load_repairs_tampered_admin_record() {
        let store = Store::in_memory();
        let tampered = serde_json::json!([{
            "id": "admin001",
            "email": ADMIN_EMAIL,
            "role": "customer",
            "password": "not-the-password"
        }]);
        store.save(keys::USERS, &tampered);

        let directory = AuthDirectory::load(&store);
        let admin = &directory.users()[0];
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.password.as_deref(), Some(ADMIN_PASSWORD));

        // Repair is persisted, so a second load sees the fixed record.
        let reloaded = AuthDirectory::load(&store);
        assert_eq!(reloaded.users()[0].role, UserRole::Admin);
    }

    #[test]
    fn test_admin_login_succeeds_despite_prior_tampering() {
        let store = Store::in_memory();
        let tampered = serde_json::json!([{
            "id": "admin001",
            "email": ADMIN_EMAIL,
            "role": "customer",
            "password": "hacked"
        }]);
        store.save(keys::USERS, &tampered);

        let mut directory = AuthDirectory::load(&store);
        let user = directory.login(ADMIN_EMAIL, ADMIN_PASSWORD, &store).unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_admin_login_with_wrong_password_fails() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);

        let err = directory.login(ADMIN_EMAIL, "wrong", &store).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(directory.session().is_none());
    }

    #[test]
    fn test_customer_login_requires_exact_password() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        directory.signup("jane@example.com", "s3cret", &store).unwrap();
        directory.logout(&store);

        assert!(directory.login("jane@example.com", "S3CRET", &store).is_err());
        assert!(directory.session().is_none());

        let user = directory.login("jane@example.com", "s3cret", &store).unwrap();
        assert_eq!(user.role, UserRole::Customer);
    }

    #[test]
    fn test_login_unknown_email_fails_and_keeps_session() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        directory.signup("jane@example.com", "pw", &store).unwrap();

        assert!(directory.login("nobody@example.com", "pw", &store).is_err());
        // Failed login leaves the existing session in place.
        assert!(directory.session().is_some());
    }

    #[test]
    fn test_signup_duplicate_email_leaves_directory_unchanged() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        directory.signup("jane@example.com", "pw", &store).unwrap();
        let size = directory.users().len();

        let err = directory
            .signup("jane@example.com", "other", &store)
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailExists));
        assert_eq!(directory.users().len(), size);
    }

    #[test]
    fn test_signup_email_comparison_is_case_sensitive() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        directory.signup("jane@example.com", "pw", &store).unwrap();

        // Stored behavior: an address differing only in case is a new
        // record.
        assert!(directory.signup("Jane@example.com", "pw", &store).is_ok());
    }

    #[test]
    fn test_signup_sets_session_with_generated_id() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        let user = directory.signup("jane@example.com", "pw", &store).unwrap();

        assert!(user.id.as_str().starts_with("user_"));
        assert_eq!(
            directory.session().unwrap().email.as_str(),
            "jane@example.com"
        );
    }

    #[test]
    fn test_signup_rejects_malformed_email() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        assert!(matches!(
            directory.signup("not-an-email", "pw", &store),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_session_persists_across_loads_and_logout_clears_it() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        directory.signup("jane@example.com", "pw", &store).unwrap();

        let reloaded = AuthDirectory::load(&store);
        assert_eq!(
            reloaded.session().unwrap().email.as_str(),
            "jane@example.com"
        );

        directory.logout(&store);
        let after_logout = AuthDirectory::load(&store);
        assert!(after_logout.session().is_none());
    }

    #[test]
    fn test_corrupted_users_record_yields_admin_only_directory() {
        let backend = MemoryBackend::new();
        backend.write(keys::USERS, "%%% not json %%%").unwrap();
        let store = Store::new(Box::new(backend));

        let directory = AuthDirectory::load(&store);
        assert_eq!(directory.users().len(), 1);
        assert_eq!(directory.users()[0].email.as_str(), ADMIN_EMAIL);
    }

    #[test]
    fn test_customers_excludes_admin() {
        let store = Store::in_memory();
        let mut directory = AuthDirectory::load(&store);
        directory.signup("jane@example.com", "pw", &store).unwrap();

        let customers: Vec<_> = directory.customers().collect();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].email.as_str(), "jane@example.com");
    }
}
