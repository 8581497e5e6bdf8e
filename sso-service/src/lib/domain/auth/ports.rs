use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::Token;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication domain service operations.
///
/// Inputs are assumed well-formed; emptiness checks belong to the transport adapter.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token scoped to an application.
    ///
    /// # Arguments
    /// * `email` - Registered email address
    /// * `password` - Plaintext password
    /// * `app_id` - Application the token is issued for
    ///
    /// # Returns
    /// Signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `ApplicationNotFound` - `app_id` is not provisioned
    /// * `HashingFailure` - Stored hash is malformed
    /// * `SigningFailure` - Application secret is unusable
    /// * `Storage` - Storage operation failed
    async fn login(
        &self,
        email: &str,
        password: &SecretString,
        app_id: AppId,
    ) -> Result<Token, AuthError>;

    /// Register a new user.
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `HashingFailure` - Password hashing failed
    /// * `Storage` - Storage operation failed
    async fn register_new_user(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserId, AuthError>;

    /// Check whether a user has the administrator flag.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `Storage` - Storage operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persists newly registered users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Insert a user unless the email is already taken.
    ///
    /// The check and the insert must be atomic: of two concurrent calls with the
    /// same email exactly one succeeds.
    ///
    /// # Arguments
    /// * `email` - Email address, stored as received
    /// * `password_hash` - PHC string from the credential hasher
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError>;
}

/// Read access to users and their roles.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Retrieve the administrator flag of a user.
    ///
    /// # Returns
    /// Optional flag (None if the user does not exist)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<Option<bool>, StorageError>;
}

/// Read access to provisioned applications.
#[async_trait]
pub trait ApplicationProvider: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Returns
    /// Optional application (None if not provisioned)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, app_id: AppId) -> Result<Option<Application>, StorageError>;
}
