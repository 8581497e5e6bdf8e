use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use tracing::Instrument;
use tracing::Span;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::AuthErrorKind;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Token;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::ApplicationProvider;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;
use crate::domain::auth::token::TokenIssuer;

/// Domain service implementation for authentication operations.
///
/// Holds no state besides its collaborators, so one instance serves any number of
/// concurrent calls. Log records are emitted under the span given at construction.
pub struct AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: ApplicationProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_ttl: Duration,
    span: Span,
}

impl<US, UP, AP> AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: ApplicationProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - Persistence for new users
    /// * `user_provider` - User and role lookups
    /// * `app_provider` - Application lookups
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `span` - Parent span for all log records of this service
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        token_ttl: Duration,
        span: Span,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(),
            token_ttl,
            span,
        }
    }

    async fn hash_password(&self, password: &SecretString) -> Result<String, AuthErrorKind> {
        let hasher = self.password_hasher;
        let password = SecretString::new(password.expose_secret().clone());

        run_blocking(move || hasher.hash(password.expose_secret())).await
    }

    async fn verify_password(
        &self,
        password: &SecretString,
        password_hash: &str,
    ) -> Result<bool, AuthErrorKind> {
        let hasher = self.password_hasher;
        let password = SecretString::new(password.expose_secret().clone());
        let password_hash = password_hash.to_owned();

        run_blocking(move || hasher.verify(password.expose_secret(), &password_hash)).await
    }
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, AuthErrorKind>
where
    F: FnOnce() -> Result<T, PasswordError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| PasswordError::HashingFailed(format!("password task failed: {}", e)))?
        .map_err(AuthErrorKind::from)
}

#[async_trait]
impl<US, UP, AP> AuthServicePort for AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: ApplicationProvider,
{
    async fn login(
        &self,
        email: &str,
        password: &SecretString,
        app_id: AppId,
    ) -> Result<Token, AuthError> {
        const OP: &str = "auth.login";

        let span = tracing::info_span!(parent: &self.span, "login", op = OP, email = %email, app_id = %app_id);

        async {
            tracing::info!("attempting to login user");

            let user = self.user_provider.find_by_email(email).await.map_err(|e| {
                tracing::error!(error = %e, "failed to get user");
                AuthError::new(OP, e)
            })?;

            let Some(user) = user else {
                // Pay the same hashing cost as a password mismatch.
                let _ = self.hash_password(password).await;
                tracing::warn!("user not found");
                return Err(AuthError::new(OP, AuthErrorKind::InvalidCredentials));
            };

            let is_valid = self
                .verify_password(password, &user.password_hash)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to verify password");
                    AuthError::new(OP, e)
                })?;

            if !is_valid {
                tracing::warn!("invalid credentials");
                return Err(AuthError::new(OP, AuthErrorKind::InvalidCredentials));
            }

            let application = self
                .app_provider
                .find_by_id(app_id)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to get app");
                    AuthError::new(OP, e)
                })?
                .ok_or_else(|| {
                    tracing::warn!("app not found");
                    AuthError::new(OP, AuthErrorKind::ApplicationNotFound)
                })?;

            let token = self
                .token_issuer
                .issue(&user, &application, self.token_ttl)
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to generate token");
                    AuthError::new(OP, e)
                })?;

            tracing::info!(user_id = %user.id, "user logged in successfully");

            Ok(token)
        }
        .instrument(span)
        .await
    }

    async fn register_new_user(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register_new_user";

        let span = tracing::info_span!(parent: &self.span, "register_new_user", op = OP, email = %email);

        async {
            tracing::info!("registering new user");

            let password_hash = self.hash_password(password).await.map_err(|e| {
                tracing::error!(error = %e, "failed to generate password hash");
                AuthError::new(OP, e)
            })?;

            let user_id = self
                .user_saver
                .save_user(email, &password_hash)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "failed to save user");
                    AuthError::new(OP, e)
                })?;

            tracing::info!(user_id = %user_id, "user registered");

            Ok(user_id)
        }
        .instrument(span)
        .await
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        let span = tracing::info_span!(parent: &self.span, "is_admin", op = OP, user_id = %user_id);

        async {
            tracing::info!("checking if user is admin");

            let is_admin = self
                .user_provider
                .is_admin(user_id)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to get admin flag");
                    AuthError::new(OP, e)
                })?
                .ok_or_else(|| {
                    tracing::warn!("user not found");
                    AuthError::new(OP, AuthErrorKind::UserNotFound)
                })?;

            tracing::info!(is_admin, "checked if user is admin");

            Ok(is_admin)
        }
        .instrument(span)
        .await
    }
}
