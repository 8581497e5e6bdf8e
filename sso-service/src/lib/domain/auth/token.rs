use std::time::Duration;

use auth::JwtError;
use auth::JwtHandler;
use auth::TokenClaims;
use chrono::DateTime;
use chrono::Utc;
use secrecy::ExposeSecret;

use crate::domain::auth::models::Application;
use crate::domain::auth::models::Token;
use crate::domain::auth::models::User;

/// Builds and signs identity tokens.
///
/// The signing key is the application's own secret, never a global key.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Issue a token for `user`, scoped to `application`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EmptySecret` - The application has no signing secret
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn issue(
        &self,
        user: &User,
        application: &Application,
        ttl: Duration,
    ) -> Result<Token, JwtError> {
        self.issue_at(user, application, ttl, Utc::now())
    }

    fn issue_at(
        &self,
        user: &User,
        application: &Application,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Token, JwtError> {
        let handler = JwtHandler::new(application.secret.expose_secret().as_bytes())?;
        let claims = TokenClaims::new(user.id.0, user.email.as_str(), application.id.0, now, ttl);

        handler.encode(&claims).map(Token)
    }
}
