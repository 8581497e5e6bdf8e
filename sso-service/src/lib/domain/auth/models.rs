use std::fmt;

use secrecy::SecretString;

/// Registered user as seen by the authentication core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// PHC string produced by the credential hasher, never the plaintext
    pub password_hash: String,
}

/// User identifier, assigned by storage on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relying application (tenant) that tokens are scoped to.
///
/// Each application signs its tokens with its own secret, so a token minted for one
/// application does not verify under another.
#[derive(Debug)]
pub struct Application {
    pub id: AppId,
    pub secret: SecretString,
}

/// Application identifier, supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Signed identity token returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(pub String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
