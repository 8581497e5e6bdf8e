use thiserror::Error;

/// Errors reported by the storage ports.
///
/// Absence is not an error at this boundary; lookups return `Option`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    Database(String),
}

/// Domain failure kinds of the authentication service.
///
/// The transport adapter matches on these to pick a wire status.
#[derive(Debug, Clone, Error)]
pub enum AuthErrorKind {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("app not found")]
    ApplicationNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailure(#[from] auth::PasswordError),

    #[error("Token signing failed: {0}")]
    SigningFailure(#[from] auth::JwtError),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AuthErrorKind {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UserAlreadyExists => AuthErrorKind::UserAlreadyExists,
            StorageError::Database(_) => AuthErrorKind::Storage(err),
        }
    }
}

/// Error returned by every authentication operation.
///
/// Carries the name of the operation that failed next to the underlying kind,
/// e.g. `auth.register_new_user: user already exists`.
#[derive(Debug, Clone, Error)]
#[error("{op}: {kind}")]
pub struct AuthError {
    pub op: &'static str,
    pub kind: AuthErrorKind,
}

impl AuthError {
    pub fn new(op: &'static str, kind: impl Into<AuthErrorKind>) -> Self {
        Self {
            op,
            kind: kind.into(),
        }
    }

    pub fn kind(&self) -> &AuthErrorKind {
        &self.kind
    }
}
