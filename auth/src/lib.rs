//! Authentication utilities library
//!
//! Provides the cryptographic building blocks of the identity provider:
//! - Password hashing (Argon2id, constant-time verification)
//! - JWT token encoding and validation (HS256, one key per signing secret)
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use std::time::Duration;
//!
//! use auth::{JwtHandler, TokenClaims};
//! use chrono::Utc;
//!
//! let handler = JwtHandler::new(b"application_secret").unwrap();
//! let claims = TokenClaims::new(42, "alice@example.com", 1, Utc::now(), Duration::from_secs(3600));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: TokenClaims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.uid, 42);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
