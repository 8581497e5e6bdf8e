use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims embedded in an issued token.
///
/// Timestamps are Unix seconds. `exp` is always `iat + ttl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// User identifier
    pub uid: i64,

    /// User email, as registered
    pub email: String,

    /// Application the token is scoped to
    pub app_id: i32,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims issued at `issued_at` and valid for `ttl`.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Application identifier
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Token lifetime
    pub fn new(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let iat = issued_at.timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            uid,
            email: email.into(),
            app_id,
            iat,
            exp: iat.saturating_add(ttl_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_expiry_is_issued_at_plus_ttl() {
        let issued_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = TokenClaims::new(42, "alice@example.com", 7, issued_at, Duration::from_secs(3600));

        assert_eq!(claims.uid, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, 7);
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_003_600);
    }

    #[test]
    fn test_expiry_saturates_on_huge_ttl() {
        let issued_at = Utc.timestamp_opt(1000, 0).unwrap();
        let claims = TokenClaims::new(1, "a@b.c", 1, issued_at, Duration::MAX);

        assert_eq!(claims.exp, i64::MAX);
    }

    #[test]
    fn test_wire_field_names() {
        let issued_at = Utc.timestamp_opt(10, 0).unwrap();
        let claims = TokenClaims::new(5, "c@d.e", 2, issued_at, Duration::from_secs(5));

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["uid"], 5);
        assert_eq!(value["email"], "c@d.e");
        assert_eq!(value["app_id"], 2);
        assert_eq!(value["iat"], 10);
        assert_eq!(value["exp"], 15);
    }
}
