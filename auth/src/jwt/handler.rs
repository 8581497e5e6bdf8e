use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Uses HS256 (HMAC with SHA-256), so the same
/// shared secret signs and verifies; one handler is built per signing secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Shared secret for signing tokens
    ///
    /// # Errors
    /// * `EmptySecret` - `secret` has no bytes
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization or signing failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature and the `exp` claim are both checked.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `DecodingFailed` - Signature mismatch or malformed token
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::jwt::TokenClaims;

    fn claims() -> TokenClaims {
        TokenClaims::new(123, "alice@example.com", 1, Utc::now(), Duration::from_secs(3600))
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();
        let claims = claims();

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: TokenClaims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let result = handler.decode::<TokenClaims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!").unwrap();
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let token = handler1.encode(&claims()).expect("Failed to encode token");

        let result = handler2.decode::<TokenClaims>(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();
        let issued_at = Utc::now() - chrono::Duration::hours(2);
        let claims = TokenClaims::new(1, "a@b.c", 1, issued_at, Duration::from_secs(60));

        let token = handler.encode(&claims).unwrap();

        assert!(matches!(
            handler.decode::<TokenClaims>(&token),
            Err(JwtError::TokenExpired)
        ));
    }
}
