use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::models::UserIdentity;

/// Represents the claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject of the token: the username.
    pub sub: String,
    /// The user's unique identifier, usable as the owner key for tasks.
    pub user_id: i32,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

impl From<Claims> for UserIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.sub,
        }
    }
}

/// Token validation failure.
///
/// A single variant on purpose: bad signature, unknown algorithm,
/// malformed structure, expiry, and a missing subject all collapse into
/// it, so a caller (or an attacker reading responses) cannot tell which
/// check rejected the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Invalid,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid token")
    }
}

/// Encodes and validates signed, expiring session tokens.
///
/// Holds the signing keys, the fixed HMAC algorithm, and the configured
/// TTL, all taken from [`Config`] at construction. Validity is determined
/// entirely by the token itself: signature, expiry, and a non-empty
/// subject. There is no server-side session state and no revocation.
#[derive(Clone)]
pub struct TokenCodec {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &Config) -> Self {
        Self::with_secret(
            &config.jwt_secret,
            config.jwt_algorithm,
            config.token_ttl_minutes,
        )
    }

    pub fn with_secret(secret: &str, algorithm: Algorithm, ttl_minutes: i64) -> Self {
        let mut validation = Validation::new(algorithm);
        // A token is valid strictly while now < exp; drop the default
        // 60 second leeway.
        validation.leeway = 0;

        Self {
            header: Header::new(algorithm),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a token for `identity`, expiring `ttl` from now (second
    /// granularity). Encoding only fails on key/serialization problems,
    /// which with an HMAC secret is an infrastructure fault, not a
    /// credential one; the raw error is surfaced for the 500 path.
    pub fn encode(&self, identity: &UserIdentity) -> Result<String, jsonwebtoken::errors::Error> {
        let expiration = (Utc::now() + self.ttl).timestamp() as usize;

        let claims = Claims {
            sub: identity.username.clone(),
            user_id: identity.user_id,
            exp: expiration,
        };

        encode(&self.header, &claims, &self.encoding_key)
    }

    /// Validate a token and recover its claims: signature and algorithm
    /// first, then expiry, then a present, non-empty subject. Every
    /// failure is [`TokenError::Invalid`].
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)?;

        if claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::encode as raw_encode;

    fn codec(secret: &str) -> TokenCodec {
        TokenCodec::with_secret(secret, Algorithm::HS256, 30)
    }

    fn identity() -> UserIdentity {
        UserIdentity {
            user_id: 42,
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip_is_lossless() {
        let codec = codec("test-secret");
        let token = codec.encode(&identity()).unwrap();

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, 42);
        assert_eq!(UserIdentity::from(claims), identity());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let codec = codec("test-secret");

        let claims = Claims {
            sub: "alice".to_string(),
            user_id: 42,
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let expired = raw_encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert_eq!(codec.decode(&expired), Err(TokenError::Invalid));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let token = codec("one-secret").encode(&identity()).unwrap();
        assert_eq!(
            codec("a_completely_different_secret").decode(&token),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_wrong_algorithm_is_rejected() {
        let token = TokenCodec::with_secret("test-secret", Algorithm::HS384, 30)
            .encode(&identity())
            .unwrap();
        assert_eq!(codec("test-secret").decode(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let codec = codec("test-secret");

        let claims = Claims {
            sub: String::new(),
            user_id: 42,
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        };
        let token = raw_encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert_eq!(codec.decode(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert_eq!(
            codec("test-secret").decode("not-even-a-token"),
            Err(TokenError::Invalid)
        );
    }
}
