pub mod identity;
pub mod password;
pub mod service;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::store::StoreError;

// Re-export necessary items
pub use identity::{resolve, TOKEN_COOKIE};
pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use token::{Claims, TokenCodec, TokenError};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Authentication and authorization failures.
///
/// The first four variants are the externally meaningful kinds; the rest
/// wrap infrastructure failures so nothing is silently swallowed. The
/// HTTP mapping lives in `crate::error`, never here.
#[derive(Debug)]
pub enum AuthError {
    /// No bearer token was presented on a protected request.
    MissingCredential,
    /// A token was presented but did not validate.
    InvalidCredential,
    /// Registration hit an existing username.
    UsernameTaken,
    /// Login failed. Used identically for an unknown username and a wrong
    /// password so the response never reveals whether an account exists.
    InvalidCredentials,
    /// The hashing backend failed, or a stored hash is malformed.
    Hash(bcrypt::BcryptError),
    /// Token issuance failed.
    TokenIssue(jsonwebtoken::errors::Error),
    /// The user store could not complete an operation.
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::MissingCredential => write!(f, "missing credential"),
            AuthError::InvalidCredential => write!(f, "could not validate credentials"),
            AuthError::UsernameTaken => write!(f, "username already exists"),
            AuthError::InvalidCredentials => write!(f, "incorrect username or password"),
            AuthError::Hash(e) => write!(f, "failed to hash password: {}", e),
            AuthError::TokenIssue(e) => write!(f, "failed to issue token: {}", e),
            AuthError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(error: bcrypt::BcryptError) -> AuthError {
        AuthError::Hash(error)
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(error: jsonwebtoken::errors::Error) -> AuthError {
        AuthError::TokenIssue(error)
    }
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username for the new account.
    /// Must be between 3 and 32 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response body after a successful login. The same token is also set as
/// the session cookie; the body copy exists for non-browser clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(token: String) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
        }
    }
}
