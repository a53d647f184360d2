use std::sync::Arc;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenCodec;
use crate::auth::AuthError;
use crate::models::UserIdentity;
use crate::store::{StoreError, UserStore};

// A well-formed bcrypt hash nothing was ever registered under. Login
// verifies against it when the username is unknown, so the unknown-user
// and wrong-password paths both pay one bcrypt comparison.
const PHANTOM_HASH: &str = "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Orchestrates registration and login over the user store, the password
/// hasher, and the token codec. Cookie delivery of the issued token is
/// the route handler's concern.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenCodec,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenCodec) -> Self {
        Self { users, tokens }
    }

    /// Create a new account and return its identity.
    ///
    /// The username check is case-sensitive and exact. The pre-check and
    /// the insert are not atomic; when a concurrent registration wins the
    /// race, the store's unique constraint rejects the insert and that
    /// rejection surfaces as [`AuthError::UsernameTaken`] as well.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserIdentity, AuthError> {
        let existing = self
            .users
            .find_by_username(username)
            .await
            .map_err(AuthError::Store)?;
        if existing.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = hash_password(password)?;

        match self.users.insert(username, &password_hash).await {
            Ok(credential) => Ok(UserIdentity::from(&credential)),
            Err(StoreError::DuplicateUsername) => Err(AuthError::UsernameTaken),
            Err(error) => Err(AuthError::Store(error)),
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// An unknown username and a wrong password produce the identical
    /// [`AuthError::InvalidCredentials`]; account existence is never
    /// revealed. A token is only ever issued here, for a credential that
    /// exists at issuance time.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, UserIdentity), AuthError> {
        let credential = match self
            .users
            .find_by_username(username)
            .await
            .map_err(AuthError::Store)?
        {
            Some(credential) => credential,
            None => {
                let _ = verify_password(password, PHANTOM_HASH);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(password, &credential.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = UserIdentity::from(&credential);
        let token = self.tokens.encode(&identity)?;

        Ok((token, identity))
    }
}
