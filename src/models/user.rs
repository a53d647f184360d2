use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user row: the username plus its bcrypt hash.
///
/// Created once at registration and immutable thereafter (there is no
/// password-change flow). Never serialized into a response; the hash must
/// not leave the store layer except for verification.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

/// The identity acting on a request.
///
/// Derived, never persisted directly: it is rebuilt per request from the
/// claims of a valid token, or from the store row at registration/login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: i32,
    pub username: String,
}

impl From<&Credential> for UserIdentity {
    fn from(credential: &Credential) -> Self {
        Self {
            user_id: credential.id,
            username: credential.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_credential() {
        let credential = Credential {
            id: 7,
            username: "alice".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        };

        let identity = UserIdentity::from(&credential);
        assert_eq!(identity.user_id, 7);
        assert_eq!(identity.username, "alice");
    }

    #[test]
    fn test_identity_serializes_without_password_material() {
        let identity = UserIdentity {
            user_id: 1,
            username: "alice".to_string(),
        };

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json, serde_json::json!({"user_id": 1, "username": "alice"}));
    }
}
