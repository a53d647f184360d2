use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password with bcrypt. A fresh salt is drawn per call,
/// so hashing the same input twice yields two different strings that both
/// verify against it.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Check a plaintext password against a stored bcrypt hash. A mismatch is
/// `Ok(false)`; a malformed stored hash surfaces the bcrypt error, since
/// that is a data-integrity fault rather than a credential failure.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, BcryptError> {
    verify(password, hashed_password)
}
