use actix_web::HttpRequest;

use crate::auth::token::TokenCodec;
use crate::auth::AuthError;
use crate::models::UserIdentity;

/// Name of the cookie carrying the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Resolve the identity behind a request.
///
/// Reads the bearer token from the `token` cookie and validates it with
/// the codec. No cookie is [`AuthError::MissingCredential`]; a cookie
/// that fails validation is [`AuthError::InvalidCredential`]. Protected
/// handlers call this explicitly; there is no middleware or hidden
/// extraction.
///
/// The identity comes straight from the token's claims, with no store
/// lookup to re-check that the user still exists. That keeps the session
/// stateless, and is a deliberate trust boundary: a deleted user's
/// still-valid token resolves until it expires.
pub fn resolve(req: &HttpRequest, tokens: &TokenCodec) -> Result<UserIdentity, AuthError> {
    let cookie = req.cookie(TOKEN_COOKIE).ok_or(AuthError::MissingCredential)?;

    let claims = tokens
        .decode(cookie.value())
        .map_err(|_| AuthError::InvalidCredential)?;

    Ok(claims.into())
}
