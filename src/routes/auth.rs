use crate::{
    auth::{resolve, AuthResponse, AuthService, LoginRequest, RegisterRequest, TokenCodec, TOKEN_COOKIE},
    error::AppError,
};
use actix_web::cookie::Cookie;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new account and returns its identity. The password is never
/// echoed back; only `{user_id, username}` leaves this handler.
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let identity = auth
        .register(&register_data.username, &register_data.password)
        .await?;

    Ok(HttpResponse::Created().json(identity))
}

/// Login user
///
/// Authenticates a user, sets the session cookie, and returns the token
/// in the body for non-browser clients. Any credential failure is the
/// same 401, whether the username exists or not.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let (token, _identity) = auth
        .login(&login_data.username, &login_data.password)
        .await?;

    let cookie = Cookie::build(TOKEN_COOKIE, token.clone())
        .path("/")
        .http_only(true)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(AuthResponse::bearer(token)))
}

/// Current user
///
/// Resolves the identity carried by the session cookie. Purely a token
/// round trip; no store lookup happens here.
#[get("/me")]
pub async fn me(
    tokens: web::Data<TokenCodec>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let identity = resolve(&req, &tokens)?;
    Ok(HttpResponse::Ok().json(identity))
}
