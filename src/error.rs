//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used at the HTTP
//! edge. The core modules return their own error kinds (`AuthError`,
//! `StoreError`, `TokenError`); this is the single place where those kinds
//! become status codes, so no handler or service decides HTTP semantics.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into JSON responses. Every credential failure maps
//! to the same generic 401 with a `WWW-Authenticate: Bearer` challenge,
//! so responses never reveal whether an account exists or which token
//! check rejected a request.

use actix_web::{error::ResponseError, http::header, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Represents an unauthorized access attempt (HTTP 401).
    /// Carries the bearer challenge header in its response.
    Unauthorized(String),
    /// Represents a client-side error due to a malformed or invalid request (HTTP 400).
    BadRequest(String),
    /// Represents a situation where a requested resource was not found (HTTP 404).
    NotFound(String),
    /// Represents an unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// Represents an error originating from the store layer (HTTP 500).
    DatabaseError(String),
    /// Represents an error due to failed input validation (HTTP 422 Unprocessable Entity).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
                .json(json!({
                    "error": msg
                })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            // Store errors are presented as generic internal server errors to the client.
            AppError::DatabaseError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
        }
    }
}

/// Converts core `AuthError` kinds into edge responses.
///
/// The three credential failures share the 401 class; `UsernameTaken` is
/// the one auth failure a client may act on, so it keeps its 400 message.
/// Infrastructure failures (hashing backend, token issuance, store) stay
/// server-side as 500s.
impl From<AuthError> for AppError {
    fn from(error: AuthError) -> AppError {
        match error {
            AuthError::MissingCredential => AppError::Unauthorized("Cookie is missing".into()),
            AuthError::InvalidCredential => {
                AppError::Unauthorized("Could not validate credentials".into())
            }
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Incorrect username or password".into())
            }
            AuthError::UsernameTaken => AppError::BadRequest("Username already exists".into()),
            AuthError::Hash(e) => {
                AppError::InternalServerError(format!("Failed to hash password: {}", e))
            }
            AuthError::TokenIssue(e) => {
                AppError::InternalServerError(format!("Failed to generate token: {}", e))
            }
            AuthError::Store(e) => e.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> AppError {
        match error {
            StoreError::DuplicateUsername => AppError::BadRequest("Username already exists".into()),
            StoreError::Unavailable(e) => AppError::DatabaseError(e.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}
