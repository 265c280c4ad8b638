//! Auth Error Types
//!
//! Auth-specific error variants that render through the unified
//! `kernel::error::AppError` response format.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Detail shown for every token failure, whatever the cause
pub const CREDENTIALS_REJECTED: &str = "Could not validate credentials";

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Token missing, malformed, badly signed, wrong algorithm, expired,
    /// or without a subject
    #[error("Invalid token")]
    InvalidToken,

    /// Token subject does not match a stored user
    #[error("Token subject does not resolve to a user")]
    UnknownUser,

    /// Login with an unknown user name or a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User name already exists")]
    UserNameTaken,

    #[error("Email already registered")]
    EmailTaken,

    /// Unique constraint hit at insert time that no pre-check caught
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// User name or email rejected
    #[error("{0}")]
    Validation(String),

    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidToken | AuthError::UnknownUser | AuthError::InvalidCredentials => {
                ErrorKind::Unauthorized
            }
            AuthError::UserNameTaken
            | AuthError::EmailTaken
            | AuthError::ConstraintViolation(_) => ErrorKind::Conflict,
            AuthError::Validation(_) | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this is a bearer-token failure
    pub fn is_token_rejection(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::UnknownUser)
    }

    /// Message safe to send to the client
    fn public_message(&self) -> String {
        match self {
            AuthError::InvalidToken | AuthError::UnknownUser => CREDENTIALS_REJECTED.to_string(),
            AuthError::ConstraintViolation(_) => "User name or email already registered".to_string(),
            AuthError::Database(_) | AuthError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::UnknownUser => {
                tracing::warn!("Valid token for a user that no longer exists");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = self.is_token_rejection();
        let mut response = self.to_app_error().into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AuthError::Internal(err.to_string())
        } else {
            AuthError::Validation(err.message().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_share_one_message() {
        let invalid = AuthError::InvalidToken.to_app_error();
        let unknown = AuthError::UnknownUser.to_app_error();
        assert_eq!(invalid.message(), CREDENTIALS_REJECTED);
        assert_eq!(unknown.message(), CREDENTIALS_REJECTED);
        assert_eq!(invalid.status_code(), 401);
        assert_eq!(unknown.status_code(), 401);
    }

    #[test]
    fn test_token_rejection_sets_challenge_header() {
        let response = AuthError::UnknownUser.into_response();
        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = AuthError::InvalidCredentials.into_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AuthError::Internal("argon2 params broken".to_string()).to_app_error();
        assert_eq!(err.status_code(), 500);
        assert!(!err.message().contains("argon2"));
    }

    #[test]
    fn test_conflicts() {
        assert_eq!(AuthError::UserNameTaken.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AuthError::ConstraintViolation("users_email_key".into()).kind(),
            ErrorKind::Conflict
        );
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(msg) if msg == "Invalid email format"));

        let err: AuthError = AppError::internal("boom").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
