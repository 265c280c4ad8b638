//! Bearer Middleware
//!
//! Resolves `Authorization: Bearer <token>` to the stored user and makes it
//! available to downstream handlers as [`CurrentUser`].

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::application::ResolveTokenUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::AuthAppState;

/// The authenticated user, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Reject the request unless it carries a valid bearer token
pub async fn require_bearer_user<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Some(Authorization(bearer)) = req.headers().typed_get::<Authorization<Bearer>>() else {
        tracing::debug!("Missing or malformed bearer header");
        return Err(AuthError::InvalidToken);
    };

    let use_case = ResolveTokenUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(bearer.token()).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
