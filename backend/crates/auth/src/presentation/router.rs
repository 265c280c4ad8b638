//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::AuthAppState;
use crate::presentation::handlers;
use crate::presentation::middleware::require_bearer_user;

/// Create the Auth router for any repository implementation
///
/// `/me` sits behind the bearer middleware; `/register` and `/login` are open.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_user::<R>,
        ))
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_fixtures;
    use crate::error::CREDENTIALS_REJECTED;
    use crate::infra::memory::InMemoryUserRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        auth_router(AuthAppState::new(
            test_fixtures::repo(),
            test_fixtures::config(),
        ))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_me(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn register_and_login(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(post_json(
                "/register",
                json!({"username": "Alice", "email": "alice@example.com", "password": "home row warrior"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(post_json(
                "/login",
                json!({"username": "alice", "password": "home row warrior"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(body["expires_in"], 3600);
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_login_me() {
        let app = app();
        let token = register_and_login(&app).await;

        let authorization = format!("Bearer {token}");
        let response = app
            .oneshot(get_me(Some(authorization.as_str())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["user_name"], "Alice");
        assert_eq!(body["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_conflict() {
        let app = app();
        register_and_login(&app).await;

        let response = app
            .oneshot(post_json(
                "/register",
                json!({"username": "alice", "email": "new@example.com", "password": "home row warrior"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_problem_details() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .body(Body::from(r#"{"username": "alice", "password": "x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = json_body(response).await;
        assert_eq!(body["title"], "Bad Request");
        assert!(body["action"].is_string());
    }

    #[tokio::test]
    async fn test_bad_login_is_unauthorized() {
        let app = app();
        register_and_login(&app).await;

        let response = app
            .oneshot(post_json(
                "/login",
                json!({"username": "alice", "password": "wrong password"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_token_failures_look_identical() {
        let app = app();
        register_and_login(&app).await;

        let stranger = crate::application::AccessTokenIssuer::new(test_fixtures::config())
            .issue("nobody")
            .unwrap()
            .token;

        let cases = [
            None,
            Some("Basic YWxpY2U6cGFzcw==".to_string()),
            Some("Bearer not.a.token".to_string()),
            Some(format!("Bearer {stranger}")),
        ];

        for authorization in cases {
            let response = app
                .clone()
                .oneshot(get_me(authorization.as_deref()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
                "Bearer"
            );
            assert_eq!(json_body(response).await["detail"], CREDENTIALS_REJECTED);
        }
    }

    #[tokio::test]
    async fn test_state_needs_no_clone_repository() {
        // InMemoryUserRepository is not Clone; the router still builds
        let state = AuthAppState::new(
            std::sync::Arc::new(InMemoryUserRepository::default()),
            test_fixtures::config(),
        );
        let _ = auth_router(state);
    }
}
