//! Typing Router

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::AuthAppState;
use auth::require_bearer_user;
use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::TypingConfig;
use crate::domain::repository::TypingResultRepository;
use crate::presentation::TypingAppState;
use crate::presentation::handlers;

/// Create the Typing router
///
/// `/save-result` requires a bearer token resolved through `auth`; the
/// other routes are public.
pub fn typing_router<R, U>(repo: Arc<R>, config: TypingConfig, auth: AuthAppState<U>) -> Router
where
    R: TypingResultRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = TypingAppState {
        repo,
        config: Arc::new(config),
    };

    Router::new()
        .route("/save-result", post(handlers::save_result::<R>))
        .route_layer(middleware::from_fn_with_state(auth, require_bearer_user::<U>))
        .route("/get-text", get(handlers::get_text))
        .route("/calculate", post(handlers::calculate))
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_text::PASSAGES;
    use crate::infra::memory::InMemoryTypingResultRepository;
    use auth::AuthConfig;
    use auth::application::{AccessTokenIssuer, RegisterInput, RegisterUseCase};
    use auth::infra::memory::InMemoryUserRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct Harness {
        app: Router,
        results: Arc<InMemoryTypingResultRepository>,
        users: Arc<InMemoryUserRepository>,
        auth_config: Arc<AuthConfig>,
    }

    impl Harness {
        fn new() -> Self {
            let results = Arc::new(InMemoryTypingResultRepository::default());
            let users = Arc::new(InMemoryUserRepository::default());
            let auth_config = Arc::new(AuthConfig::new([5u8; 32]));
            let app = typing_router(
                results.clone(),
                TypingConfig::default(),
                AuthAppState::new(users.clone(), auth_config.clone()),
            );
            Self {
                app,
                results,
                users,
                auth_config,
            }
        }

        /// Register a user and return a bearer token for them
        async fn sign_up(&self, user_name: &str) -> String {
            let output = RegisterUseCase::new(self.users.clone(), self.auth_config.clone())
                .execute(RegisterInput {
                    user_name: user_name.to_string(),
                    email: format!("{user_name}@example.com"),
                    password: "home row warrior".to_string(),
                })
                .await
                .unwrap();
            self.results.add_user(output.user_id, &output.user_name).await;

            AccessTokenIssuer::new(self.auth_config.clone())
                .issue(&user_name.to_lowercase())
                .unwrap()
                .token
        }

        async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        }
    }

    fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_get_text_returns_builtin_passage() {
        let harness = Harness::new();
        let (status, body) = harness.send(get("/get-text")).await;
        assert_eq!(status, StatusCode::OK);
        let text = body["text"].as_str().unwrap();
        assert!(PASSAGES.contains(&text));
    }

    #[tokio::test]
    async fn test_calculate() {
        let harness = Harness::new();
        let (status, body) = harness
            .send(post_json(
                "/calculate",
                json!({"typed_text": "hello there", "original_text": "hello world", "time_taken": 30.0}),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"correct_words": 1, "wpm": 2.0, "accuracy": 50.0}));
    }

    #[tokio::test]
    async fn test_calculate_empty_reference_is_unprocessable() {
        let harness = Harness::new();
        let (status, body) = harness
            .send(post_json(
                "/calculate",
                json!({"typed_text": "hello", "original_text": "   ", "time_taken": 30.0}),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Reference text has no words");
    }

    #[tokio::test]
    async fn test_malformed_body_is_problem_details() {
        let harness = Harness::new();
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"typed_text\": "))
            .unwrap();
        let (status, body) = harness.send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");

        let (status, body) = harness
            .send(post_json("/calculate", json!({"typed_text": "hi"}), None))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], 422);
    }

    #[tokio::test]
    async fn test_save_result_requires_bearer_token() {
        let harness = Harness::new();
        let (status, _) = harness
            .send(post_json(
                "/save-result",
                json!({"wpm": 80.0, "accuracy": 95.0}),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = harness
            .send(post_json(
                "/save-result",
                json!({"wpm": 80.0, "accuracy": 95.0}),
                Some("garbage"),
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (_, board) = harness.send(get("/leaderboard")).await;
        assert_eq!(board, json!([]));
    }

    #[tokio::test]
    async fn test_save_result_rejects_out_of_range() {
        let harness = Harness::new();
        let token = harness.sign_up("alice").await;
        let (status, _) = harness
            .send(post_json(
                "/save-result",
                json!({"wpm": -3.0, "accuracy": 95.0}),
                Some(token.as_str()),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_saved_results_rank_on_leaderboard() {
        let harness = Harness::new();
        let alice = harness.sign_up("Alice").await;
        let bob = harness.sign_up("bob").await;

        for (token, wpm) in [(&alice, 120.0), (&bob, 95.0), (&bob, 140.0)] {
            let (status, body) = harness
                .send(post_json(
                    "/save-result",
                    json!({"wpm": wpm, "accuracy": 97.0}),
                    Some(token.as_str()),
                ))
                .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["wpm"], wpm);
        }

        let (status, board) = harness.send(get("/leaderboard")).await;
        assert_eq!(status, StatusCode::OK);
        let rows = board.as_array().unwrap();
        let ranked: Vec<(&str, f64)> = rows
            .iter()
            .map(|r| (r["user_name"].as_str().unwrap(), r["wpm"].as_f64().unwrap()))
            .collect();
        assert_eq!(ranked, vec![("bob", 140.0), ("Alice", 120.0), ("bob", 95.0)]);
    }
}
