//! Request extractors whose rejections render as problem details

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::app_error::AppError;

/// `axum::Json` for request bodies, rejecting with [`AppError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct ResultBody {
        wpm: f64,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let ApiJson(body) = ApiJson::<ResultBody>::from_request(
            request(Some("application/json"), r#"{"wpm": 42.5}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(body.wpm, 42.5);
    }

    #[tokio::test]
    async fn test_rejections_are_app_errors() {
        let syntax = ApiJson::<ResultBody>::from_request(request(Some("application/json"), "{"), &())
            .await
            .unwrap_err();
        assert_eq!(syntax.status_code(), 400);

        let shape = ApiJson::<ResultBody>::from_request(
            request(Some("application/json"), r#"{"wpm": "fast"}"#),
            &(),
        )
        .await
        .unwrap_err();
        assert_eq!(shape.status_code(), 422);

        let no_type = ApiJson::<ResultBody>::from_request(request(None, r#"{"wpm": 1}"#), &())
            .await
            .unwrap_err();
        assert_eq!(no_type.status_code(), 400);
        assert!(no_type.action().is_some());
    }
}
