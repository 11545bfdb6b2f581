/**
 * JSON Body Extractor
 *
 * `ApiJson<T>` behaves like `axum::Json<T>` but rejects with a
 * `BackendError`, so a missing field, malformed JSON or the wrong content
 * type produces the same `{success, message, status}` body as every other
 * error.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::BackendError;

/// JSON request body with API-shaped rejections
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(status = rejection.status().as_u16(), "rejected request body");
            BackendError::from(rejection)
        })?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Credentials {
        email: String,
        #[allow(dead_code)]
        password: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ApiJson(credentials) =
            ApiJson::<Credentials>::from_request(json_request(r#"{"email":"a@x.com","password":"p"}"#), &())
                .await
                .unwrap();
        assert_eq!(credentials.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let err = ApiJson::<Credentials>::from_request(json_request(r#"{"email":"a@x.com"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message().contains("password"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let err = ApiJson::<Credentials>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let request = Request::builder()
            .method("POST")
            .body(Body::from(r#"{"email":"a@x.com","password":"p"}"#))
            .unwrap();
        let err = ApiJson::<Credentials>::from_request(request, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
