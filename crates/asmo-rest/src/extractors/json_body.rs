//! JSON body extractor with uniform rejections.
//!
//! Malformed or mistyped bodies are answered with 400 and an `ErrorResponse`
//! instead of Axum's default plain-text 422. Field rules are enforced later by
//! the services, so this extractor only deserializes.

use asmo_core::ErrorResponse;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is an `ErrorResponse`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

/// Rejection for [`JsonBody`].
#[derive(Debug)]
pub struct JsonBodyRejection(JsonRejection);

impl JsonBodyRejection {
    fn status(&self) -> StatusCode {
        match self.0.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_response = ErrorResponse {
            code: "INVALID_JSON".to_string(),
            message: format!("Invalid request body: {}", self.0.body_text()),
            details: None,
        };
        (status, Json(error_response)).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(Self(value))
    }
}
