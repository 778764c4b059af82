//! Extract a book request body, reporting every JSON failure as `AppError`.

use crate::error::AppError;
use crate::model::BookInput;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Request body for create and update. Missing content type, malformed JSON,
/// `null` and non-object bodies all become 400 responses in the error envelope;
/// a body over the configured limit becomes 413.
#[derive(Clone, Debug)]
pub struct BookBody(pub BookInput);

#[async_trait]
impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(rejection.body_text())
                } else {
                    AppError::BadRequest(rejection.body_text())
                }
            })?;
        RequestValidator::parse_body(value).map(BookBody)
    }
}
