//! # Error Handling Middleware
//!
//! Maps booking errors to HTTP status codes and JSON bodies of the form
//! `{"code": <status>, "message": <text>}`.
//!
//! Unexpected failures are logged with their full report and answered with a
//! generic message; nothing internal reaches the caller.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medconsult_core::ConsultError;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub ConsultError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ConsultError::Parse(_) => StatusCode::BAD_REQUEST,
            ConsultError::PastDate => StatusCode::FORBIDDEN,
            ConsultError::SlotConflict => StatusCode::FORBIDDEN,
            ConsultError::DuplicateBooking => StatusCode::FORBIDDEN,
            ConsultError::NotFound(_) => StatusCode::NOT_FOUND,
            ConsultError::Forbidden => StatusCode::FORBIDDEN,
            ConsultError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ConsultError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ConsultError::Unexpected(report) = &self.0 {
            tracing::error!("Unexpected error: {:?}", report);
        }

        let body = Json(json!({
            "code": status.as_u16(),
            "message": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Allows `?` on `ConsultResult` inside handlers.
impl From<ConsultError> for AppError {
    fn from(err: ConsultError) -> Self {
        AppError(err)
    }
}

/// Maps a ConsultError to an HTTP response
pub fn map_error(err: ConsultError) -> Response {
    AppError(err).into_response()
}

/// JSON body extractor whose rejections use the same `{"code","message"}`
/// shape as every other booking error.
///
/// A body that is not JSON, lacks a field or carries a field of the wrong type
/// is a [`ConsultError::Parse`] and answers 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BookingJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(BookingJson(value)),
            Err(rejection) => Err(AppError(parse_error(rejection))),
        }
    }
}

fn parse_error(rejection: JsonRejection) -> ConsultError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    ConsultError::Parse(rejection.body_text())
}
