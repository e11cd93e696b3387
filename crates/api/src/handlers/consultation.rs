use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use medconsult_core::{
    models::consultation::{
        ConsultationId, CreateConsultationRequest, CreateConsultationResponse,
        ListConsultationsResponse,
    },
    ConsultError,
};
use std::sync::Arc;

use crate::{
    middleware::{
        auth::AuthUser,
        error_handling::{AppError, BookingJson},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn create_consultation(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
    BookingJson(payload): BookingJson<CreateConsultationRequest>,
) -> Result<Json<CreateConsultationResponse>, AppError> {
    let response = state.booking.create(user_id, &payload).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_consultations(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ListConsultationsResponse>, AppError> {
    let response = state.booking.list(user_id).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete_consultation(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    // A malformed id can't name any consultation
    let id: ConsultationId = id
        .parse()
        .map_err(|_| ConsultError::consultation_not_found())?;

    state.booking.delete(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
