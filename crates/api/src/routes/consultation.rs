use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/consultations",
            get(handlers::consultation::list_consultations)
                .post(handlers::consultation::create_consultation),
        )
        .route(
            "/consultations/:id",
            delete(handlers::consultation::delete_consultation),
        )
}
