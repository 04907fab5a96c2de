use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings", post(handlers::booking::book_seats))
        .route(
            "/api/bookings/availability",
            post(handlers::booking::check_availability),
        )
}
