use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/venues/:id/schedule",
            post(handlers::schedule::create_showtime),
        )
        .route(
            "/api/venues/:id/schedule",
            get(handlers::schedule::list_schedule),
        )
        .route(
            "/api/venues/:id/schedule/:day/showtime",
            get(handlers::schedule::get_showtime),
        )
}
