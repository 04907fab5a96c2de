use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/venues", post(handlers::venue::create_venue))
        .route("/api/venues/:id", get(handlers::venue::get_venue))
}
