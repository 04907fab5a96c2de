use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/tickets", get(handlers::ticket::list_tickets))
        .route("/api/tickets/:id", get(handlers::ticket::get_ticket))
}
