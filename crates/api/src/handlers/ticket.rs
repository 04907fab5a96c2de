use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

use marquee_core::errors::BookingError;
use marquee_core::models::ticket::Ticket;
use marquee_db::store::TicketStore;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn get_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ticket>, AppError> {
    let ticket = state
        .store
        .get_ticket(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Ticket with ID {id} not found")))?;

    Ok(Json(ticket))
}

#[derive(Debug, Deserialize)]
pub struct TicketListQuery {
    pub holder_id: String,
}

#[axum::debug_handler]
pub async fn list_tickets(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<Vec<Ticket>>, AppError> {
    let tickets = state.store.tickets_by_holder(&query.holder_id).await?;

    Ok(Json(tickets))
}
