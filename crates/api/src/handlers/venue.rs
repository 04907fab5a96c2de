use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use marquee_core::errors::BookingError;
use marquee_core::models::venue::{CreateVenueRequest, Venue};
use marquee_db::store::{NewVenue, VenueStore};

use crate::{ApiState, middleware::error_handling::AppError};

/// Seeds a venue with its seat-layout template. Each seat-group spec
/// expands into a full grid of untaken seats; showtimes scheduled later
/// freeze a copy of whatever the template looks like at that moment.
#[axum::debug_handler]
pub async fn create_venue(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateVenueRequest>,
) -> Result<Json<Venue>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::InvalidRequest(
            "venue name must not be empty".to_string(),
        )));
    }

    for spec in &payload.seat_groups {
        if spec.rows <= 0 || spec.columns <= 0 {
            return Err(AppError(BookingError::InvalidRequest(format!(
                "seat group {} must have positive dimensions",
                spec.group_name
            ))));
        }
    }

    let venue = state
        .store
        .create_venue(NewVenue {
            name: payload.name,
            location: payload.location,
            seat_groups: payload.seat_groups.iter().map(|spec| spec.build()).collect(),
        })
        .await?;

    Ok(Json(venue))
}

#[axum::debug_handler]
pub async fn get_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Venue>, AppError> {
    let venue = state
        .store
        .get_venue(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Venue with ID {id} not found")))?;

    Ok(Json(venue))
}
