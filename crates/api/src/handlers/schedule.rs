use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use marquee_core::errors::BookingError;
use marquee_core::models::schedule::{CreateShowtimeRequest, Schedule, Showtime, Weekday};
use marquee_db::store::{NewShowtime, TimetableStore};

use crate::{ApiState, middleware::error_handling::AppError};

/// Schedules a showtime on one of the venue's weekdays. The day's existing
/// showtimes are checked for occupied-window overlap (duration plus the
/// turnover buffer); back-to-back scheduling is allowed.
#[axum::debug_handler]
pub async fn create_showtime(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<Uuid>,
    Json(payload): Json<CreateShowtimeRequest>,
) -> Result<Json<Showtime>, AppError> {
    let weekday: Weekday = payload.schedule_day.parse()?;

    if payload.duration_minutes <= 0 {
        return Err(AppError(BookingError::InvalidRequest(
            "duration must be a positive number of minutes".to_string(),
        )));
    }

    let showtime = state
        .store
        .insert_showtime(
            venue_id,
            weekday,
            NewShowtime {
                movie_id: payload.movie_id,
                start_time: payload.start_time,
                duration_minutes: payload.duration_minutes,
                price: payload.price,
            },
        )
        .await?;

    Ok(Json(showtime))
}

/// Returns the venue's full week, creating the empty seven-day skeleton on
/// first access.
#[axum::debug_handler]
pub async fn list_schedule(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<Uuid>,
) -> Result<Json<Schedule>, AppError> {
    let schedule = state.store.get_or_create_schedule(venue_id).await?;

    Ok(Json(schedule))
}

#[derive(Debug, Deserialize)]
pub struct ShowtimeQuery {
    pub movie_id: Uuid,
    pub start_time: DateTime<Utc>,
}

/// Exact showtime lookup by day, movie and start instant.
#[axum::debug_handler]
pub async fn get_showtime(
    State(state): State<Arc<ApiState>>,
    Path((venue_id, day)): Path<(Uuid, String)>,
    Query(query): Query<ShowtimeQuery>,
) -> Result<Json<Showtime>, AppError> {
    let weekday: Weekday = day.parse()?;

    let showtime = state
        .store
        .find_showtime(venue_id, weekday, query.movie_id, query.start_time)
        .await?
        .ok_or_else(|| {
            BookingError::ScheduleNotFound(format!(
                "no showtime for movie {} on {} at {}",
                query.movie_id, weekday, query.start_time
            ))
        })?;

    Ok(Json(showtime))
}
