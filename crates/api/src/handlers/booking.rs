use std::sync::Arc;

use axum::{Json, extract::State};

use marquee_core::errors::BookingError;
use marquee_core::models::schedule::Weekday;
use marquee_core::models::ticket::{
    AvailabilityRequest, AvailabilityResponse, BookSeatsRequest, Ticket,
};
use marquee_db::store::{BookingOrder, TimetableStore};

use crate::{ApiState, middleware::error_handling::AppError};

/// Read-path availability. Anything that fails to resolve — schedule, day,
/// showtime or an individual seat identity — counts as "not taken"; a
/// single resolved taken seat makes the whole answer true. A `false` here
/// is only a hint: the booking commit re-checks under its own lock.
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    // An unknown day label cannot name a scheduled showtime
    let Ok(weekday) = payload.schedule_day.parse::<Weekday>() else {
        return Ok(Json(AvailabilityResponse {
            are_seats_taken: false,
        }));
    };

    let are_seats_taken = state
        .store
        .are_seats_taken(
            payload.venue_id,
            weekday,
            payload.movie_id,
            payload.start_time,
            &payload.seats,
        )
        .await?;

    Ok(Json(AvailabilityResponse { are_seats_taken }))
}

/// Commits a reservation: availability re-check, seat claim and ticket
/// creation apply atomically per showtime. A `SeatsNoLongerAvailable`
/// response is the expected race outcome — the caller re-queries and may
/// retry with a different seat selection.
#[axum::debug_handler]
pub async fn book_seats(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookSeatsRequest>,
) -> Result<Json<Ticket>, AppError> {
    let weekday = payload
        .schedule_day
        .parse::<Weekday>()
        .map_err(|_| BookingError::DayInvalid(payload.schedule_day.clone()))?;

    let ticket = state
        .store
        .book_seats(BookingOrder {
            venue_id: payload.venue_id,
            weekday,
            movie_id: payload.movie_id,
            start_time: payload.start_time,
            seats: payload.seats,
            holder_id: payload.holder_id,
            duration_minutes: payload.duration_minutes,
        })
        .await?;

    Ok(Json(ticket))
}
