use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::seat::{Seat, SeatRef};

/// An immutable record of a committed reservation. The seat list is the
/// set of seats this commit actually transitioned to taken. Tickets are
/// historical records: they outlive the showtime they were issued for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub holder_id: String,
    pub movie_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub price: f64,
    pub seats: Vec<Seat>,
    pub reserved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub venue_id: Uuid,
    pub schedule_day: String,
    pub movie_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub seats: Vec<SeatRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub are_seats_taken: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSeatsRequest {
    pub venue_id: Uuid,
    pub schedule_day: String,
    pub movie_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub seats: Vec<SeatRef>,
    pub holder_id: String,
    pub duration_minutes: i32,
}
