use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use marquee_core::models::schedule::{Schedule, ScheduleDay};
use marquee_core::models::seat::{Seat, SeatGroup};
use marquee_core::models::ticket::Ticket;
use marquee_core::models::venue::Venue;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVenue {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub seat_groups: Json<Vec<SeatGroup>>,
    pub created_at: DateTime<Utc>,
}

impl From<DbVenue> for Venue {
    fn from(venue: DbVenue) -> Self {
        Venue {
            id: venue.id,
            name: venue.name,
            location: venue.location,
            seat_groups: venue.seat_groups.0,
            created_at: venue.created_at,
        }
    }
}

/// One schedule document per venue; the seven day buckets live in a single
/// JSONB column so a booking can lock and rewrite the whole week at once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub venue_id: Uuid,
    pub days: Json<Vec<ScheduleDay>>,
    pub created_at: DateTime<Utc>,
}

impl From<DbSchedule> for Schedule {
    fn from(schedule: DbSchedule) -> Self {
        Schedule {
            venue_id: schedule.venue_id,
            days: schedule.days.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTicket {
    pub id: Uuid,
    pub holder_id: String,
    pub movie_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub price: f64,
    pub seats: Json<Vec<Seat>>,
    pub reserved_at: DateTime<Utc>,
}

impl From<DbTicket> for Ticket {
    fn from(ticket: DbTicket) -> Self {
        Ticket {
            id: ticket.id,
            holder_id: ticket.holder_id,
            movie_id: ticket.movie_id,
            venue_id: ticket.venue_id,
            start_time: ticket.start_time,
            duration_minutes: ticket.duration_minutes,
            price: ticket.price,
            seats: ticket.seats.0,
            reserved_at: ticket.reserved_at,
        }
    }
}
