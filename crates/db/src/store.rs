//! Store seams the API layer talks through. `repositories::PgStore` is the
//! Postgres implementation, `memory::MemoryStore` the in-memory one used by
//! tests and DB-less local runs; both run the same `marquee-core` engine
//! functions, so their semantics cannot drift apart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use marquee_core::errors::BookingResult;
use marquee_core::models::schedule::{Schedule, ScheduleUpdated, Showtime, Weekday};
use marquee_core::models::seat::{SeatGroup, SeatRef};
use marquee_core::models::ticket::Ticket;
use marquee_core::models::venue::Venue;

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub location: String,
    pub seat_groups: Vec<SeatGroup>,
}

/// A showtime to be scheduled; the seat snapshot is attached by the store
/// from the venue's current template.
#[derive(Debug, Clone)]
pub struct NewShowtime {
    pub movie_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct BookingOrder {
    pub venue_id: Uuid,
    pub weekday: Weekday,
    pub movie_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub seats: Vec<SeatRef>,
    pub holder_id: String,
    pub duration_minutes: i32,
}

#[async_trait]
pub trait VenueStore: Send + Sync {
    async fn create_venue(&self, venue: NewVenue) -> BookingResult<Venue>;

    async fn get_venue(&self, id: Uuid) -> BookingResult<Option<Venue>>;
}

#[async_trait]
pub trait TimetableStore: Send + Sync {
    /// Returns the venue's schedule, creating the seven-day skeleton on
    /// first use. Idempotent under concurrent calls for the same venue.
    async fn get_or_create_schedule(&self, venue_id: Uuid) -> BookingResult<Schedule>;

    async fn get_schedule(&self, venue_id: Uuid) -> BookingResult<Option<Schedule>>;

    /// Validates the occupied window against the day and appends the
    /// showtime with a fresh seat snapshot attached.
    async fn insert_showtime(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        showtime: NewShowtime,
    ) -> BookingResult<Showtime>;

    async fn find_showtime(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        movie_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> BookingResult<Option<Showtime>>;

    /// Read-path availability; never mutates, absent schedule/day/showtime
    /// answers false.
    async fn are_seats_taken(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        movie_id: Uuid,
        start_time: DateTime<Utc>,
        seats: &[SeatRef],
    ) -> BookingResult<bool>;

    /// Availability re-check, seat claim and ticket creation applied as one
    /// transaction under the venue's serialization point. Two concurrent
    /// orders for the same seat: exactly one wins.
    async fn book_seats(&self, order: BookingOrder) -> BookingResult<Ticket>;

    /// Removes showtimes whose occupied window has fully elapsed and
    /// returns one update record per venue that actually changed. A venue
    /// that fails to sweep is logged and skipped, never aborting the rest.
    async fn sweep_expired(&self, now: DateTime<Utc>) -> BookingResult<Vec<ScheduleUpdated>>;
}

#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn get_ticket(&self, id: Uuid) -> BookingResult<Option<Ticket>>;

    async fn tickets_by_holder(&self, holder_id: &str) -> BookingResult<Vec<Ticket>>;
}

pub trait Store: VenueStore + TimetableStore + TicketStore {}

impl<T: VenueStore + TimetableStore + TicketStore> Store for T {}
