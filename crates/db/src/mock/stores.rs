use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use marquee_core::errors::BookingResult;
use marquee_core::models::schedule::{Schedule, ScheduleUpdated, Showtime, Weekday};
use marquee_core::models::seat::SeatRef;
use marquee_core::models::ticket::Ticket;
use marquee_core::models::venue::Venue;

use crate::store::{BookingOrder, NewShowtime, NewVenue, TicketStore, TimetableStore, VenueStore};

// Mock store for testing failure paths the in-memory backend cannot produce
mock! {
    pub Store {}

    #[async_trait]
    impl VenueStore for Store {
        async fn create_venue(&self, venue: NewVenue) -> BookingResult<Venue>;

        async fn get_venue(&self, id: Uuid) -> BookingResult<Option<Venue>>;
    }

    #[async_trait]
    impl TimetableStore for Store {
        async fn get_or_create_schedule(&self, venue_id: Uuid) -> BookingResult<Schedule>;

        async fn get_schedule(&self, venue_id: Uuid) -> BookingResult<Option<Schedule>>;

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

        async fn are_seats_taken(
            &self,
            venue_id: Uuid,
            weekday: Weekday,
            movie_id: Uuid,
            start_time: DateTime<Utc>,
            seats: &[SeatRef],
        ) -> BookingResult<bool>;

        async fn book_seats(&self, order: BookingOrder) -> BookingResult<Ticket>;

        async fn sweep_expired(&self, now: DateTime<Utc>) -> BookingResult<Vec<ScheduleUpdated>>;
    }

    #[async_trait]
    impl TicketStore for Store {
        async fn get_ticket(&self, id: Uuid) -> BookingResult<Option<Ticket>>;

        async fn tickets_by_holder(&self, holder_id: &str) -> BookingResult<Vec<Ticket>>;
    }
}
