//! In-memory store backend. Runs the same `marquee-core` engine functions
//! as the Postgres backend, with a per-venue `Mutex` standing in for the
//! schedule row lock. Backs the test suites and DB-less local runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use marquee_core::booking;
use marquee_core::errors::{BookingError, BookingResult};
use marquee_core::models::schedule::{Schedule, ScheduleUpdated, Showtime, Weekday};
use marquee_core::models::seat::SeatRef;
use marquee_core::models::ticket::Ticket;
use marquee_core::models::venue::Venue;
use marquee_core::timetable;

use crate::store::{BookingOrder, NewShowtime, NewVenue, TicketStore, TimetableStore, VenueStore};

pub struct MemoryStore {
    venues: Mutex<HashMap<Uuid, Venue>>,
    schedules: Mutex<HashMap<Uuid, Arc<Mutex<Schedule>>>>,
    tickets: Mutex<Vec<Ticket>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            venues: Mutex::new(HashMap::new()),
            schedules: Mutex::new(HashMap::new()),
            tickets: Mutex::new(Vec::new()),
        }
    }

    /// The outer map lock is held only long enough to clone the handle;
    /// the handle's own lock is the venue's serialization point.
    async fn schedule_handle(&self, venue_id: Uuid) -> Option<Arc<Mutex<Schedule>>> {
        self.schedules.lock().await.get(&venue_id).cloned()
    }

    async fn schedule_handle_or_create(&self, venue_id: Uuid) -> Arc<Mutex<Schedule>> {
        self.schedules
            .lock()
            .await
            .entry(venue_id)
            .or_insert_with(|| Arc::new(Mutex::new(Schedule::new(venue_id))))
            .clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VenueStore for MemoryStore {
    async fn create_venue(&self, venue: NewVenue) -> BookingResult<Venue> {
        let venue = Venue {
            id: Uuid::new_v4(),
            name: venue.name,
            location: venue.location,
            seat_groups: venue.seat_groups,
            created_at: Utc::now(),
        };

        self.venues.lock().await.insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn get_venue(&self, id: Uuid) -> BookingResult<Option<Venue>> {
        Ok(self.venues.lock().await.get(&id).cloned())
    }
}

#[async_trait]
impl TimetableStore for MemoryStore {
    async fn get_or_create_schedule(&self, venue_id: Uuid) -> BookingResult<Schedule> {
        let handle = self.schedule_handle_or_create(venue_id).await;
        let schedule = handle.lock().await.clone();
        Ok(schedule)
    }

    async fn get_schedule(&self, venue_id: Uuid) -> BookingResult<Option<Schedule>> {
        match self.schedule_handle(venue_id).await {
            Some(handle) => Ok(Some(handle.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn insert_showtime(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        showtime: NewShowtime,
    ) -> BookingResult<Showtime> {
        let template = self
            .venues
            .lock()
            .await
            .get(&venue_id)
            .map(|venue| venue.seat_groups.clone())
            .ok_or_else(|| {
                BookingError::InvalidRequest(format!("venue {venue_id} does not exist"))
            })?;

        let handle = self.schedule_handle_or_create(venue_id).await;
        let mut schedule = handle.lock().await;

        let new_showtime = Showtime {
            movie_id: showtime.movie_id,
            venue_id,
            start_time: showtime.start_time,
            duration_minutes: showtime.duration_minutes,
            price: showtime.price,
            seats: booking::snapshot_layout(&template),
        };

        let day = schedule
            .day_mut(weekday)
            .ok_or_else(|| BookingError::DayInvalid(weekday.to_string()))?;
        timetable::insert_showtime(day, new_showtime.clone())?;

        Ok(new_showtime)
    }

    async fn find_showtime(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        movie_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> BookingResult<Option<Showtime>> {
        let Some(handle) = self.schedule_handle(venue_id).await else {
            return Ok(None);
        };
        let schedule = handle.lock().await;

        Ok(schedule
            .day(weekday)
            .and_then(|day| timetable::find_showtime(day, movie_id, start_time))
            .cloned())
    }

    async fn are_seats_taken(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        movie_id: Uuid,
        start_time: DateTime<Utc>,
        seats: &[SeatRef],
    ) -> BookingResult<bool> {
        // No showtime means nothing is taken
        let Some(showtime) = self
            .find_showtime(venue_id, weekday, movie_id, start_time)
            .await?
        else {
            return Ok(false);
        };

        Ok(booking::any_seat_taken(&showtime, seats))
    }

    async fn book_seats(&self, order: BookingOrder) -> BookingResult<Ticket> {
        let handle = self.schedule_handle(order.venue_id).await.ok_or_else(|| {
            BookingError::ScheduleNotFound(format!("no schedule for venue {}", order.venue_id))
        })?;

        // Per-venue serialization point: the availability re-check and the
        // seat claim happen under one lock acquisition.
        let mut schedule = handle.lock().await;

        let day = schedule
            .day_mut(order.weekday)
            .ok_or_else(|| BookingError::DayInvalid(order.weekday.to_string()))?;

        let showtime = timetable::find_showtime_mut(day, order.movie_id, order.start_time)
            .ok_or_else(|| {
                BookingError::ScheduleNotFound(format!(
                    "no showtime for movie {} at {}",
                    order.movie_id, order.start_time
                ))
            })?;

        let price = showtime.price;
        let committed = booking::claim_seats(showtime, &order.seats)?;

        let ticket = Ticket {
            id: Uuid::new_v4(),
            holder_id: order.holder_id,
            movie_id: order.movie_id,
            venue_id: order.venue_id,
            start_time: order.start_time,
            duration_minutes: order.duration_minutes,
            price,
            seats: committed,
            reserved_at: Utc::now(),
        };

        self.tickets.lock().await.push(ticket.clone());

        Ok(ticket)
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> BookingResult<Vec<ScheduleUpdated>> {
        let handles: Vec<(Uuid, Arc<Mutex<Schedule>>)> = self
            .schedules
            .lock()
            .await
            .iter()
            .map(|(venue_id, handle)| (*venue_id, handle.clone()))
            .collect();

        let mut updates = Vec::new();
        for (venue_id, handle) in handles {
            let mut schedule = handle.lock().await;
            let dropped: usize = schedule
                .days
                .iter_mut()
                .map(|day| timetable::retain_live(day, now))
                .sum();

            if dropped > 0 {
                updates.push(ScheduleUpdated {
                    venue_id,
                    schedule_days: schedule.days.clone(),
                });
            }
        }

        Ok(updates)
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn get_ticket(&self, id: Uuid) -> BookingResult<Option<Ticket>> {
        Ok(self
            .tickets
            .lock()
            .await
            .iter()
            .find(|ticket| ticket.id == id)
            .cloned())
    }

    async fn tickets_by_holder(&self, holder_id: &str) -> BookingResult<Vec<Ticket>> {
        Ok(self
            .tickets
            .lock()
            .await
            .iter()
            .filter(|ticket| ticket.holder_id == holder_id)
            .cloned()
            .collect())
    }
}
