use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use tracing::{debug, error};
use uuid::Uuid;

use marquee_core::booking;
use marquee_core::errors::{BookingError, BookingResult};
use marquee_core::models::schedule::{Schedule, ScheduleUpdated, Showtime, Weekday};
use marquee_core::models::seat::SeatRef;
use marquee_core::models::ticket::Ticket;
use marquee_core::timetable;

use crate::models::DbSchedule;
use crate::store::{BookingOrder, NewShowtime, TimetableStore};

use super::{PgStore, ticket, venue};

pub async fn get_or_create_schedule(pool: &Pool<Postgres>, venue_id: Uuid) -> Result<DbSchedule> {
    debug!("Fetching schedule for venue {}", venue_id);

    // A concurrent first caller wins the insert; everyone observes one row.
    let skeleton = Schedule::new(venue_id);
    sqlx::query(
        r#"
        INSERT INTO schedules (venue_id, days, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (venue_id) DO NOTHING
        "#,
    )
    .bind(venue_id)
    .bind(Json(skeleton.days))
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT venue_id, days, created_at
        FROM schedules
        WHERE venue_id = $1
        "#,
    )
    .bind(venue_id)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedule_by_venue(
    pool: &Pool<Postgres>,
    venue_id: Uuid,
) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT venue_id, days, created_at
        FROM schedules
        WHERE venue_id = $1
        "#,
    )
    .bind(venue_id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// One venue's sweep as its own locked transaction, so a failure here
/// cannot poison the sweep of other venues.
async fn sweep_venue(
    pool: &Pool<Postgres>,
    venue_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Option<ScheduleUpdated>> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT venue_id, days, created_at
        FROM schedules
        WHERE venue_id = $1
        FOR UPDATE
        "#,
    )
    .bind(venue_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut schedule: Schedule = row.into();
    let dropped: usize = schedule
        .days
        .iter_mut()
        .map(|day| timetable::retain_live(day, now))
        .sum();

    if dropped == 0 {
        return Ok(None);
    }

    sqlx::query(
        r#"
        UPDATE schedules
        SET days = $2
        WHERE venue_id = $1
        "#,
    )
    .bind(venue_id)
    .bind(Json(schedule.days.clone()))
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    debug!("Removed {} expired showtimes for venue {}", dropped, venue_id);

    Ok(Some(ScheduleUpdated {
        venue_id,
        schedule_days: schedule.days,
    }))
}

#[async_trait]
impl TimetableStore for PgStore {
    async fn get_or_create_schedule(&self, venue_id: Uuid) -> BookingResult<Schedule> {
        let schedule = get_or_create_schedule(&self.pool, venue_id)
            .await
            .map_err(BookingError::Storage)?;

        Ok(schedule.into())
    }

    async fn get_schedule(&self, venue_id: Uuid) -> BookingResult<Option<Schedule>> {
        let schedule = get_schedule_by_venue(&self.pool, venue_id)
            .await
            .map_err(BookingError::Storage)?;

        Ok(schedule.map(Schedule::from))
    }

    async fn insert_showtime(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        showtime: NewShowtime,
    ) -> BookingResult<Showtime> {
        // The snapshot is copied from the template as it stands right now
        let template = venue::get_venue_by_id(&self.pool, venue_id)
            .await
            .map_err(BookingError::Storage)?
            .ok_or_else(|| {
                BookingError::InvalidRequest(format!("venue {venue_id} does not exist"))
            })?
            .seat_groups
            .0;

        // Make sure the row exists before taking the row lock
        get_or_create_schedule(&self.pool, venue_id)
            .await
            .map_err(BookingError::Storage)?;

        let mut tx = self.pool.begin().await.map_err(BookingError::storage)?;

        let row = sqlx::query_as::<_, DbSchedule>(
            r#"
            SELECT venue_id, days, created_at
            FROM schedules
            WHERE venue_id = $1
            FOR UPDATE
            "#,
        )
        .bind(venue_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(BookingError::storage)?;

        let mut schedule: Schedule = row.into();

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

        sqlx::query(
            r#"
            UPDATE schedules
            SET days = $2
            WHERE venue_id = $1
            "#,
        )
        .bind(venue_id)
        .bind(Json(schedule.days))
        .execute(&mut *tx)
        .await
        .map_err(BookingError::storage)?;

        tx.commit().await.map_err(BookingError::storage)?;

        Ok(new_showtime)
    }

    async fn find_showtime(
        &self,
        venue_id: Uuid,
        weekday: Weekday,
        movie_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> BookingResult<Option<Showtime>> {
        let Some(schedule) = self.get_schedule(venue_id).await? else {
            return Ok(None);
        };

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
        let mut tx = self.pool.begin().await.map_err(BookingError::storage)?;

        // Row lock is the per-venue serialization point: the availability
        // re-check and the seat claim cannot interleave with another order.
        let row = sqlx::query_as::<_, DbSchedule>(
            r#"
            SELECT venue_id, days, created_at
            FROM schedules
            WHERE venue_id = $1
            FOR UPDATE
            "#,
        )
        .bind(order.venue_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(BookingError::storage)?;

        let Some(row) = row else {
            return Err(BookingError::ScheduleNotFound(format!(
                "no schedule for venue {}",
                order.venue_id
            )));
        };

        let mut schedule: Schedule = row.into();
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

        sqlx::query(
            r#"
            UPDATE schedules
            SET days = $2
            WHERE venue_id = $1
            "#,
        )
        .bind(order.venue_id)
        .bind(Json(schedule.days))
        .execute(&mut *tx)
        .await
        .map_err(BookingError::storage)?;

        let new_ticket = Ticket {
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
        ticket::insert_ticket(&mut *tx, &new_ticket)
            .await
            .map_err(BookingError::Storage)?;

        tx.commit().await.map_err(BookingError::storage)?;

        Ok(new_ticket)
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> BookingResult<Vec<ScheduleUpdated>> {
        let venue_ids: Vec<Uuid> = sqlx::query_scalar("SELECT venue_id FROM schedules")
            .fetch_all(&self.pool)
            .await
            .map_err(BookingError::storage)?;

        let mut updates = Vec::new();
        for venue_id in venue_ids {
            match sweep_venue(&self.pool, venue_id, now).await {
                Ok(Some(update)) => updates.push(update),
                Ok(None) => {}
                // One venue failing must not abort the sweep for the rest
                Err(e) => error!("Sweep failed for venue {}: {}", venue_id, e),
            }
        }

        Ok(updates)
    }
}
