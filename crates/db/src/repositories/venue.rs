use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use marquee_core::errors::{BookingError, BookingResult};
use marquee_core::models::seat::SeatGroup;
use marquee_core::models::venue::Venue;

use crate::models::DbVenue;
use crate::store::{NewVenue, VenueStore};

use super::PgStore;

pub async fn create_venue(
    pool: &Pool<Postgres>,
    name: &str,
    location: &str,
    seat_groups: &[SeatGroup],
) -> Result<DbVenue> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    debug!("Creating venue: id={}, name={}", id, name);

    let venue = sqlx::query_as::<_, DbVenue>(
        r#"
        INSERT INTO venues (id, name, location, seat_groups, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, location, seat_groups, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(location)
    .bind(Json(seat_groups))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(venue)
}

pub async fn get_venue_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbVenue>> {
    let venue = sqlx::query_as::<_, DbVenue>(
        r#"
        SELECT id, name, location, seat_groups, created_at
        FROM venues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

#[async_trait]
impl VenueStore for PgStore {
    async fn create_venue(&self, venue: NewVenue) -> BookingResult<Venue> {
        let row = create_venue(&self.pool, &venue.name, &venue.location, &venue.seat_groups)
            .await
            .map_err(BookingError::Storage)?;

        Ok(row.into())
    }

    async fn get_venue(&self, id: Uuid) -> BookingResult<Option<Venue>> {
        let row = get_venue_by_id(&self.pool, id)
            .await
            .map_err(BookingError::Storage)?;

        Ok(row.map(Venue::from))
    }
}
