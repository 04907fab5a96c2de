use async_trait::async_trait;
use eyre::Result;
use sqlx::types::Json;
use sqlx::{PgExecutor, Pool, Postgres};
use uuid::Uuid;

use marquee_core::errors::{BookingError, BookingResult};
use marquee_core::models::ticket::Ticket;

use crate::models::DbTicket;
use crate::store::TicketStore;

use super::PgStore;

/// Takes any executor so the booking transaction can write the ticket
/// inside its own commit scope.
pub async fn insert_ticket<'a>(executor: impl PgExecutor<'a>, ticket: &Ticket) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO tickets
            (id, holder_id, movie_id, venue_id, start_time, duration_minutes, price, seats, reserved_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(ticket.id)
    .bind(&ticket.holder_id)
    .bind(ticket.movie_id)
    .bind(ticket.venue_id)
    .bind(ticket.start_time)
    .bind(ticket.duration_minutes)
    .bind(ticket.price)
    .bind(Json(&ticket.seats))
    .bind(ticket.reserved_at)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn get_ticket_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTicket>> {
    let ticket = sqlx::query_as::<_, DbTicket>(
        r#"
        SELECT id, holder_id, movie_id, venue_id, start_time, duration_minutes, price, seats, reserved_at
        FROM tickets
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(ticket)
}

pub async fn get_tickets_by_holder(pool: &Pool<Postgres>, holder_id: &str) -> Result<Vec<DbTicket>> {
    let tickets = sqlx::query_as::<_, DbTicket>(
        r#"
        SELECT id, holder_id, movie_id, venue_id, start_time, duration_minutes, price, seats, reserved_at
        FROM tickets
        WHERE holder_id = $1
        ORDER BY reserved_at DESC
        "#,
    )
    .bind(holder_id)
    .fetch_all(pool)
    .await?;

    Ok(tickets)
}

#[async_trait]
impl TicketStore for PgStore {
    async fn get_ticket(&self, id: Uuid) -> BookingResult<Option<Ticket>> {
        let ticket = get_ticket_by_id(&self.pool, id)
            .await
            .map_err(BookingError::Storage)?;

        Ok(ticket.map(Ticket::from))
    }

    async fn tickets_by_holder(&self, holder_id: &str) -> BookingResult<Vec<Ticket>> {
        let tickets = get_tickets_by_holder(&self.pool, holder_id)
            .await
            .map_err(BookingError::Storage)?;

        Ok(tickets.into_iter().map(Ticket::from).collect())
    }
}
