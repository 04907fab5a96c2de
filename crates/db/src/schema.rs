use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create venues table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id UUID PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            location VARCHAR(255) NOT NULL,
            seat_groups JSONB NOT NULL DEFAULT '[]'::jsonb,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedules table: one row per venue, seven day buckets as JSONB
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            venue_id UUID PRIMARY KEY REFERENCES venues(id),
            days JSONB NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create tickets table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tickets (
            id UUID PRIMARY KEY,
            holder_id VARCHAR(255) NOT NULL,
            movie_id UUID NOT NULL,
            venue_id UUID NOT NULL REFERENCES venues(id),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            duration_minutes INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            seats JSONB NOT NULL,
            reserved_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tickets_holder_id ON tickets(holder_id);
        CREATE INDEX IF NOT EXISTS idx_tickets_venue_id ON tickets(venue_id);
        CREATE INDEX IF NOT EXISTS idx_tickets_reserved_at ON tickets(reserved_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
