pub mod schedule;
pub mod ticket;
pub mod venue;

use crate::DbPool;

/// Postgres-backed store. Booking and sweeping serialize per venue on the
/// schedule row lock; everything else reads without locking.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
