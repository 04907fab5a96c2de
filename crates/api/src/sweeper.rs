//! Periodic removal of showtimes whose occupied window has elapsed.
//!
//! The sweep is the only path that removes showtimes. It runs on a fixed
//! interval independent of request traffic, always completes a pass before
//! the next tick, and publishes one `schedule_updated` event per venue it
//! actually changed. Tickets already issued for a swept showtime are
//! untouched.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use marquee_db::store::TimetableStore;

use crate::ApiState;

/// Runs the sweep loop until the process exits.
pub async fn run(state: Arc<ApiState>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick fires immediately; skip it so startup stays quiet
    ticker.tick().await;

    info!("Expiry sweeper started, running every {:?}", interval);

    loop {
        ticker.tick().await;
        sweep_at(&state, Utc::now()).await;
    }
}

/// One sweep pass at the given instant: prune expired showtimes and notify
/// subscribers about every venue whose schedule changed. Per-venue failures
/// are already isolated inside the store; a failure of the pass as a whole
/// is logged and retried at the next tick.
pub async fn sweep_at(state: &ApiState, now: DateTime<Utc>) {
    match state.store.sweep_expired(now).await {
        Ok(updates) => {
            for update in updates {
                debug!("Pruned expired showtimes for venue {}", update.venue_id);
                // No subscribers is fine; the stream is best-effort
                let _ = state.events.send(update);
            }
        }
        Err(e) => error!("Expiry sweep failed: {}", e),
    }
}
