use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::StreamExt;
use futures_util::stream::Stream;
use tokio_stream::wrappers::BroadcastStream;

use crate::ApiState;

/// SSE stream of `schedule_updated` events, emitted whenever the expiry
/// sweep prunes a venue's showtimes. Delivery is fire-and-forget: a
/// subscriber that lags far enough to lose events should re-fetch the
/// schedule rather than trust the stream to be complete.
pub async fn schedule_events(
    State(state): State<Arc<ApiState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|update| async move {
        match update {
            Ok(update) => Event::default()
                .event("schedule_updated")
                .json_data(&update)
                .ok()
                .map(Ok::<_, Infallible>),
            // Lagged receivers drop missed events; the stream stays up
            Err(_) => None,
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
