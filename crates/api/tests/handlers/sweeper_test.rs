use axum::Json;
use axum::extract::{Path, State};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use marquee_api::{handlers, sweeper};
use marquee_core::models::schedule::Weekday;
use marquee_core::models::ticket::BookSeatsRequest;

use crate::test_utils::{TestContext, monday_at, seat_ref};

#[tokio::test]
async fn test_sweep_prunes_and_publishes_one_event() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();
    let ticket = handlers::booking::book_seats(
        State(ctx.state.clone()),
        Json(BookSeatsRequest {
            venue_id,
            schedule_day: "Monday".to_string(),
            movie_id,
            start_time: monday_at(18, 0),
            seats: vec![seat_ref("GroupA", 0, 0)],
            holder_id: "user-1".to_string(),
            duration_minutes: 120,
        }),
    )
    .await
    .unwrap()
    .0;

    // Subscribe before the sweep so the event is observable
    let mut rx = ctx.state.events.subscribe();

    // Simulated clock just past the occupied window (18:00 + 120 + 30)
    sweeper::sweep_at(&ctx.state, monday_at(20, 30)).await;

    let update = rx.try_recv().expect("Expected one schedule_updated event");
    assert_eq!(update.venue_id, venue_id);
    assert_eq!(update.schedule_days.len(), 7);
    assert!(update.schedule_days.iter().all(|d| d.showtimes.is_empty()));
    assert!(rx.try_recv().is_err());

    // The showtime is gone from the live timetable
    let schedule = handlers::schedule::list_schedule(State(ctx.state.clone()), Path(venue_id))
        .await
        .unwrap()
        .0;
    assert!(schedule.day(Weekday::Monday).unwrap().showtimes.is_empty());

    // The issued ticket is a historical record and survives unchanged
    let kept = handlers::ticket::get_ticket(State(ctx.state.clone()), Path(ticket.id))
        .await
        .unwrap()
        .0;
    assert_eq!(kept, ticket);
}

#[tokio::test]
async fn test_sweep_with_nothing_expired_stays_silent() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    ctx.create_showtime(venue_id, Uuid::new_v4(), monday_at(18, 0), 120)
        .await
        .unwrap();

    let mut rx = ctx.state.events.subscribe();

    // Mid-screening: the occupied window has not elapsed yet
    sweeper::sweep_at(&ctx.state, monday_at(19, 0)).await;

    assert!(rx.try_recv().is_err());

    let schedule = handlers::schedule::list_schedule(State(ctx.state.clone()), Path(venue_id))
        .await
        .unwrap()
        .0;
    assert_eq!(schedule.day(Weekday::Monday).unwrap().showtimes.len(), 1);
}
