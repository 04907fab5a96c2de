use axum::Json;
use axum::extract::{Path, Query, State};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use marquee_api::handlers;
use marquee_core::errors::BookingError;
use marquee_core::models::schedule::{CreateShowtimeRequest, Weekday};

use crate::test_utils::{TestContext, monday_at};

#[tokio::test]
async fn test_create_showtime_attaches_snapshot() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    let showtime = ctx
        .create_showtime(venue_id, Uuid::new_v4(), monday_at(18, 0), 120)
        .await
        .unwrap()
        .0;

    assert_eq!(showtime.venue_id, venue_id);
    assert_eq!(showtime.seats.len(), 1);
    assert_eq!(showtime.seats[0].group_name, "GroupA");
    assert_eq!(showtime.seats[0].seats.len(), 6);
    assert!(showtime.seats[0].seats.iter().all(|s| !s.taken));
}

#[tokio::test]
async fn test_monday_overlap_scenario() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    // 18:00 for 120 minutes occupies until 20:30 with the turnover buffer
    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();

    // 19:30 falls inside the occupied window
    let conflict = ctx
        .create_showtime(venue_id, movie_id, monday_at(19, 30), 90)
        .await;
    match conflict {
        Err(err) => match err.0 {
            BookingError::Conflict(_) => {}
            other => panic!("Expected Conflict, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the overlapping showtime to be rejected"),
    }

    // 20:30 abuts the window exactly and is allowed
    ctx.create_showtime(venue_id, movie_id, monday_at(20, 30), 60)
        .await
        .unwrap();

    let schedule = handlers::schedule::list_schedule(State(ctx.state.clone()), Path(venue_id))
        .await
        .unwrap()
        .0;
    assert_eq!(schedule.day(Weekday::Monday).unwrap().showtimes.len(), 2);
}

#[tokio::test]
async fn test_create_showtime_rejects_bad_weekday_label() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    let result = handlers::schedule::create_showtime(
        State(ctx.state.clone()),
        Path(venue_id),
        Json(CreateShowtimeRequest {
            schedule_day: "Funday".to_string(),
            movie_id: Uuid::new_v4(),
            start_time: monday_at(18, 0),
            duration_minutes: 120,
            price: 10.0,
        }),
    )
    .await;

    match result {
        Err(err) => match err.0 {
            BookingError::InvalidRequest(_) => {}
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the bad weekday label to be rejected"),
    }
}

#[tokio::test]
async fn test_create_showtime_rejects_non_positive_duration() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    let result = ctx
        .create_showtime(venue_id, Uuid::new_v4(), monday_at(18, 0), 0)
        .await;

    match result {
        Err(err) => match err.0 {
            BookingError::InvalidRequest(_) => {}
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the zero duration to be rejected"),
    }
}

#[tokio::test]
async fn test_create_showtime_rejects_unknown_venue() {
    let ctx = TestContext::new();

    let result = ctx
        .create_showtime(Uuid::new_v4(), Uuid::new_v4(), monday_at(18, 0), 120)
        .await;

    match result {
        Err(err) => match err.0 {
            BookingError::InvalidRequest(_) => {}
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the unknown venue to be rejected"),
    }
}

#[tokio::test]
async fn test_list_schedule_creates_seven_day_skeleton() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    let schedule = handlers::schedule::list_schedule(State(ctx.state.clone()), Path(venue_id))
        .await
        .unwrap()
        .0;

    assert_eq!(schedule.venue_id, venue_id);
    assert_eq!(schedule.days.len(), 7);
    assert!(schedule.days.iter().all(|d| d.showtimes.is_empty()));
}

#[tokio::test]
async fn test_get_showtime_exact_match() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();

    let showtime = handlers::schedule::get_showtime(
        State(ctx.state.clone()),
        Path((venue_id, "Monday".to_string())),
        Query(handlers::schedule::ShowtimeQuery {
            movie_id,
            start_time: monday_at(18, 0),
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(showtime.movie_id, movie_id);

    // Wrong start instant finds nothing
    let missing = handlers::schedule::get_showtime(
        State(ctx.state.clone()),
        Path((venue_id, "Monday".to_string())),
        Query(handlers::schedule::ShowtimeQuery {
            movie_id,
            start_time: monday_at(19, 0),
        }),
    )
    .await;
    match missing {
        Err(err) => match err.0 {
            BookingError::ScheduleNotFound(_) => {}
            other => panic!("Expected ScheduleNotFound, got: {:?}", other),
        },
        Ok(_) => panic!("Expected no showtime at 19:00"),
    }
}
