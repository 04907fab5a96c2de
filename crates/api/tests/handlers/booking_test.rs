use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use marquee_api::handlers;
use marquee_core::errors::BookingError;
use marquee_core::models::ticket::{AvailabilityRequest, BookSeatsRequest};
use marquee_db::mock::stores::MockStore;

use crate::test_utils::{TestContext, monday_at, seat_ref};

fn availability_request(venue_id: Uuid, movie_id: Uuid) -> AvailabilityRequest {
    AvailabilityRequest {
        venue_id,
        schedule_day: "Monday".to_string(),
        movie_id,
        start_time: monday_at(18, 0),
        seats: vec![seat_ref("GroupA", 0, 0)],
    }
}

fn book_request(venue_id: Uuid, movie_id: Uuid) -> BookSeatsRequest {
    BookSeatsRequest {
        venue_id,
        schedule_day: "Monday".to_string(),
        movie_id,
        start_time: monday_at(18, 0),
        seats: vec![seat_ref("GroupA", 0, 0)],
        holder_id: "user-1".to_string(),
        duration_minutes: 120,
    }
}

#[tokio::test]
async fn test_booking_flow_flips_availability() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();

    let response = handlers::booking::check_availability(
        State(ctx.state.clone()),
        Json(availability_request(venue_id, movie_id)),
    )
    .await
    .unwrap()
    .0;
    assert!(!response.are_seats_taken);

    let ticket = handlers::booking::book_seats(
        State(ctx.state.clone()),
        Json(book_request(venue_id, movie_id)),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(ticket.holder_id, "user-1");
    assert_eq!(ticket.seats.len(), 1);
    assert!(ticket.seats[0].taken);
    assert_eq!(ticket.price, 10.0);

    let response = handlers::booking::check_availability(
        State(ctx.state.clone()),
        Json(availability_request(venue_id, movie_id)),
    )
    .await
    .unwrap()
    .0;
    assert!(response.are_seats_taken);
}

#[tokio::test]
async fn test_rebooking_a_taken_seat_fails() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();

    handlers::booking::book_seats(
        State(ctx.state.clone()),
        Json(book_request(venue_id, movie_id)),
    )
    .await
    .unwrap();

    let result = handlers::booking::book_seats(
        State(ctx.state.clone()),
        Json(book_request(venue_id, movie_id)),
    )
    .await;

    match result {
        Err(err) => match err.0 {
            BookingError::SeatsNoLongerAvailable(_) => {}
            other => panic!("Expected SeatsNoLongerAvailable, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the second booking to fail"),
    }
}

#[tokio::test]
async fn test_booking_unresolved_seat_is_rejected() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();

    let mut request = book_request(venue_id, movie_id);
    request.seats.push(seat_ref("Balcony", 4, 4));

    let result =
        handlers::booking::book_seats(State(ctx.state.clone()), Json(request)).await;

    match result {
        Err(err) => match err.0 {
            BookingError::InvalidSeatSelection(_) => {}
            other => panic!("Expected InvalidSeatSelection, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the unresolved seat to be rejected"),
    }

    // The resolvable seat from the same request must still be free
    let response = handlers::booking::check_availability(
        State(ctx.state.clone()),
        Json(availability_request(venue_id, movie_id)),
    )
    .await
    .unwrap()
    .0;
    assert!(!response.are_seats_taken);
}

#[tokio::test]
async fn test_availability_with_unknown_day_label_is_false() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    let mut request = availability_request(venue_id, Uuid::new_v4());
    request.schedule_day = "Funday".to_string();

    let response =
        handlers::booking::check_availability(State(ctx.state.clone()), Json(request))
            .await
            .unwrap()
            .0;

    assert!(!response.are_seats_taken);
}

#[tokio::test]
async fn test_booking_with_unknown_day_label_is_day_invalid() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;

    let mut request = book_request(venue_id, Uuid::new_v4());
    request.schedule_day = "Funday".to_string();

    let result =
        handlers::booking::book_seats(State(ctx.state.clone()), Json(request)).await;

    match result {
        Err(err) => match err.0 {
            BookingError::DayInvalid(_) => {}
            other => panic!("Expected DayInvalid, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the unknown day label to be rejected"),
    }
}

#[tokio::test]
async fn test_storage_failure_maps_to_internal_server_error() {
    let mut mock = MockStore::new();
    mock.expect_book_seats()
        .returning(|_| Err(BookingError::storage(eyre::eyre!("connection refused"))));

    let ctx = TestContext::with_store(Arc::new(mock));

    let result = handlers::booking::book_seats(
        State(ctx.state.clone()),
        Json(book_request(Uuid::new_v4(), Uuid::new_v4())),
    )
    .await;

    let response = result.unwrap_err().into_response();
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
