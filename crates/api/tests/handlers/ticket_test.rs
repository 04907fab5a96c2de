use axum::Json;
use axum::extract::{Path, Query, State};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use marquee_api::handlers;
use marquee_core::errors::BookingError;
use marquee_core::models::ticket::BookSeatsRequest;

use crate::test_utils::{TestContext, monday_at, seat_ref};

async fn book_one(
    ctx: &TestContext,
    venue_id: Uuid,
    movie_id: Uuid,
    holder_id: &str,
    column: i32,
) -> Uuid {
    let ticket = handlers::booking::book_seats(
        State(ctx.state.clone()),
        Json(BookSeatsRequest {
            venue_id,
            schedule_day: "Monday".to_string(),
            movie_id,
            start_time: monday_at(18, 0),
            seats: vec![seat_ref("GroupA", 0, column)],
            holder_id: holder_id.to_string(),
            duration_minutes: 120,
        }),
    )
    .await
    .unwrap()
    .0;

    ticket.id
}

#[tokio::test]
async fn test_get_ticket_by_id() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();
    let ticket_id = book_one(&ctx, venue_id, movie_id, "user-1", 0).await;

    let ticket = handlers::ticket::get_ticket(State(ctx.state.clone()), Path(ticket_id))
        .await
        .unwrap()
        .0;

    assert_eq!(ticket.id, ticket_id);
    assert_eq!(ticket.holder_id, "user-1");
    assert_eq!(ticket.venue_id, venue_id);
}

#[tokio::test]
async fn test_get_unknown_ticket_is_not_found() {
    let ctx = TestContext::new();

    let result =
        handlers::ticket::get_ticket(State(ctx.state.clone()), Path(Uuid::new_v4())).await;

    match result {
        Err(err) => match err.0 {
            BookingError::NotFound(_) => {}
            other => panic!("Expected NotFound, got: {:?}", other),
        },
        Ok(_) => panic!("Expected the unknown ticket id to be rejected"),
    }
}

#[tokio::test]
async fn test_list_tickets_by_holder() {
    let ctx = TestContext::new();
    let venue_id = ctx.seed_venue().await;
    let movie_id = Uuid::new_v4();

    ctx.create_showtime(venue_id, movie_id, monday_at(18, 0), 120)
        .await
        .unwrap();
    book_one(&ctx, venue_id, movie_id, "user-1", 0).await;
    book_one(&ctx, venue_id, movie_id, "user-22", 1).await;

    let tickets = handlers::ticket::list_tickets(
        State(ctx.state.clone()),
        Query(handlers::ticket::TicketListQuery {
            holder_id: "user-1".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].holder_id, "user-1");

    let none = handlers::ticket::list_tickets(
        State(ctx.state.clone()),
        Query(handlers::ticket::TicketListQuery {
            holder_id: "user-3".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;
    assert!(none.is_empty());
}
