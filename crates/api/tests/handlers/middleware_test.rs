use marquee_api::middleware::error_handling::map_error;
use marquee_core::errors::BookingError;

use axum::http::StatusCode;

#[tokio::test]
async fn test_error_handling_invalid_request() {
    let error = BookingError::InvalidRequest("bad venue id".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_day_invalid() {
    let error = BookingError::DayInvalid("Funday".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = BookingError::Conflict("overlapping showtime".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_seats_no_longer_available() {
    let error = BookingError::SeatsNoLongerAvailable("GroupA/0:0".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_schedule_not_found() {
    let error = BookingError::ScheduleNotFound("no schedule".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = BookingError::NotFound("ticket".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_invalid_seat_selection() {
    let error = BookingError::InvalidSeatSelection("Balcony/9:9".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_error_handling_storage() {
    let error = BookingError::Storage(eyre::eyre!("connection refused"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
