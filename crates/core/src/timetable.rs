//! Weekly timetable operations: occupied windows, overlap validation,
//! exact showtime lookup and expiry partitioning. These functions are the
//! single source of scheduling semantics; every store backend runs them.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::schedule::{ScheduleDay, Showtime};

/// Turnover time added after every screening before the hall is free again.
pub const TURNOVER_BUFFER_MINUTES: i64 = 30;

/// Occupied window for a screening starting at `start`:
/// `[start, start + duration + buffer)`, half-open.
pub fn window_for(start: DateTime<Utc>, duration_minutes: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = start + Duration::minutes(i64::from(duration_minutes) + TURNOVER_BUFFER_MINUTES);
    (start, end)
}

pub fn occupied_window(showtime: &Showtime) -> (DateTime<Utc>, DateTime<Utc>) {
    window_for(showtime.start_time, showtime.duration_minutes)
}

/// Half-open interval intersection. Exact abutment (one window starting
/// the instant another ends) does not count as an overlap.
pub fn windows_overlap(
    a: (DateTime<Utc>, DateTime<Utc>),
    b: (DateTime<Utc>, DateTime<Utc>),
) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// Whether a candidate window fits into the day without touching any
/// existing showtime's occupied window.
pub fn can_insert(day: &ScheduleDay, candidate: (DateTime<Utc>, DateTime<Utc>)) -> bool {
    day.showtimes
        .iter()
        .all(|existing| !windows_overlap(occupied_window(existing), candidate))
}

/// Appends the showtime to the day, rejecting any occupied-window overlap.
/// On `Conflict` the day's showtime list is left untouched.
pub fn insert_showtime(day: &mut ScheduleDay, showtime: Showtime) -> BookingResult<()> {
    let candidate = occupied_window(&showtime);
    if !can_insert(day, candidate) {
        return Err(BookingError::Conflict(format!(
            "showtime at {} overlaps an existing showtime on {}",
            showtime.start_time, day.day
        )));
    }

    day.showtimes.push(showtime);
    Ok(())
}

/// Start instants are compared at second precision; sub-second noise from
/// callers is ignored.
pub fn same_start(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.timestamp() == b.timestamp()
}

/// Exact lookup by movie and start instant; no fuzzy matching.
pub fn find_showtime(
    day: &ScheduleDay,
    movie_id: Uuid,
    start_time: DateTime<Utc>,
) -> Option<&Showtime> {
    day.showtimes
        .iter()
        .find(|s| s.movie_id == movie_id && same_start(s.start_time, start_time))
}

pub fn find_showtime_mut(
    day: &mut ScheduleDay,
    movie_id: Uuid,
    start_time: DateTime<Utc>,
) -> Option<&mut Showtime> {
    day.showtimes
        .iter_mut()
        .find(|s| s.movie_id == movie_id && same_start(s.start_time, start_time))
}

/// Drops every showtime whose occupied window fully precedes `now` and
/// returns how many were removed.
pub fn retain_live(day: &mut ScheduleDay, now: DateTime<Utc>) -> usize {
    let before = day.showtimes.len();
    day.showtimes.retain(|s| now < occupied_window(s).1);
    before - day.showtimes.len()
}
