//! Seat snapshotting, availability resolution and the all-or-nothing seat
//! claim that backs the reservation commit.

use crate::errors::{BookingError, BookingResult};
use crate::models::schedule::Showtime;
use crate::models::seat::{Seat, SeatGroup, SeatRef};

/// Deep-copies a venue's layout template into a fresh per-showtime seat
/// map. Every seat comes out untaken with its group name stamped on, so
/// later template edits never leak into an already-scheduled showtime.
pub fn snapshot_layout(template: &[SeatGroup]) -> Vec<SeatGroup> {
    template
        .iter()
        .map(|group| SeatGroup {
            group_name: group.group_name.clone(),
            rows: group.rows,
            columns: group.columns,
            seats: group
                .seats
                .iter()
                .map(|seat| Seat {
                    group_name: group.group_name.clone(),
                    row: seat.row,
                    column: seat.column,
                    taken: false,
                })
                .collect(),
        })
        .collect()
}

fn resolve<'a>(showtime: &'a Showtime, seat: &SeatRef) -> Option<&'a Seat> {
    showtime
        .seats
        .iter()
        .find(|group| group.group_name == seat.group_name)
        .and_then(|group| group.seat(seat.row, seat.column))
}

fn resolve_mut<'a>(showtime: &'a mut Showtime, seat: &SeatRef) -> Option<&'a mut Seat> {
    showtime
        .seats
        .iter_mut()
        .find(|group| group.group_name == seat.group_name)
        .and_then(|group| group.seat_mut(seat.row, seat.column))
}

/// Read-path availability: true as soon as any requested seat resolves to
/// a taken one. Identities that do not resolve count as free.
pub fn any_seat_taken(showtime: &Showtime, seats: &[SeatRef]) -> bool {
    seats
        .iter()
        .any(|r| resolve(showtime, r).is_some_and(|seat| seat.taken))
}

/// Marks every requested seat taken, or mutates nothing at all: an
/// identity that does not resolve fails the whole claim, as does a seat
/// someone already holds. The caller must hold the venue's serialization
/// point for the duration. Returns the seats as committed.
pub fn claim_seats(showtime: &mut Showtime, seats: &[SeatRef]) -> BookingResult<Vec<Seat>> {
    for r in seats {
        match resolve(showtime, r) {
            None => {
                return Err(BookingError::InvalidSeatSelection(format!(
                    "seat {r} does not exist for this showtime"
                )));
            }
            Some(seat) if seat.taken => {
                return Err(BookingError::SeatsNoLongerAvailable(format!(
                    "seat {r} is already taken"
                )));
            }
            Some(_) => {}
        }
    }

    let mut committed = Vec::with_capacity(seats.len());
    for r in seats {
        // Verified free above, and nothing else can interleave here.
        if let Some(seat) = resolve_mut(showtime, r) {
            seat.taken = true;
            committed.push(seat.clone());
        }
    }

    Ok(committed)
}
