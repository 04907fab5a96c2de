//! # Marquee Core
//!
//! Domain models and the pure scheduling/booking engine for the Marquee
//! venue-booking service. Everything in this crate is synchronous and
//! side-effect free; persistence and serialization of state live in the
//! `marquee-db` crate, the HTTP surface in `marquee-api`.

/// Seat snapshotting, availability resolution and seat claims
pub mod booking;
/// Domain error taxonomy
pub mod errors;
/// Domain models and request/response types
pub mod models;
/// Weekly timetable operations: windows, overlap validation, expiry
pub mod timetable;
