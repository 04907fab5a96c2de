use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;
use super::seat::SeatGroup;

/// Canonical weekday labels. Every schedule carries exactly one day bucket
/// per label, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            other => Err(BookingError::InvalidRequest(format!(
                "unknown weekday label: {other}"
            ))),
        }
    }
}

/// A scheduled screening: movie, start instant, duration, price and a seat
/// map frozen from the venue template at scheduling time. Time, duration
/// and venue are never edited in place; a changed showtime is modeled as
/// delete-and-recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showtime {
    pub movie_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub price: f64,
    pub seats: Vec<SeatGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: Weekday,
    pub showtimes: Vec<Showtime>,
}

/// One schedule per venue: seven day buckets in canonical weekday order,
/// created together and never deleted individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub venue_id: Uuid,
    pub days: Vec<ScheduleDay>,
}

impl Schedule {
    /// The empty seven-day skeleton for a venue.
    pub fn new(venue_id: Uuid) -> Self {
        Self {
            venue_id,
            days: Weekday::ALL
                .iter()
                .map(|&day| ScheduleDay {
                    day,
                    showtimes: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn day(&self, day: Weekday) -> Option<&ScheduleDay> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: Weekday) -> Option<&mut ScheduleDay> {
        self.days.iter_mut().find(|d| d.day == day)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShowtimeRequest {
    pub schedule_day: String,
    pub movie_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub price: f64,
}

/// Published whenever a sweep prunes at least one showtime for a venue.
/// Carries the full post-sweep week; subscribers should treat it as a hint
/// to re-fetch rather than authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleUpdated {
    pub venue_id: Uuid,
    pub schedule_days: Vec<ScheduleDay>,
}
