use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::seat::SeatGroup;

/// A venue and its seat-layout template. The template is the source of
/// truth for the venue's physical layout; showtimes freeze a copy of it at
/// scheduling time and never look back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub seat_groups: Vec<SeatGroup>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenueRequest {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub seat_groups: Vec<SeatGroupSpec>,
}

/// Grid dimensions for one seat group; seats are generated row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatGroupSpec {
    pub group_name: String,
    pub rows: i32,
    pub columns: i32,
}

impl SeatGroupSpec {
    pub fn build(&self) -> SeatGroup {
        SeatGroup::grid(&self.group_name, self.rows, self.columns)
    }
}
