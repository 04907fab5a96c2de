use serde::{Deserialize, Serialize};

/// One seat inside a showtime's seat map. The group name is stamped onto
/// every seat so a seat can be identified without walking back to its
/// owning group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub group_name: String,
    pub row: i32,
    pub column: i32,
    pub taken: bool,
}

/// A named block of seats laid out as a grid. Used both as a venue's layout
/// template entry and, copied by value, as a showtime's frozen seat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatGroup {
    pub group_name: String,
    pub rows: i32,
    pub columns: i32,
    pub seats: Vec<Seat>,
}

impl SeatGroup {
    /// Builds a full grid of untaken seats, row-major.
    pub fn grid(group_name: &str, rows: i32, columns: i32) -> Self {
        let mut seats = Vec::with_capacity((rows * columns).max(0) as usize);
        for row in 0..rows {
            for column in 0..columns {
                seats.push(Seat {
                    group_name: group_name.to_string(),
                    row,
                    column,
                    taken: false,
                });
            }
        }

        Self {
            group_name: group_name.to_string(),
            rows,
            columns,
            seats,
        }
    }

    pub fn seat(&self, row: i32, column: i32) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|seat| seat.row == row && seat.column == column)
    }

    pub fn seat_mut(&mut self, row: i32, column: i32) -> Option<&mut Seat> {
        self.seats
            .iter_mut()
            .find(|seat| seat.row == row && seat.column == column)
    }
}

/// A requested seat identity: `(group, row, column)` within one showtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRef {
    pub group_name: String,
    pub row: i32,
    pub column: i32,
}

impl std::fmt::Display for SeatRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}:{}", self.group_name, self.row, self.column)
    }
}
