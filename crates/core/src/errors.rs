use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Schedule conflict: {0}")]
    Conflict(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(String),

    #[error("Invalid schedule day: {0}")]
    DayInvalid(String),

    #[error("Seats no longer available: {0}")]
    SeatsNoLongerAvailable(String),

    #[error("Invalid seat selection: {0}")]
    InvalidSeatSelection(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

impl BookingError {
    /// Wraps any persistence-layer failure as a `Storage` error.
    pub fn storage(err: impl Into<eyre::Report>) -> Self {
        BookingError::Storage(err.into())
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
