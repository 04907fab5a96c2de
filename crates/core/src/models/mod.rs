pub mod schedule;
pub mod seat;
pub mod ticket;
pub mod venue;
