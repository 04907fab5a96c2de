pub mod booking;
pub mod events;
pub mod health;
pub mod schedule;
pub mod ticket;
pub mod venue;
