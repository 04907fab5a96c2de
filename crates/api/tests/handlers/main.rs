
mod booking_test;
mod middleware_test;
mod schedule_test;
mod sweeper_test;
mod ticket_test;
