pub mod common;
pub mod u501_booking;
