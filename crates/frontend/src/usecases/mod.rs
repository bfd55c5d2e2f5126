pub mod u501_booking;
