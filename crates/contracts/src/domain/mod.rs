pub mod a001_offered_service;
pub mod a002_service_location;
pub mod a003_order;
pub mod a004_appointment_slot;
pub mod common;
