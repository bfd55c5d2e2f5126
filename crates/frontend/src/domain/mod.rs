pub mod a001_offered_service;
pub mod a002_service_location;
pub mod a003_order;
pub mod a004_appointment_slot;

/// Path prefix of the backend's REST surface
pub const REST_PREFIX: &str = "/rest/v1";
