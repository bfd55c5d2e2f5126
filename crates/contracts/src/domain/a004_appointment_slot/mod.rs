pub mod aggregate;

pub use aggregate::{AppointmentSlot, AvailableSlots};
