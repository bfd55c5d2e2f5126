pub mod aggregate;

pub use aggregate::{OfferedService, ServiceCombo};
