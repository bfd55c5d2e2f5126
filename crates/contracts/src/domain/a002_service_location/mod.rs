pub mod aggregate;

pub use aggregate::ServiceLocation;
