pub mod status_badge;

pub use status_badge::{OrderStatusBadge, PaymentStatusBadge};
