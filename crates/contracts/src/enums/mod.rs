pub mod order_status;
pub mod payment_status;
pub mod status_label;

pub use order_status::OrderStatus;
pub use payment_status::PaymentStatus;
pub use status_label::{status_label, Severity, StatusLabel};
