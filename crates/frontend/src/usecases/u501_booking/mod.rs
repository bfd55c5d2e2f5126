pub mod api;
pub mod confirmation;
pub mod requests;
pub mod steps;
pub mod view;
pub mod view_model;

pub use confirmation::BookingConfirmationPage;
pub use view::{BookingWizardPage, ComboBookingPage};
