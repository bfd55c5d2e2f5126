pub mod draft;
pub mod entry;
pub mod error;
pub mod events;
pub mod request;
pub mod response;
pub mod selection;
pub mod step;
pub mod wizard;

pub use draft::{BookingDraft, DraftPatch};
pub use entry::BookingEntry;
pub use error::BookingError;
pub use events::{BookingEvent, FinalizeTicket};
pub use request::FinalizeRequest;
pub use response::FinalizeResponse;
pub use selection::LocationCandidates;
pub use step::WizardStep;
pub use wizard::{BookingWizard, WizardPhase};

use crate::usecases::common::UseCaseMetadata;

pub struct Booking;

impl UseCaseMetadata for Booking {
    fn display_name() -> &'static str {
        "Agendar exames"
    }

    fn description() -> &'static str {
        "Exames, unidade, agendamento e pagamento em quatro passos"
    }
}
