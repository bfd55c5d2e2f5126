use super::step::WizardStep;
use serde::{Deserialize, Serialize};

/// Identifies one finalize attempt; results for older tickets are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinalizeTicket(pub u64);

/// Transitions emitted by the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingEvent {
    StepChanged {
        from: WizardStep,
        to: WizardStep,
    },

    /// Step 4 passed its gate; the caller must submit the order
    FinalizeRequested {
        ticket: FinalizeTicket,
    },

    /// Order confirmed; the wizard is closed
    Completed {
        order_number: String,
    },

    FinalizeFailed {
        ticket: FinalizeTicket,
        message: String,
    },

    /// Back from the first step; the wizard is closed
    Abandoned,
}
