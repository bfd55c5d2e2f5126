//! In-flight request bookkeeping for the booking view model.
//!
//! Kept free of signals so the ordering rules can be checked natively.

use contracts::usecases::u501_booking::{
    BookingError, BookingEvent, BookingWizard, FinalizeResponse, FinalizeTicket, WizardPhase,
};

/// Newest load started for a key (service set, location)
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLoad<K> {
    latest: Option<K>,
}

impl<K> Default for PendingLoad<K> {
    fn default() -> Self {
        Self { latest: None }
    }
}

impl<K: PartialEq> PendingLoad<K> {
    pub fn start(&mut self, key: K) {
        self.latest = Some(key);
    }

    /// Data for the current key is already on hand
    pub fn cancel(&mut self) {
        self.latest = None;
    }

    pub fn is_loading(&self) -> bool {
        self.latest.is_some()
    }

    /// Record a response for `key`; returns whether it still matches `current`.
    ///
    /// Only the newest load clears the flag, so an old response landing
    /// first leaves the spinner up for the one still in flight.
    pub fn finish(&mut self, key: &K, current: Option<&K>) -> bool {
        if self.latest.as_ref() == Some(key) {
            self.latest = None;
        }
        current == Some(key)
    }
}

pub fn is_outstanding(wizard: &BookingWizard, ticket: FinalizeTicket) -> bool {
    wizard.phase() == WizardPhase::Finalizing(ticket)
}

/// Deliver one side of the finalize race; the loser finds its ticket spent
pub fn settle_finalize(
    wizard: &mut BookingWizard,
    ticket: FinalizeTicket,
    result: Result<FinalizeResponse, BookingError>,
) -> Option<BookingEvent> {
    if !is_outstanding(wizard, ticket) {
        log::debug!("finalize ticket {} already settled", ticket.0);
        return None;
    }
    wizard.complete_finalize(ticket, result)
}
