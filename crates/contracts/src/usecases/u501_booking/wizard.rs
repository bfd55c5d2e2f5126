//! Booking wizard state machine.
//!
//! `BookingWizard` owns the current step and the draft. All mutations go
//! through it, so step gating holds no matter what the UI enables. Network
//! calls stay outside: the wizard emits `FinalizeRequested` with a ticket and
//! the caller reports the outcome back through `complete_finalize`.

use super::draft::{BookingDraft, DraftPatch};
use super::entry::BookingEntry;
use super::error::BookingError;
use super::events::{BookingEvent, FinalizeTicket};
use super::request::FinalizeRequest;
use super::response::FinalizeResponse;
use super::selection::{self, LocationCandidates};
use super::step::WizardStep;
use crate::domain::a001_offered_service::{OfferedService, ServiceCombo};
use crate::domain::a004_appointment_slot::AvailableSlots;
use crate::domain::common::{LocationId, ServiceId};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing,
    /// Order submitted, waiting for the order service
    Finalizing(FinalizeTicket),
    /// Order confirmed (terminal)
    Completed,
    /// Left from the first step (terminal)
    Abandoned,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
    phase: WizardPhase,
    /// Services performed at the chosen location
    location_services: Option<BTreeSet<ServiceId>>,
    last_error: Option<BookingError>,
    next_ticket: u64,
    idempotency_key: Uuid,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(BookingDraft::default())
    }
}

impl BookingWizard {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            step: WizardStep::FIRST,
            draft,
            phase: WizardPhase::Editing,
            location_services: None,
            last_error: None,
            next_ticket: 1,
            idempotency_key: Uuid::new_v4(),
        }
    }

    pub fn from_entry(entry: &BookingEntry) -> Self {
        Self::new(entry.initial_draft())
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&BookingError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn is_finalizing(&self) -> bool {
        matches!(self.phase, WizardPhase::Finalizing(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, WizardPhase::Completed | WizardPhase::Abandoned)
    }

    pub fn can_proceed(&self, step: WizardStep) -> bool {
        self.draft.is_complete(step)
    }

    /// First step up to and including `step` whose data is missing
    fn first_incomplete_through(&self, step: WizardStep) -> Option<WizardStep> {
        WizardStep::all()
            .into_iter()
            .filter(|s| *s <= step)
            .find(|s| !self.can_proceed(*s))
    }

    /// Whether the "next" control should be enabled
    pub fn can_advance(&self) -> bool {
        self.phase == WizardPhase::Editing && self.first_incomplete_through(self.step).is_none()
    }

    pub fn can_retreat(&self) -> bool {
        self.phase == WizardPhase::Editing
    }

    fn ensure_editable(&self) -> Result<(), BookingError> {
        match self.phase {
            WizardPhase::Editing => Ok(()),
            WizardPhase::Finalizing(_) => Err(BookingError::FinalizeInProgress),
            WizardPhase::Completed | WizardPhase::Abandoned => Err(BookingError::WizardClosed),
        }
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    /// Move forward if the current step is complete; on the last step this
    /// starts finalization instead.
    pub fn advance(&mut self) -> Option<BookingEvent> {
        if self.phase != WizardPhase::Editing {
            log::debug!("advance ignored in phase {:?}", self.phase);
            return None;
        }
        if let Some(open) = self.first_incomplete_through(self.step) {
            log::debug!("advance blocked: step {} incomplete", open.number());
            return None;
        }

        self.last_error = None;
        match self.step.next() {
            Some(next) => {
                let from = self.step;
                self.step = next;
                log::debug!("booking step {} -> {}", from.number(), next.number());
                Some(BookingEvent::StepChanged { from, to: next })
            }
            None => {
                let ticket = FinalizeTicket(self.next_ticket);
                self.next_ticket += 1;
                self.phase = WizardPhase::Finalizing(ticket);
                log::info!("booking finalize requested (ticket {})", ticket.0);
                Some(BookingEvent::FinalizeRequested { ticket })
            }
        }
    }

    /// Move back one step; from the first step the wizard is abandoned.
    pub fn retreat(&mut self) -> Option<BookingEvent> {
        if self.phase != WizardPhase::Editing {
            log::debug!("retreat ignored in phase {:?}", self.phase);
            return None;
        }

        self.last_error = None;
        match self.step.previous() {
            Some(previous) => {
                let from = self.step;
                self.step = previous;
                log::debug!("booking step {} -> {}", from.number(), previous.number());
                Some(BookingEvent::StepChanged {
                    from,
                    to: previous,
                })
            }
            None => {
                self.phase = WizardPhase::Abandoned;
                log::info!("booking abandoned");
                Some(BookingEvent::Abandoned)
            }
        }
    }

    // ============================================================================
    // Draft updates
    // ============================================================================

    /// Merge one field group into the draft.
    ///
    /// Applied regardless of the current step. A changed service set clears a
    /// location that no longer performs every service; a changed location
    /// clears the schedule picked for the old one. If that empties a step
    /// already passed, the wizard moves back to it.
    ///
    /// Callers outside the crate go through the selection helpers, which
    /// derive totals and check eligibility before patching.
    pub(crate) fn update_draft(&mut self, patch: DraftPatch) -> Result<(), BookingError> {
        if let Err(err) = self.ensure_editable() {
            log::warn!("draft update rejected: {}", err);
            return Err(err);
        }

        let services_changed = matches!(
            &patch,
            DraftPatch::Services { ids, .. } if *ids != self.draft.selected_service_ids
        );
        let location_changed = matches!(
            &patch,
            DraftPatch::Location { location_id } if *location_id != self.draft.location_id
        );

        self.draft.apply(patch);

        if location_changed {
            self.location_services = None;
            self.draft.clear_schedule();
        }
        if services_changed {
            self.invalidate_location();
        }
        self.rewind_to_incomplete();
        self.idempotency_key = Uuid::new_v4();
        Ok(())
    }

    fn rewind_to_incomplete(&mut self) {
        let Some(open) = self.first_incomplete_through(self.step) else {
            return;
        };
        if open < self.step {
            log::info!(
                "booking step {} -> {}: earlier data was cleared",
                self.step.number(),
                open.number()
            );
            self.step = open;
        }
    }

    fn invalidate_location(&mut self) {
        let Some(location_id) = self.draft.location_id.clone() else {
            return;
        };
        let still_eligible = self
            .location_services
            .as_ref()
            .map(|supported| self.draft.selected_service_ids.is_subset(supported))
            .unwrap_or(false);
        if !still_eligible {
            log::info!("location {} no longer eligible, cleared", location_id);
            self.draft.location_id = None;
            self.location_services = None;
            self.draft.clear_schedule();
        }
    }

    /// Select or deselect one service and recompute the total
    pub fn toggle_service(
        &mut self,
        catalog: &[OfferedService],
        id: &ServiceId,
    ) -> Result<(), BookingError> {
        self.ensure_editable()?;
        let selecting = !self.draft.selected_service_ids.contains(id);
        if selecting && selection::find_offered(catalog, id).is_none() {
            return Err(BookingError::ServiceNotOffered(id.clone()));
        }

        let ids = selection::toggle_selection(&self.draft.selected_service_ids, id);
        let total = selection::price_total(catalog, &ids);
        self.update_draft(DraftPatch::Services { ids, total })
    }

    /// Reprice the selection against a freshly loaded catalog.
    ///
    /// Returns the selected ids the catalog does not offer; they are dropped.
    pub fn apply_catalog(
        &mut self,
        catalog: &[OfferedService],
    ) -> Result<Vec<ServiceId>, BookingError> {
        self.ensure_editable()?;
        let (kept, dropped): (Vec<ServiceId>, Vec<ServiceId>) = self
            .draft
            .selected_service_ids
            .iter()
            .cloned()
            .partition(|id| selection::find_offered(catalog, id).is_some());

        let ids: BTreeSet<ServiceId> = kept.into_iter().collect();
        let total = selection::price_total(catalog, &ids);
        self.update_draft(DraftPatch::Services { ids, total })?;
        Ok(dropped)
    }

    /// Add the services of a combo; returns combo services not on offer
    pub fn seed_combo(
        &mut self,
        combo: &ServiceCombo,
        catalog: &[OfferedService],
    ) -> Result<Vec<ServiceId>, BookingError> {
        self.ensure_editable()?;
        let mut ids = self.draft.selected_service_ids.clone();
        let mut missing = Vec::new();
        for id in &combo.service_ids {
            if selection::find_offered(catalog, id).is_some() {
                ids.insert(id.clone());
            } else {
                missing.push(id.clone());
            }
        }

        let total = selection::price_total(catalog, &ids);
        self.update_draft(DraftPatch::Services { ids, total })?;
        Ok(missing)
    }

    /// Candidates were resolved for the current service set
    pub fn accepts_locations(&self, candidates: &LocationCandidates) -> bool {
        candidates.for_services == self.draft.selected_service_ids
    }

    pub fn select_location(
        &mut self,
        candidates: &LocationCandidates,
        id: &LocationId,
    ) -> Result<(), BookingError> {
        self.ensure_editable()?;
        let location = candidates
            .find(id)
            .filter(|_| self.accepts_locations(candidates))
            .filter(|location| location.supports_all(&self.draft.selected_service_ids))
            .ok_or_else(|| BookingError::LocationNotEligible(id.clone()))?;
        let supported: BTreeSet<ServiceId> = location.service_ids.iter().cloned().collect();

        self.update_draft(DraftPatch::Location {
            location_id: Some(id.clone()),
        })?;
        self.location_services = Some(supported);
        Ok(())
    }

    /// Slots were resolved for the current location
    pub fn accepts_slots(&self, slots: &AvailableSlots) -> bool {
        self.draft
            .location_id
            .as_ref()
            .map(|id| slots.is_for(id))
            .unwrap_or(false)
    }

    pub fn select_slot(
        &mut self,
        slots: &AvailableSlots,
        date: NaiveDate,
        time: &str,
    ) -> Result<(), BookingError> {
        self.ensure_editable()?;
        if self.draft.location_id.is_none() {
            return Err(BookingError::LocationRequired);
        }
        if !self.accepts_slots(slots) || !slots.contains(date, time) {
            return Err(BookingError::SlotUnavailable {
                date,
                time: time.to_string(),
            });
        }

        self.update_draft(DraftPatch::Schedule {
            date: Some(date),
            time: Some(time.trim().to_string()),
        })
    }

    // ============================================================================
    // Finalize
    // ============================================================================

    /// Order creation payload for the current draft
    pub fn finalize_request(&self, customer_id: Option<String>) -> Option<FinalizeRequest> {
        let location_id = self.draft.location_id.clone()?;
        let scheduled_date = self.draft.scheduled_date?;
        Some(FinalizeRequest {
            idempotency_key: self.idempotency_key,
            customer_id,
            service_ids: self.draft.selected_service_ids.iter().cloned().collect(),
            location_id,
            scheduled_date,
            scheduled_time: self.draft.scheduled_time.clone(),
            total_amount: self.draft.total_amount,
        })
    }

    /// Report the outcome of a finalize attempt.
    ///
    /// Outcomes for any ticket other than the outstanding one are ignored.
    /// On failure the draft is untouched and the wizard stays on the last step.
    pub fn complete_finalize(
        &mut self,
        ticket: FinalizeTicket,
        result: Result<FinalizeResponse, BookingError>,
    ) -> Option<BookingEvent> {
        if self.phase != WizardPhase::Finalizing(ticket) {
            log::warn!("stale finalize result for ticket {} ignored", ticket.0);
            return None;
        }

        match result.and_then(|response| response.confirmed_order_number()) {
            Ok(order_number) => {
                self.draft.apply(DraftPatch::PaymentResult {
                    order_number: order_number.clone(),
                });
                self.phase = WizardPhase::Completed;
                log::info!("booking completed, order {}", order_number);
                Some(BookingEvent::Completed { order_number })
            }
            Err(err) => {
                log::warn!("booking finalize failed (ticket {}): {}", ticket.0, err);
                // A declined attempt is settled; timeouts may still land server-side.
                if err == BookingError::PaymentDeclined {
                    self.idempotency_key = Uuid::new_v4();
                }
                self.phase = WizardPhase::Editing;
                let message = err.to_string();
                self.last_error = Some(err);
                Some(BookingEvent::FinalizeFailed { ticket, message })
            }
        }
    }

    pub fn fail_finalize(
        &mut self,
        ticket: FinalizeTicket,
        err: BookingError,
    ) -> Option<BookingEvent> {
        self.complete_finalize(ticket, Err(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_service_location::ServiceLocation;
    use crate::domain::a004_appointment_slot::AppointmentSlot;
    use crate::shared::Money;

    fn service(id: &str, price: f64) -> OfferedService {
        OfferedService {
            id: id.into(),
            company_id: "co-1".into(),
            name: id.to_uppercase(),
            description: None,
            category: None,
            preparation: None,
            price,
            is_active: true,
        }
    }

    fn catalog() -> Vec<OfferedService> {
        vec![service("a", 45.0), service("b", 25.0), service("c", 12.5)]
    }

    fn location(id: &str, services: &[&str]) -> ServiceLocation {
        ServiceLocation {
            id: id.into(),
            company_id: "co-1".into(),
            name: id.into(),
            address: "Av. Paulista, 1000".into(),
            city: Some("São Paulo".into()),
            service_ids: services.iter().map(|s| ServiceId::from(*s)).collect(),
        }
    }

    fn candidates(wizard: &BookingWizard) -> LocationCandidates {
        LocationCandidates::resolve(
            wizard.draft().selected_service_ids.clone(),
            &[location("loc-ab", &["a", "b"]), location("loc-a", &["a"])],
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn slots(location_id: &str) -> AvailableSlots {
        AvailableSlots::new(
            location_id.into(),
            vec![
                AppointmentSlot::new(day(), "08:00"),
                AppointmentSlot::new(day(), "09:30"),
            ],
        )
    }

    fn confirmed(number: &str) -> Result<FinalizeResponse, BookingError> {
        Ok(FinalizeResponse {
            order_id: "ord-1".into(),
            order_number: Some(number.into()),
            status: "aguardando_atendimento".into(),
            payment_status: Some("paid".into()),
        })
    }

    /// Steps 1-3 completed with services a+b, now on step 4
    fn wizard_at_payment() -> BookingWizard {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        assert!(wizard.advance().is_some());
        let options = candidates(&wizard);
        wizard.select_location(&options, &"loc-ab".into()).unwrap();
        assert!(wizard.advance().is_some());
        wizard.select_slot(&slots("loc-ab"), day(), "09:30").unwrap();
        assert!(wizard.advance().is_some());
        assert_eq!(wizard.step(), WizardStep::Payment);
        wizard
    }

    fn start_finalize(wizard: &mut BookingWizard) -> FinalizeTicket {
        match wizard.advance() {
            Some(BookingEvent::FinalizeRequested { ticket }) => ticket,
            other => panic!("expected finalize request, got {:?}", other),
        }
    }

    #[test]
    fn test_totals_follow_selection() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        assert_eq!(wizard.draft().total_amount, Money::from_cents(7000));
        assert_eq!(wizard.draft().total_amount.to_string(), "70.00");

        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        assert_eq!(wizard.draft().total_amount, Money::from_cents(4500));

        let before = wizard.draft().total_amount;
        wizard.toggle_service(&catalog, &"c".into()).unwrap();
        wizard.toggle_service(&catalog, &"c".into()).unwrap();
        assert_eq!(wizard.draft().total_amount, before);
    }

    #[test]
    fn test_unknown_service_cannot_be_selected() {
        let mut wizard = BookingWizard::default();
        assert_eq!(
            wizard.toggle_service(&catalog(), &"zzz".into()),
            Err(BookingError::ServiceNotOffered("zzz".into()))
        );
        assert!(wizard.draft().selected_service_ids.is_empty());
    }

    #[test]
    fn test_advance_is_gated() {
        let mut wizard = BookingWizard::default();
        assert!(!wizard.can_proceed(WizardStep::Services));
        assert_eq!(wizard.advance(), None);
        assert_eq!(wizard.step(), WizardStep::Services);

        wizard.toggle_service(&catalog(), &"a".into()).unwrap();
        assert_eq!(
            wizard.advance(),
            Some(BookingEvent::StepChanged {
                from: WizardStep::Services,
                to: WizardStep::Location,
            })
        );
        // No location yet
        assert_eq!(wizard.advance(), None);
        assert_eq!(wizard.step(), WizardStep::Location);
    }

    #[test]
    fn test_retreat_from_first_step_abandons() {
        let mut wizard = BookingWizard::default();
        assert_eq!(wizard.retreat(), Some(BookingEvent::Abandoned));
        assert_eq!(wizard.step(), WizardStep::Services);
        assert!(wizard.is_closed());
        assert_eq!(wizard.retreat(), None);
        assert_eq!(wizard.advance(), None);
        assert_eq!(
            wizard.toggle_service(&catalog(), &"a".into()),
            Err(BookingError::WizardClosed)
        );
    }

    #[test]
    fn test_direct_service_link_can_proceed_immediately() {
        let entry = BookingEntry::from_service_param(Some("svc-123"));
        let wizard = BookingWizard::from_entry(&entry);
        assert_eq!(wizard.step(), WizardStep::Services);
        assert!(wizard
            .draft()
            .selected_service_ids
            .contains(&ServiceId::from("svc-123")));
        assert!(wizard.can_proceed(WizardStep::Services));
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_apply_catalog_reprices_and_drops_unknown() {
        let entry = BookingEntry::from_service_param(Some("a"));
        let mut wizard = BookingWizard::from_entry(&entry);
        assert_eq!(wizard.draft().total_amount, Money::ZERO);
        assert_eq!(wizard.apply_catalog(&catalog()).unwrap(), Vec::<ServiceId>::new());
        assert_eq!(wizard.draft().total_amount, Money::from_cents(4500));

        let mut stale = BookingWizard::from_entry(&BookingEntry::Service("gone".into()));
        assert_eq!(stale.apply_catalog(&catalog()).unwrap(), vec![ServiceId::from("gone")]);
        assert!(!stale.can_proceed(WizardStep::Services));
    }

    #[test]
    fn test_seed_combo() {
        let combo = ServiceCombo {
            id: "combo-1".into(),
            name: "Check-up".into(),
            service_ids: vec!["a".into(), "c".into(), "missing".into()],
        };
        let mut wizard = BookingWizard::from_entry(&BookingEntry::Combo("combo-1".into()));
        let missing = wizard.seed_combo(&combo, &catalog()).unwrap();
        assert_eq!(missing, vec![ServiceId::from("missing")]);
        assert_eq!(wizard.draft().selected_service_ids.len(), 2);
        assert_eq!(wizard.draft().total_amount, Money::from_cents(5750));
    }

    #[test]
    fn test_subset_location_is_rejected() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        let options = candidates(&wizard);
        assert!(options.find(&"loc-a".into()).is_none());
        assert_eq!(
            wizard.select_location(&options, &"loc-a".into()),
            Err(BookingError::LocationNotEligible("loc-a".into()))
        );
        assert_eq!(wizard.draft().location_id, None);
    }

    #[test]
    fn test_stale_location_candidates_are_rejected() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        let options = candidates(&wizard);
        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        assert!(!wizard.accepts_locations(&options));
        assert!(wizard.select_location(&options, &"loc-ab".into()).is_err());
    }

    #[test]
    fn test_service_change_invalidates_location() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        let options = candidates(&wizard);
        wizard.select_location(&options, &"loc-a".into()).unwrap();
        wizard.select_slot(&slots("loc-a"), day(), "08:00").unwrap();

        // loc-a does not perform b
        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        assert_eq!(wizard.draft().location_id, None);
        assert_eq!(wizard.draft().scheduled_date, None);
        assert!(!wizard.can_proceed(WizardStep::Location));
    }

    #[test]
    fn test_service_change_keeps_eligible_location() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        let options = candidates(&wizard);
        wizard.select_location(&options, &"loc-ab".into()).unwrap();
        wizard.select_slot(&slots("loc-ab"), day(), "08:00").unwrap();

        wizard.toggle_service(&catalog, &"b".into()).unwrap();
        assert_eq!(wizard.draft().location_id, Some(LocationId::from("loc-ab")));
        assert_eq!(wizard.draft().scheduled_time.as_deref(), Some("08:00"));
    }

    #[test]
    fn test_slot_must_come_from_resolved_set() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        assert_eq!(
            wizard.select_slot(&slots("loc-ab"), day(), "08:00"),
            Err(BookingError::LocationRequired)
        );

        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        let options = candidates(&wizard);
        wizard.select_location(&options, &"loc-ab".into()).unwrap();

        assert!(wizard.select_slot(&slots("loc-ab"), day(), "10:00").is_err());
        assert!(wizard.select_slot(&slots("loc-a"), day(), "08:00").is_err());
        assert!(!wizard.accepts_slots(&slots("loc-a")));
        assert!(wizard.select_slot(&slots("loc-ab"), day(), "08:00").is_ok());

        // Switching location drops the schedule picked for the old one
        wizard.select_location(&options, &"loc-a".into()).unwrap();
        assert_eq!(wizard.draft().scheduled_date, None);
        assert_eq!(wizard.draft().scheduled_time, None);
    }

    #[test]
    fn test_later_step_data_survives_navigation() {
        let mut wizard = wizard_at_payment();
        let draft = wizard.draft().clone();
        wizard.retreat();
        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.step(), WizardStep::Services);
        assert_eq!(wizard.draft(), &draft);

        // Eager updates for steps not yet reached are applied
        wizard
            .update_draft(DraftPatch::Schedule {
                date: Some(day()),
                time: Some("08:00".into()),
            })
            .unwrap();
        assert_eq!(wizard.draft().scheduled_time.as_deref(), Some("08:00"));
        assert_eq!(wizard.draft().location_id, draft.location_id);
    }

    #[test]
    fn test_finalize_failure_keeps_draft_and_allows_retry() {
        let mut wizard = wizard_at_payment();
        let draft = wizard.draft().clone();

        let first = start_finalize(&mut wizard);
        assert!(wizard.is_finalizing());
        let failed = wizard.fail_finalize(first, BookingError::Collaborator("network".into()));
        assert!(matches!(failed, Some(BookingEvent::FinalizeFailed { .. })));
        assert_eq!(wizard.step(), WizardStep::Payment);
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert_eq!(wizard.draft(), &draft);
        assert!(wizard.last_error().is_some());

        let second = start_finalize(&mut wizard);
        assert_ne!(first, second);
        assert!(wizard.last_error().is_none());
        assert_eq!(
            wizard.complete_finalize(second, confirmed("LAB-0042")),
            Some(BookingEvent::Completed {
                order_number: "LAB-0042".into()
            })
        );
    }

    #[test]
    fn test_success_is_reached_exactly_once() {
        let mut wizard = wizard_at_payment();
        let ticket = start_finalize(&mut wizard);
        assert!(wizard.complete_finalize(ticket, confirmed("LAB-7")).is_some());
        assert_eq!(wizard.phase(), WizardPhase::Completed);
        assert_eq!(wizard.draft().order_number.as_deref(), Some("LAB-7"));

        assert_eq!(wizard.complete_finalize(ticket, confirmed("LAB-8")), None);
        assert_eq!(wizard.draft().order_number.as_deref(), Some("LAB-7"));
        assert_eq!(wizard.advance(), None);
        assert_eq!(wizard.retreat(), None);
        assert!(wizard.is_closed());
    }

    #[test]
    fn test_navigation_is_locked_while_finalizing() {
        let mut wizard = wizard_at_payment();
        start_finalize(&mut wizard);
        assert!(!wizard.can_advance());
        assert!(!wizard.can_retreat());
        assert_eq!(wizard.advance(), None);
        assert_eq!(wizard.retreat(), None);
        assert_eq!(
            wizard.update_draft(DraftPatch::Location { location_id: None }),
            Err(BookingError::FinalizeInProgress)
        );
        assert_eq!(wizard.step(), WizardStep::Payment);
    }

    #[test]
    fn test_late_result_for_timed_out_attempt_is_ignored() {
        let mut wizard = wizard_at_payment();
        let first = start_finalize(&mut wizard);
        wizard.fail_finalize(first, BookingError::Timeout(30_000));
        let second = start_finalize(&mut wizard);

        assert_eq!(wizard.complete_finalize(first, confirmed("LAB-OLD")), None);
        assert_eq!(wizard.phase(), WizardPhase::Finalizing(second));
        assert_eq!(wizard.draft().order_number, None);
    }

    #[test]
    fn test_idempotency_key_policy() {
        let mut wizard = wizard_at_payment();
        let key = wizard.finalize_request(None).unwrap().idempotency_key;

        let ticket = start_finalize(&mut wizard);
        wizard.fail_finalize(ticket, BookingError::Timeout(30_000));
        assert_eq!(wizard.finalize_request(None).unwrap().idempotency_key, key);

        let ticket = start_finalize(&mut wizard);
        wizard.fail_finalize(ticket, BookingError::PaymentDeclined);
        assert_ne!(wizard.finalize_request(None).unwrap().idempotency_key, key);
    }

    #[test]
    fn test_finalize_request_carries_draft() {
        let wizard = wizard_at_payment();
        let request = wizard.finalize_request(Some("user-1".into())).unwrap();
        assert_eq!(request.service_ids, vec![ServiceId::from("a"), ServiceId::from("b")]);
        assert_eq!(request.location_id, LocationId::from("loc-ab"));
        assert_eq!(request.scheduled_date, day());
        assert_eq!(request.scheduled_time.as_deref(), Some("09:30"));
        assert_eq!(request.total_amount, Money::from_cents(7000));
        assert!(BookingWizard::default().finalize_request(None).is_none());
    }

    #[test]
    fn test_clearing_location_on_payment_step_rewinds() {
        let mut wizard = wizard_at_payment();
        wizard
            .update_draft(DraftPatch::Location { location_id: None })
            .unwrap();

        assert_eq!(wizard.step(), WizardStep::Location);
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), None);
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert!(wizard.finalize_request(None).is_none());
    }

    #[test]
    fn test_clearing_schedule_on_payment_step_rewinds() {
        let mut wizard = wizard_at_payment();
        wizard
            .update_draft(DraftPatch::Schedule { date: None, time: None })
            .unwrap();

        assert_eq!(wizard.step(), WizardStep::Scheduling);
        assert_eq!(wizard.advance(), None);

        wizard.select_slot(&slots("loc-ab"), day(), "08:00").unwrap();
        assert_eq!(
            wizard.advance(),
            Some(BookingEvent::StepChanged {
                from: WizardStep::Scheduling,
                to: WizardStep::Payment,
            })
        );
        start_finalize(&mut wizard);
    }

    #[test]
    fn test_huge_prices_saturate_total() {
        let catalog = vec![service("x", 1e17), service("y", 1e17)];
        assert!(catalog.iter().all(|s| s.validate().is_ok()));
        let mut wizard = BookingWizard::default();
        wizard.toggle_service(&catalog, &"x".into()).unwrap();
        wizard.toggle_service(&catalog, &"y".into()).unwrap();
        assert_eq!(wizard.draft().total_amount, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_public_operations_keep_total_in_sync() {
        let catalog = catalog();
        let mut wizard = BookingWizard::default();
        let check = |wizard: &BookingWizard| {
            assert_eq!(
                wizard.draft().total_amount,
                selection::price_total(&catalog, &wizard.draft().selected_service_ids)
            );
        };

        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        check(&wizard);
        wizard.toggle_service(&catalog, &"c".into()).unwrap();
        check(&wizard);
        let combo = ServiceCombo {
            id: "combo-1".into(),
            name: "Check-up".into(),
            service_ids: vec!["b".into(), "zzz".into()],
        };
        wizard.seed_combo(&combo, &catalog).unwrap();
        check(&wizard);
        wizard.apply_catalog(&catalog[..2]).unwrap();
        check(&wizard);
        wizard.toggle_service(&catalog, &"a".into()).unwrap();
        check(&wizard);
        assert_eq!(wizard.draft().total_amount, Money::from_cents(2500));
    }
}
