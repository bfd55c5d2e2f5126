//! ViewModel for the booking wizard
//!
//! Owns the single `BookingWizard` signal (no other writer) plus the data each
//! step reads from the backend. Step views call the commands below and render
//! from the signals.

use super::api;
use super::requests::{self, PendingLoad};
use crate::domain::a001_offered_service::api::{fetch_catalog, fetch_combo};
use crate::domain::a002_service_location::api::fetch_locations;
use crate::domain::a004_appointment_slot::api::fetch_slots;
use crate::system::auth::Session;
use chrono::NaiveDate;
use contracts::domain::a001_offered_service::OfferedService;
use contracts::domain::a004_appointment_slot::AvailableSlots;
use contracts::domain::common::{ComboId, LocationId, ServiceId};
use contracts::usecases::u501_booking::{
    BookingEntry, BookingError, BookingEvent, BookingWizard, FinalizeResponse, FinalizeTicket,
    LocationCandidates,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;

#[derive(Clone, Copy)]
pub struct BookingWizardVm {
    pub wizard: RwSignal<BookingWizard>,
    pub entry: StoredValue<BookingEntry>,
    pub session: RwSignal<Session>,

    // === Step 1 ===
    pub catalog: RwSignal<Vec<OfferedService>>,
    pub catalog_loading: RwSignal<bool>,
    pub catalog_error: RwSignal<Option<String>>,
    pub services_notice: RwSignal<Option<String>>,

    // === Step 2 ===
    pub locations: RwSignal<LocationCandidates>,
    pub locations_pending: RwSignal<PendingLoad<BTreeSet<ServiceId>>>,
    pub locations_loading: Memo<bool>,
    pub locations_error: RwSignal<Option<String>>,

    // === Step 3 ===
    pub slots: RwSignal<Option<AvailableSlots>>,
    pub slots_pending: RwSignal<PendingLoad<LocationId>>,
    pub slots_loading: Memo<bool>,
    pub slots_error: RwSignal<Option<String>>,

    pub timeout_ms: u32,
}

impl BookingWizardVm {
    pub fn new(entry: BookingEntry, session: RwSignal<Session>) -> Self {
        let timeout_ms = crate::shared::config::current().booking.finalize_timeout_ms;
        let locations_pending = RwSignal::new(PendingLoad::default());
        let slots_pending = RwSignal::new(PendingLoad::default());
        Self {
            wizard: RwSignal::new(BookingWizard::from_entry(&entry)),
            entry: StoredValue::new(entry),
            session,

            catalog: RwSignal::new(Vec::new()),
            catalog_loading: RwSignal::new(false),
            catalog_error: RwSignal::new(None),
            services_notice: RwSignal::new(None),

            locations: RwSignal::new(LocationCandidates::default()),
            locations_pending,
            locations_loading: Memo::new(move |_| locations_pending.with(|p| p.is_loading())),
            locations_error: RwSignal::new(None),

            slots: RwSignal::new(None),
            slots_pending,
            slots_loading: Memo::new(move |_| slots_pending.with(|p| p.is_loading())),
            slots_error: RwSignal::new(None),

            timeout_ms,
        }
    }

    /// Run a fallible wizard command; a disposed signal counts as a closed wizard
    fn with_wizard<U>(
        &self,
        f: impl FnOnce(&mut BookingWizard) -> Result<U, BookingError>,
    ) -> Result<U, BookingError> {
        self.wizard
            .try_update(f)
            .unwrap_or(Err(BookingError::WizardClosed))
    }

    // === Derived signals ===

    pub fn is_finalizing(&self) -> Signal<bool> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.is_finalizing()))
    }

    pub fn is_next_disabled(&self) -> Signal<bool> {
        let wizard = self.wizard;
        Signal::derive(move || !wizard.with(|w| w.can_advance()))
    }

    pub fn is_back_disabled(&self) -> Signal<bool> {
        let wizard = self.wizard;
        Signal::derive(move || !wizard.with(|w| w.can_retreat()))
    }

    // === Step 1: services ===

    /// Load the catalog, reprice the seeded selection and resolve a combo entry
    pub fn load_catalog(&self) {
        let this = *self;
        this.catalog_loading.set(true);
        this.catalog_error.set(None);
        let session = this.session.get_untracked();

        spawn_local(async move {
            match fetch_catalog(&session).await {
                Ok(catalog) => {
                    this.apply_catalog(catalog);
                    let combo_id = this
                        .entry
                        .try_with_value(|entry| entry.combo_id().cloned())
                        .flatten();
                    if let Some(combo_id) = combo_id {
                        this.load_combo(combo_id);
                    }
                }
                Err(e) => {
                    log::error!("catalog load failed: {}", e);
                    let _ = this
                        .catalog_error
                        .try_set(Some(BookingError::Collaborator(e).to_string()));
                }
            }
            let _ = this.catalog_loading.try_set(false);
        });
    }

    fn apply_catalog(&self, catalog: Vec<OfferedService>) {
        match self.with_wizard(|w| w.apply_catalog(&catalog)) {
            Ok(dropped) if !dropped.is_empty() => {
                log::info!("{} selected services are not offered", dropped.len());
                let _ = self.services_notice.try_set(Some(
                    "Alguns exames selecionados não estão disponíveis e foram removidos".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => log::warn!("catalog not applied: {}", e),
        }
        let _ = self.catalog.try_set(catalog);
    }

    fn load_combo(&self, combo_id: ComboId) {
        let this = *self;
        let session = this.session.get_untracked();

        spawn_local(async move {
            match fetch_combo(&session, &combo_id).await {
                Ok(combo) => {
                    let catalog = this.catalog.try_get_untracked().unwrap_or_default();
                    match this.with_wizard(|w| w.seed_combo(&combo, &catalog)) {
                        Ok(missing) if missing.is_empty() => {}
                        Ok(missing) => {
                            log::warn!("combo {}: {} services not offered", combo.id, missing.len());
                            let _ = this.services_notice.try_set(Some(format!(
                                "O combo \"{}\" inclui exames indisponíveis; eles não foram adicionados",
                                combo.name
                            )));
                        }
                        Err(e) => log::warn!("combo not applied: {}", e),
                    }
                }
                Err(e) => {
                    log::error!("combo {} not resolved: {}", combo_id, e);
                    let _ = this.services_notice.try_set(Some(
                        "Não foi possível carregar o combo. Selecione os exames manualmente."
                            .to_string(),
                    ));
                }
            }
        });
    }

    pub fn toggle_service(&self, id: ServiceId) {
        let catalog = self.catalog.get_untracked();
        if let Err(e) = self.with_wizard(|w| w.toggle_service(&catalog, &id)) {
            self.services_notice.set(Some(e.to_string()));
        }
    }

    // === Step 2: location ===

    /// Fetch location candidates for the current service set
    ///
    /// Skipped when candidates for this exact set are already loaded.
    pub fn load_locations(&self) {
        let services = self
            .wizard
            .with_untracked(|w| w.draft().selected_service_ids.clone());
        if services.is_empty() {
            return;
        }
        let already_loaded = self.wizard.with_untracked(|w| {
            self.locations
                .with_untracked(|candidates| w.accepts_locations(candidates))
        });
        if already_loaded && self.locations_error.get_untracked().is_none() {
            self.locations_pending.update(|p| p.cancel());
            return;
        }

        let this = *self;
        this.locations_pending.update(|p| p.start(services.clone()));
        this.locations_error.set(None);
        let session = this.session.get_untracked();

        spawn_local(async move {
            let fetched = fetch_locations(&session, &services).await;
            let current = this
                .wizard
                .try_with_untracked(|w| w.draft().selected_service_ids.clone());
            let fresh = this
                .locations_pending
                .try_update(|p| p.finish(&services, current.as_ref()))
                .unwrap_or(false);
            if !fresh {
                log::debug!("location response for an old service set dropped");
                return;
            }

            match fetched {
                Ok(fetched) => {
                    let candidates = LocationCandidates::resolve(services, &fetched);
                    let _ = this.locations.try_set(candidates);
                }
                Err(e) => {
                    log::error!("locations load failed: {}", e);
                    let _ = this
                        .locations_error
                        .try_set(Some(BookingError::Collaborator(e).to_string()));
                }
            }
        });
    }

    pub fn select_location(&self, id: LocationId) {
        let candidates = self.locations.get_untracked();
        match self.with_wizard(|w| w.select_location(&candidates, &id)) {
            Ok(()) => {
                self.locations_error.set(None);
                self.slots.set(None);
            }
            Err(e) => self.locations_error.set(Some(e.to_string())),
        }
    }

    // === Step 3: scheduling ===

    pub fn load_slots(&self) {
        let Some(location_id) = self
            .wizard
            .with_untracked(|w| w.draft().location_id.clone())
        else {
            self.slots_pending.update(|p| p.cancel());
            return;
        };

        let this = *self;
        this.slots_pending.update(|p| p.start(location_id.clone()));
        this.slots_error.set(None);
        let session = this.session.get_untracked();

        spawn_local(async move {
            let fetched = fetch_slots(&session, &location_id).await;
            let current = this
                .wizard
                .try_with_untracked(|w| w.draft().location_id.clone())
                .flatten();
            let fresh = this
                .slots_pending
                .try_update(|p| p.finish(&location_id, current.as_ref()))
                .unwrap_or(false);
            if !fresh {
                log::debug!("slots for location {} dropped", location_id);
                return;
            }

            match fetched {
                Ok(slots) => {
                    let _ = this.slots.try_set(Some(slots));
                }
                Err(e) => {
                    log::error!("slots load failed: {}", e);
                    let _ = this
                        .slots_error
                        .try_set(Some(BookingError::Collaborator(e).to_string()));
                }
            }
        });
    }

    pub fn select_slot(&self, date: NaiveDate, time: String) {
        let Some(slots) = self.slots.get_untracked() else {
            return;
        };
        match self.with_wizard(|w| w.select_slot(&slots, date, &time)) {
            Ok(()) => self.slots_error.set(None),
            Err(e) => self.slots_error.set(Some(e.to_string())),
        }
    }

    // === Navigation ===

    pub fn next(&self) {
        let event = self.wizard.try_update(|w| w.advance()).flatten();
        if let Some(BookingEvent::FinalizeRequested { ticket }) = event {
            self.finalize(ticket);
        }
    }

    pub fn back(&self) {
        let _ = self.wizard.try_update(|w| w.retreat());
    }

    pub fn dismiss_error(&self) {
        self.wizard.update(|w| w.clear_error());
    }

    // === Step 4: finalize ===

    /// Submit the order, racing the request against the configured timeout
    fn finalize(&self, ticket: FinalizeTicket) {
        let session = self.session.get_untracked();
        let request = self
            .wizard
            .with_untracked(|w| w.finalize_request(session.customer_id()));
        let Some(request) = request else {
            self.settle(
                ticket,
                Err(BookingError::FinalizeFailed("agendamento incompleto".to_string())),
            );
            return;
        };

        let this = *self;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            this.settle(ticket, Err(BookingError::Timeout(timeout_ms)));
        });

        spawn_local(async move {
            let result = api::finalize_order(&session, &request)
                .await
                .map_err(BookingError::FinalizeFailed);
            this.settle(ticket, result);
        });
    }

    /// Deliver a finalize outcome; the loser of the race finds its ticket spent
    fn settle(&self, ticket: FinalizeTicket, result: Result<FinalizeResponse, BookingError>) {
        let outstanding = self
            .wizard
            .try_with_untracked(|w| requests::is_outstanding(w, ticket))
            .unwrap_or(false);
        if !outstanding {
            log::debug!("finalize ticket {} already settled", ticket.0);
            return;
        }
        let _ = self
            .wizard
            .try_update(|w| requests::settle_finalize(w, ticket, result));
    }
}
