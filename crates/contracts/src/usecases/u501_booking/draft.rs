use super::step::WizardStep;
use crate::domain::common::{LocationId, ServiceId};
use crate::shared::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// In-progress booking selection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub selected_service_ids: BTreeSet<ServiceId>,
    pub location_id: Option<LocationId>,
    pub scheduled_date: Option<NaiveDate>,
    /// "HH:MM", paired with `scheduled_date`
    pub scheduled_time: Option<String>,
    /// Sum of the selected services' prices
    pub total_amount: Money,
    /// Set only after the order is confirmed
    pub order_number: Option<String>,
}

/// Sparse update of one field group of the draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftPatch {
    Services {
        ids: BTreeSet<ServiceId>,
        total: Money,
    },
    Location {
        location_id: Option<LocationId>,
    },
    Schedule {
        date: Option<NaiveDate>,
        time: Option<String>,
    },
    PaymentResult {
        order_number: String,
    },
}

impl BookingDraft {
    pub fn with_services(ids: impl IntoIterator<Item = ServiceId>) -> Self {
        Self {
            selected_service_ids: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Merge one field group, leaving every other field as is
    pub fn apply(&mut self, patch: DraftPatch) {
        match patch {
            DraftPatch::Services { ids, total } => {
                self.selected_service_ids = ids;
                self.total_amount = total;
            }
            DraftPatch::Location { location_id } => {
                self.location_id = location_id;
            }
            DraftPatch::Schedule { date, time } => {
                self.scheduled_date = date;
                self.scheduled_time = time;
            }
            DraftPatch::PaymentResult { order_number } => {
                self.order_number = Some(order_number);
            }
        }
    }

    /// Completion predicate of a step
    pub fn is_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Services => !self.selected_service_ids.is_empty(),
            WizardStep::Location => self
                .location_id
                .as_ref()
                .map(|id| !id.as_str().trim().is_empty())
                .unwrap_or(false),
            WizardStep::Scheduling => self.scheduled_date.is_some(),
            // Gating only; payment is confirmed by finalize.
            WizardStep::Payment => self.total_amount.is_positive(),
        }
    }

    pub(crate) fn clear_schedule(&mut self) {
        self.scheduled_date = None;
        self.scheduled_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_only_its_group() {
        let mut draft = BookingDraft::with_services([ServiceId::from("a")]);
        draft.apply(DraftPatch::Location {
            location_id: Some("loc-1".into()),
        });
        draft.apply(DraftPatch::Schedule {
            date: NaiveDate::from_ymd_opt(2025, 3, 10),
            time: Some("08:00".into()),
        });
        draft.apply(DraftPatch::Services {
            ids: [ServiceId::from("a"), ServiceId::from("b")].into_iter().collect(),
            total: Money::from_cents(7000),
        });

        assert_eq!(draft.location_id, Some(LocationId::from("loc-1")));
        assert_eq!(draft.scheduled_time.as_deref(), Some("08:00"));
        assert_eq!(draft.selected_service_ids.len(), 2);
        assert_eq!(draft.total_amount, Money::from_cents(7000));
        assert_eq!(draft.order_number, None);
    }

    #[test]
    fn test_step_predicates() {
        let mut draft = BookingDraft::default();
        assert!(!draft.is_complete(WizardStep::Services));
        draft.selected_service_ids.insert("a".into());
        assert!(draft.is_complete(WizardStep::Services));

        draft.location_id = Some(LocationId::from(" "));
        assert!(!draft.is_complete(WizardStep::Location));
        draft.location_id = Some(LocationId::from("loc-1"));
        assert!(draft.is_complete(WizardStep::Location));

        draft.scheduled_time = Some("08:00".into());
        assert!(!draft.is_complete(WizardStep::Scheduling));
        draft.scheduled_date = NaiveDate::from_ymd_opt(2025, 3, 10);
        assert!(draft.is_complete(WizardStep::Scheduling));

        assert!(!draft.is_complete(WizardStep::Payment));
        draft.total_amount = Money::from_cents(1);
        assert!(draft.is_complete(WizardStep::Payment));
    }
}
