use super::draft::BookingDraft;
use crate::domain::common::{AggregateId, ComboId, ServiceId};

/// How the wizard was entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEntry {
    /// No pre-selection
    Blank,
    /// `/book/:service_id`
    Service(ServiceId),
    /// `/book/combo/:combo_id`, services resolved from the catalog later
    Combo(ComboId),
}

impl BookingEntry {
    pub fn from_service_param(param: Option<&str>) -> Self {
        param
            .and_then(|raw| ServiceId::from_string(raw).ok())
            .map(BookingEntry::Service)
            .unwrap_or(BookingEntry::Blank)
    }

    pub fn from_combo_param(param: Option<&str>) -> Self {
        param
            .and_then(|raw| ComboId::from_string(raw).ok())
            .map(BookingEntry::Combo)
            .unwrap_or(BookingEntry::Blank)
    }

    pub fn initial_draft(&self) -> BookingDraft {
        match self {
            BookingEntry::Service(id) => BookingDraft::with_services([id.clone()]),
            BookingEntry::Blank | BookingEntry::Combo(_) => BookingDraft::default(),
        }
    }

    pub fn combo_id(&self) -> Option<&ComboId> {
        match self {
            BookingEntry::Combo(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_param_seeds_draft() {
        let entry = BookingEntry::from_service_param(Some("svc-123"));
        assert_eq!(entry, BookingEntry::Service("svc-123".into()));
        let draft = entry.initial_draft();
        assert!(draft.selected_service_ids.contains(&ServiceId::from("svc-123")));
        assert_eq!(draft.selected_service_ids.len(), 1);
    }

    #[test]
    fn test_blank_params() {
        assert_eq!(BookingEntry::from_service_param(None), BookingEntry::Blank);
        assert_eq!(BookingEntry::from_service_param(Some("  ")), BookingEntry::Blank);
        let combo = BookingEntry::from_combo_param(Some("combo-1"));
        assert_eq!(combo.combo_id(), Some(&ComboId::from("combo-1")));
        assert!(combo.initial_draft().selected_service_ids.is_empty());
    }
}
