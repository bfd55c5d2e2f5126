//! Pure rules behind the selection steps.

use crate::domain::a001_offered_service::OfferedService;
use crate::domain::a002_service_location::ServiceLocation;
use crate::domain::common::{LocationId, ServiceId};
use crate::shared::Money;
use std::collections::BTreeSet;

/// Active catalog entry for an id
pub fn find_offered<'a>(catalog: &'a [OfferedService], id: &ServiceId) -> Option<&'a OfferedService> {
    catalog.iter().find(|service| service.is_active && &service.id == id)
}

/// Flip membership of `id`; selection is a set
pub fn toggle_selection(selected: &BTreeSet<ServiceId>, id: &ServiceId) -> BTreeSet<ServiceId> {
    let mut next = selected.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }
    next
}

/// Sum of unit prices of the active, selected services
pub fn price_total(catalog: &[OfferedService], selected: &BTreeSet<ServiceId>) -> Money {
    selected
        .iter()
        .filter_map(|id| find_offered(catalog, id))
        .map(OfferedService::unit_price)
        .sum()
}

/// Locations that perform every selected service
pub fn eligible_locations(
    locations: &[ServiceLocation],
    selected: &BTreeSet<ServiceId>,
) -> Vec<ServiceLocation> {
    if selected.is_empty() {
        return Vec::new();
    }
    locations
        .iter()
        .filter(|location| location.supports_all(selected))
        .cloned()
        .collect()
}

/// Location options resolved for one service set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationCandidates {
    pub for_services: BTreeSet<ServiceId>,
    pub locations: Vec<ServiceLocation>,
}

impl LocationCandidates {
    /// Filter a collaborator response down to eligible locations
    pub fn resolve(for_services: BTreeSet<ServiceId>, fetched: &[ServiceLocation]) -> Self {
        let locations = eligible_locations(fetched, &for_services);
        Self {
            for_services,
            locations,
        }
    }

    pub fn find(&self, id: &LocationId) -> Option<&ServiceLocation> {
        self.locations.iter().find(|location| &location.id == id)
    }
}
