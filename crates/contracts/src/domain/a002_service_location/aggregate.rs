use crate::domain::common::{AggregateRoot, CompanyId, LocationId, ServiceId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Collection point where a company performs its services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLocation {
    pub id: LocationId,
    pub company_id: CompanyId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    /// Services performed at this location
    #[serde(default)]
    pub service_ids: Vec<ServiceId>,
}

impl ServiceLocation {
    /// True when every requested service is performed here
    pub fn supports_all(&self, services: &BTreeSet<ServiceId>) -> bool {
        services.iter().all(|id| self.service_ids.contains(id))
    }
}

impl AggregateRoot for ServiceLocation {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "locations"
    }

    fn list_name() -> &'static str {
        "Unidades"
    }
}
