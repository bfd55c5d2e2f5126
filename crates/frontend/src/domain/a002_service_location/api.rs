use crate::domain::REST_PREFIX;
use crate::shared::api_utils::get_json;
use crate::system::auth::Session;
use contracts::domain::a002_service_location::ServiceLocation;
use contracts::domain::common::{AggregateRoot, ServiceId};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Serialize)]
struct LocationQuery {
    /// Comma-separated service ids
    services: String,
}

fn locations_path(services: &BTreeSet<ServiceId>) -> Result<String, String> {
    let query = LocationQuery {
        services: services
            .iter()
            .map(ServiceId::as_str)
            .collect::<Vec<_>>()
            .join(","),
    };
    let query = serde_qs::to_string(&query).map_err(|e| e.to_string())?;
    Ok(format!(
        "{}/{}?{}",
        REST_PREFIX,
        ServiceLocation::collection_name(),
        query
    ))
}

/// Locations for a service set
///
/// The backend may return locations that perform only some of the services;
/// callers filter with `LocationCandidates::resolve`.
pub async fn fetch_locations(
    session: &Session,
    services: &BTreeSet<ServiceId>,
) -> Result<Vec<ServiceLocation>, String> {
    get_json(&locations_path(services)?, session).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_path_encodes_service_set() {
        let services: BTreeSet<ServiceId> = ["b", "a b"].into_iter().map(ServiceId::from).collect();
        let path = locations_path(&services).unwrap();
        assert!(path.starts_with("/rest/v1/locations?services="));
        assert!(!path.contains(' '));
    }
}
