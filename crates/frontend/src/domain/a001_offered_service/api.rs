use crate::domain::REST_PREFIX;
use crate::shared::api_utils::{get_json, segment};
use crate::system::auth::Session;
use contracts::domain::a001_offered_service::{OfferedService, ServiceCombo};
use contracts::domain::common::{AggregateRoot, ComboId};

/// Services offered for booking, with prices
pub async fn fetch_catalog(session: &Session) -> Result<Vec<OfferedService>, String> {
    let path = format!("{}/{}", REST_PREFIX, OfferedService::collection_name());
    let services: Vec<OfferedService> = get_json(&path, session).await?;

    Ok(services
        .into_iter()
        .filter(|service| match service.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("skipping catalog entry {}: {}", service.id, e);
                false
            }
        })
        .collect())
}

pub async fn fetch_combo(session: &Session, id: &ComboId) -> Result<ServiceCombo, String> {
    let path = format!(
        "{}/{}/{}",
        REST_PREFIX,
        ServiceCombo::collection_name(),
        segment(id.as_str())
    );
    get_json(&path, session).await
}
