use crate::domain::REST_PREFIX;
use crate::shared::api_utils::{get_json, segment};
use crate::system::auth::Session;
use contracts::domain::a002_service_location::ServiceLocation;
use contracts::domain::a004_appointment_slot::{AppointmentSlot, AvailableSlots};
use contracts::domain::common::{AggregateRoot, LocationId};

/// Free appointment slots of one location, tagged with that location
pub async fn fetch_slots(session: &Session, location_id: &LocationId) -> Result<AvailableSlots, String> {
    let path = format!(
        "{}/{}/{}/slots",
        REST_PREFIX,
        ServiceLocation::collection_name(),
        segment(location_id.as_str())
    );
    let slots: Vec<AppointmentSlot> = get_json(&path, session).await?;
    Ok(AvailableSlots::new(location_id.clone(), slots))
}
