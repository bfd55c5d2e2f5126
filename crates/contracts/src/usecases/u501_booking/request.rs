use crate::domain::common::{LocationId, ServiceId};
use crate::shared::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order creation request sent on finalize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeRequest {
    /// Same key for retries of one attempt lets the backend deduplicate
    pub idempotency_key: Uuid,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub service_ids: Vec<ServiceId>,
    pub location_id: LocationId,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    pub total_amount: Money,
}
