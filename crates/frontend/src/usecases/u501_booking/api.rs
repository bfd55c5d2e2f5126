use crate::domain::REST_PREFIX;
use crate::shared::api_utils::post_json;
use crate::system::auth::Session;
use contracts::usecases::u501_booking::{FinalizeRequest, FinalizeResponse};

/// Create the order and start payment for a completed draft
///
/// The request carries an idempotency key, so repeating it after a lost
/// response does not create a second order.
pub async fn finalize_order(
    session: &Session,
    request: &FinalizeRequest,
) -> Result<FinalizeResponse, String> {
    let path = format!("{}/orders/finalize", REST_PREFIX);
    log::debug!(
        "finalize {} ({} services)",
        request.idempotency_key,
        request.service_ids.len()
    );
    post_json(&path, request, session).await
}
