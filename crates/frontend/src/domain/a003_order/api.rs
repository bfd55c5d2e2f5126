use crate::domain::REST_PREFIX;
use crate::shared::api_utils::{get_json, segment};
use crate::system::auth::Session;
use contracts::domain::a003_order::Order;
use contracts::domain::common::AggregateRoot;

pub async fn fetch_order(session: &Session, order_number: &str) -> Result<Order, String> {
    let path = format!(
        "{}/{}/{}",
        REST_PREFIX,
        Order::collection_name(),
        segment(order_number)
    );
    get_json(&path, session).await
}
