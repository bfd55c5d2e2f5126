use crate::domain::common::{AggregateRoot, LocationId, OrderId, ServiceId};
use crate::enums::{status_label, OrderStatus, PaymentStatus, StatusLabel};
use crate::shared::Money;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Order as read back from the backend
///
/// Status fields keep the raw code so that unknown values still render with
/// the fallback label instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Externally unique order number shown to the customer
    pub order_number: String,
    /// Raw booking status code
    pub status: String,
    /// Raw payment status code
    #[serde(default)]
    pub payment_status: Option<String>,
    pub total_amount: Money,
    #[serde(default)]
    pub location_id: Option<LocationId>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub service_ids: Vec<ServiceId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Normalized booking status
    pub fn status_norm(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(&self.status)
    }

    pub fn payment_status_norm(&self) -> Option<PaymentStatus> {
        self.payment_status
            .as_deref()
            .and_then(PaymentStatus::from_code)
    }

    pub fn status_label(&self) -> StatusLabel {
        status_label(&self.status)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Severity;

    #[test]
    fn test_legacy_status_is_normalized() {
        let json = r#"{
            "id": "ord-1",
            "order_number": "LAB-0001",
            "status": "completed",
            "payment_status": "pago",
            "total_amount": 70.0
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status_norm(), Some(OrderStatus::Concluido));
        assert_eq!(order.payment_status_norm(), Some(PaymentStatus::Paid));
        assert_eq!(order.status_label().severity, Severity::Success);
        assert_eq!(order.total_amount, Money::from_cents(7000));
    }

    #[test]
    fn test_unknown_status_keeps_record() {
        let json = r#"{"id":"ord-2","order_number":"LAB-0002","status":"on_hold","total_amount":10}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status_norm(), None);
        assert_eq!(order.status_label().label, "Status desconhecido");
    }
}
