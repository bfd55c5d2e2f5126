use super::error::BookingError;
use crate::domain::common::OrderId;
use crate::enums::{OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

/// Result of order creation as reported by the order service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeResponse {
    pub order_id: OrderId,
    #[serde(default)]
    pub order_number: Option<String>,
    /// Raw order status code
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
}

impl FinalizeResponse {
    /// Order number if the response is a confirmed success
    pub fn confirmed_order_number(&self) -> Result<String, BookingError> {
        let status = OrderStatus::from_code(&self.status).ok_or_else(|| {
            BookingError::FinalizeFailed(format!("status desconhecido '{}'", self.status))
        })?;
        if status == OrderStatus::Cancelado {
            return Err(BookingError::PaymentDeclined);
        }
        let payment = self.payment_status.as_deref().and_then(PaymentStatus::from_code);
        if payment == Some(PaymentStatus::Failed) {
            return Err(BookingError::PaymentDeclined);
        }

        let number = self
            .order_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.order_id.as_str().trim());
        if number.is_empty() {
            return Err(BookingError::FinalizeFailed("pedido sem número".into()));
        }
        Ok(number.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, payment: Option<&str>) -> FinalizeResponse {
        FinalizeResponse {
            order_id: "ord-1".into(),
            order_number: Some("LAB-0042".into()),
            status: status.into(),
            payment_status: payment.map(String::from),
        }
    }

    #[test]
    fn test_confirmed_statuses() {
        assert_eq!(
            response("aguardando_atendimento", Some("paid")).confirmed_order_number(),
            Ok("LAB-0042".to_string())
        );
        assert!(response("aguardando_pagamento", None).confirmed_order_number().is_ok());
        assert!(response("pending", None).confirmed_order_number().is_ok());
    }

    #[test]
    fn test_declined_and_unknown() {
        assert_eq!(
            response("cancelado", None).confirmed_order_number(),
            Err(BookingError::PaymentDeclined)
        );
        assert_eq!(
            response("aguardando_pagamento", Some("failed")).confirmed_order_number(),
            Err(BookingError::PaymentDeclined)
        );
        assert!(matches!(
            response("???", None).confirmed_order_number(),
            Err(BookingError::FinalizeFailed(_))
        ));
    }

    #[test]
    fn test_falls_back_to_order_id() {
        let mut resp = response("em_atendimento", None);
        resp.order_number = Some("  ".into());
        assert_eq!(resp.confirmed_order_number(), Ok("ord-1".to_string()));
    }
}
