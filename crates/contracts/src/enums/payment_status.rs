use super::status_label::{Severity, StatusLabel};
use serde::{Deserialize, Serialize};

/// Payment status, tracked independently of the order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[serde(alias = "pendente")]
    Pending,
    #[serde(alias = "pago")]
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pending" | "pendente" => Some(PaymentStatus::Pending),
            "paid" | "pago" => Some(PaymentStatus::Paid),
            "failed" => Some(PaymentStatus::Failed),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    pub fn label(&self) -> StatusLabel {
        match self {
            PaymentStatus::Pending => StatusLabel::new("Pagamento pendente", Severity::Warning),
            PaymentStatus::Paid => StatusLabel::new("Pago", Severity::Success),
            PaymentStatus::Failed => StatusLabel::new("Pagamento recusado", Severity::Error),
            PaymentStatus::Refunded => StatusLabel::new("Reembolsado", Severity::Neutral),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_legacy_codes() {
        assert_eq!(PaymentStatus::from_code("pago"), Some(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::from_code("PENDENTE"), Some(PaymentStatus::Pending));
        assert_eq!(PaymentStatus::from_code("chargeback"), None);
        let parsed: PaymentStatus = serde_json::from_str("\"pago\"").unwrap();
        assert_eq!(parsed, PaymentStatus::Paid);
    }

    #[test]
    fn test_label_severity() {
        assert_eq!(PaymentStatus::Failed.label().severity, Severity::Error);
        assert_eq!(PaymentStatus::Paid.label().label, "Pago");
    }
}
