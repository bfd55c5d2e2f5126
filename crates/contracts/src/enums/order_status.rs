use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Codes are the canonical vocabulary shared by every view. Legacy spellings
/// written by older admin screens are accepted on input and mapped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[serde(alias = "pending", alias = "confirmed")]
    AguardandoAtendimento,
    EmAtendimento,
    AguardandoPagamento,
    #[serde(alias = "completed")]
    Concluido,
    #[serde(alias = "cancelled", alias = "canceled")]
    Cancelado,
}

impl OrderStatus {
    /// Canonical status code
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::AguardandoAtendimento => "aguardando_atendimento",
            OrderStatus::EmAtendimento => "em_atendimento",
            OrderStatus::AguardandoPagamento => "aguardando_pagamento",
            OrderStatus::Concluido => "concluido",
            OrderStatus::Cancelado => "cancelado",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::AguardandoPagamento,
            OrderStatus::AguardandoAtendimento,
            OrderStatus::EmAtendimento,
            OrderStatus::Concluido,
            OrderStatus::Cancelado,
        ]
    }

    /// Parse a canonical or legacy code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "aguardando_atendimento" | "pending" | "confirmed" => {
                Some(OrderStatus::AguardandoAtendimento)
            }
            "em_atendimento" => Some(OrderStatus::EmAtendimento),
            "aguardando_pagamento" => Some(OrderStatus::AguardandoPagamento),
            "concluido" | "completed" => Some(OrderStatus::Concluido),
            "cancelado" | "cancelled" | "canceled" => Some(OrderStatus::Cancelado),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Concluido | OrderStatus::Cancelado)
    }

    /// Whether the backend may move an order from `self` to `next`
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (AguardandoPagamento, AguardandoAtendimento)
                | (AguardandoPagamento, Cancelado)
                | (AguardandoAtendimento, EmAtendimento)
                | (AguardandoAtendimento, Cancelado)
                | (EmAtendimento, Concluido)
                | (EmAtendimento, Cancelado)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
