//! Single lookup table from order status codes to display label and severity.

use super::OrderStatus;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Badge severity used by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Success,
    Error,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel {
    pub label: &'static str,
    pub severity: Severity,
}

impl StatusLabel {
    pub const fn new(label: &'static str, severity: Severity) -> Self {
        Self { label, severity }
    }
}

/// Entry for codes outside the known vocabulary
pub const UNKNOWN_STATUS: StatusLabel = StatusLabel::new("Status desconhecido", Severity::Neutral);

static STATUS_LABELS: Lazy<HashMap<OrderStatus, StatusLabel>> = Lazy::new(|| {
    HashMap::from([
        (
            OrderStatus::AguardandoPagamento,
            StatusLabel::new("Aguardando pagamento", Severity::Warning),
        ),
        (
            OrderStatus::AguardandoAtendimento,
            StatusLabel::new("Aguardando atendimento", Severity::Warning),
        ),
        (
            OrderStatus::EmAtendimento,
            StatusLabel::new("Em atendimento", Severity::Info),
        ),
        (
            OrderStatus::Concluido,
            StatusLabel::new("Concluído", Severity::Success),
        ),
        (
            OrderStatus::Cancelado,
            StatusLabel::new("Cancelado", Severity::Error),
        ),
    ])
});

/// Resolve a raw status code (canonical or legacy) to its label
pub fn status_label(code: &str) -> StatusLabel {
    OrderStatus::from_code(code)
        .and_then(|status| STATUS_LABELS.get(&status).copied())
        .unwrap_or(UNKNOWN_STATUS)
}
