use crate::domain::common::{LocationId, ServiceId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the booking wizard
///
/// Gating failures are not errors: `advance()` simply does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("O exame {0} não está disponível")]
    ServiceNotOffered(ServiceId),

    #[error("A unidade {0} não realiza todos os exames selecionados")]
    LocationNotEligible(LocationId),

    #[error("Horário indisponível: {date} {time}")]
    SlotUnavailable { date: NaiveDate, time: String },

    #[error("Selecione uma unidade antes de escolher o horário")]
    LocationRequired,

    #[error("O pedido já está sendo processado")]
    FinalizeInProgress,

    #[error("O agendamento já foi encerrado")]
    WizardClosed,

    #[error("Falha ao consultar o servidor: {0}")]
    Collaborator(String),

    #[error("Não foi possível criar o pedido: {0}")]
    FinalizeFailed(String),

    #[error("Pagamento recusado")]
    PaymentDeclined,

    #[error("Sem resposta do servidor em {0} ms")]
    Timeout(u32),
}
