use serde::{Deserialize, Serialize};

/// Wizard step, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Services = 1,
    Location = 2,
    Scheduling = 3,
    Payment = 4,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Services;
    pub const LAST: WizardStep = WizardStep::Payment;

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Services),
            2 => Some(WizardStep::Location),
            3 => Some(WizardStep::Scheduling),
            4 => Some(WizardStep::Payment),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Services => "Exames",
            WizardStep::Location => "Unidade",
            WizardStep::Scheduling => "Agendamento",
            WizardStep::Payment => "Pagamento",
        }
    }

    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::Services,
            WizardStep::Location,
            WizardStep::Scheduling,
            WizardStep::Payment,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_stay_in_range() {
        assert_eq!(WizardStep::FIRST.previous(), None);
        assert_eq!(WizardStep::LAST.next(), None);
        assert_eq!(WizardStep::Services.next(), Some(WizardStep::Location));
        assert_eq!(WizardStep::Payment.previous(), Some(WizardStep::Scheduling));
        assert_eq!(WizardStep::from_number(0), None);
        for step in WizardStep::all() {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
    }
}
