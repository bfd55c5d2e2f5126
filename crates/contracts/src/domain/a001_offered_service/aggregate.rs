use crate::domain::common::{AggregateRoot, ComboId, CompanyId, ServiceId};
use crate::shared::Money;
use serde::{Deserialize, Serialize};

/// Service (exam) offered by a company at the company's own price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferedService {
    pub id: ServiceId,
    pub company_id: CompanyId,
    /// Exam name from the global catalog
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Catalog category (e.g. "Hematologia")
    #[serde(default)]
    pub category: Option<String>,
    /// Patient preparation instructions
    #[serde(default)]
    pub preparation: Option<String>,
    /// Unit price as published by the company
    pub price: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl OfferedService {
    pub fn unit_price(&self) -> Money {
        Money::from_f64(self.price)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("Invalid price for service {}", self.id));
        }
        Ok(())
    }
}

impl AggregateRoot for OfferedService {
    type Id = ServiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn list_name() -> &'static str {
        "Exames"
    }
}

/// Bundle of services booked together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCombo {
    pub id: ComboId,
    pub name: String,
    pub service_ids: Vec<ServiceId>,
}

impl AggregateRoot for ServiceCombo {
    type Id = ComboId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "combos"
    }

    fn list_name() -> &'static str {
        "Combos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_to_active() {
        let json = r#"{"id":"svc-1","company_id":"co-1","name":"Hemograma","price":45.0}"#;
        let service: OfferedService = serde_json::from_str(json).unwrap();
        assert!(service.is_active);
        assert_eq!(service.unit_price(), Money::from_cents(4500));
        assert!(service.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let service = OfferedService {
            id: "svc-1".into(),
            company_id: "co-1".into(),
            name: "Glicemia".into(),
            description: None,
            category: None,
            preparation: None,
            price: -1.0,
            is_active: true,
        };
        assert!(service.validate().is_err());
    }
}
