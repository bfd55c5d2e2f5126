use super::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(format!("Empty {}", stringify!($name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Service offered by a company (an exam with the company's price)
    ServiceId
);
string_id!(
    /// Collection point / clinic where services are performed
    LocationId
);
string_id!(
    /// Bundle of services sold as one bookable unit
    ComboId
);
string_id!(
    /// Order created by the backend on finalize
    OrderId
);
string_id!(
    /// Tenant company owning services and locations
    CompanyId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_trims_and_rejects_empty() {
        assert_eq!(
            ServiceId::from_string("  svc-123 ").unwrap(),
            ServiceId::from("svc-123")
        );
        assert!(ServiceId::from_string("   ").is_err());
        assert!(ComboId::from_string("").is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = LocationId::from("loc-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"loc-1\"");
        let back: LocationId = serde_json::from_str("\"loc-1\"").unwrap();
        assert_eq!(back, id);
    }
}
