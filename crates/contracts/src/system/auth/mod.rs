use crate::domain::common::CompanyId;
use serde::{Deserialize, Serialize};

/// Permission level of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    CompanyAdmin,
    #[default]
    #[serde(other)]
    Customer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    /// Company the admin belongs to
    #[serde(default)]
    pub company_id: Option<CompanyId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_defaults_to_customer() {
        let json = r#"{"id":"u1","role":"lab_technician"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Customer);
        assert_eq!(user.email, None);

        let admin: UserInfo = serde_json::from_str(r#"{"id":"u2","role":"company_admin"}"#).unwrap();
        assert_eq!(admin.role, UserRole::CompanyAdmin);
    }
}
