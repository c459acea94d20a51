use serde::{Deserialize, Serialize};

/// Role of a back-office or marketplace user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Admin,
    Customer,
    Supplier,
    ServiceProvider,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Customer => "Customer",
            UserRole::Supplier => "Supplier",
            UserRole::ServiceProvider => "Service provider",
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&UserRole::ServiceProvider).unwrap();
        assert_eq!(json, "\"service-provider\"");
        let parsed: UserStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, UserStatus::Inactive);
    }
}
