use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AuthError;
use crate::database::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Vendor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "vendor" => Ok(Role::Vendor),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Role gate: the principal's role must equal `role` exactly.
pub fn require(principal: &User, role: Role) -> Result<(), AuthError> {
    if principal.role == role {
        Ok(())
    } else {
        Err(AuthError::Forbidden { required: role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures;

    #[test]
    fn gate_admits_only_matching_role() {
        let users = fixtures::users();
        let customer = users.iter().find(|u| u.role == Role::Customer).unwrap();
        let admin = users.iter().find(|u| u.role == Role::Admin).unwrap();

        assert!(require(admin, Role::Admin).is_ok());
        assert!(matches!(
            require(customer, Role::Admin),
            Err(AuthError::Forbidden { required: Role::Admin })
        ));
        // admin is not a superset of vendor
        assert!(require(admin, Role::Vendor).is_err());
    }

    #[test]
    fn parses_roles_case_insensitively() {
        assert_eq!("Vendor".parse::<Role>().unwrap(), Role::Vendor);
        assert!("root".parse::<Role>().is_err());
    }
}
