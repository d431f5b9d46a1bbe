use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The role attached to an account, controlling which operations it may
/// perform.
///
/// Only `owner` and `buyer` can be self-registered; the single `admin`
/// account is seeded at startup and never created through registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Approves and removes accounts.
    Admin,
    /// Manages the inventory.
    Owner,
    /// Browses the catalog and purchases items.
    Buyer,
}

impl Role {
    /// The lowercase token used in forms, URLs, and the text export.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Owner => "owner",
            Self::Buyer => "buyer",
        }
    }
}

impl FromStr for Role {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            "buyer" => Ok(Self::Buyer),
            other => Err(TypeError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("buyer".parse::<Role>().unwrap(), Role::Buyer);
    }

    #[test]
    fn parse_unknown_role() {
        let err = "seller".parse::<Role>().unwrap_err();
        assert_eq!(err, TypeError::UnknownRole("seller".to_string()));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Admin".parse::<Role>().is_err());
        assert!("BUYER".parse::<Role>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for role in [Role::Admin, Role::Owner, Role::Buyer] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&Role::Buyer).unwrap();
        assert_eq!(json, "\"buyer\"");
        let parsed: Role = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(parsed, Role::Owner);
    }
}
