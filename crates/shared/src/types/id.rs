//! Typed identifiers for subjects, persons, and organizations.
//!
//! Using typed IDs prevents accidentally passing a person number where an
//! actor id is expected. All identifiers compare by their canonical string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mod11;

/// Errors raised when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The identifier is empty.
    #[error("Identifier must not be empty")]
    Empty,

    /// The identifier contains characters other than ASCII digits.
    #[error("Identifier must contain only digits: {0}")]
    NotNumeric(String),

    /// The organization number fails the Mod 11 check.
    #[error("Invalid organization number: {0}")]
    InvalidOrgNumber(String),
}

/// Macro to generate numeric string identifier wrappers.
macro_rules! numeric_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses an identifier, requiring a non-empty run of ASCII digits.
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(IdError::Empty);
                }
                if !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(IdError::NotNumeric(value));
                }
                Ok(Self(value))
            }

            /// Returns the canonical string form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

numeric_id!(ActorId, "Internal subject identifier used to query the registries.");
numeric_id!(PersonNumber, "National identity number of a person.");

/// A 9-digit organization number that passed the Mod 11 check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrgNumber(String);

impl OrgNumber {
    /// Validates and wraps an organization number.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if mod11::is_valid_org_number(&value) {
            Ok(Self(value))
        } else {
            Err(IdError::InvalidOrgNumber(value))
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrgNumber {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OrgNumber {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrgNumber> for String {
    fn from(id: OrgNumber) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_number_accepts_valid() {
        let org = OrgNumber::new("889640782").unwrap();
        assert_eq!(org.as_str(), "889640782");
        assert_eq!(org.to_string(), "889640782");
    }

    #[test]
    fn test_org_number_rejects_invalid() {
        assert_eq!(
            OrgNumber::new("889640781"),
            Err(IdError::InvalidOrgNumber("889640781".into()))
        );
        assert!(OrgNumber::from_str("88964078").is_err());
    }

    #[test]
    fn test_org_number_deserialize_validates() {
        let ok: OrgNumber = serde_json::from_str("\"995277670\"").unwrap();
        assert_eq!(ok.as_str(), "995277670");
        assert!(serde_json::from_str::<OrgNumber>("\"995277671\"").is_err());
    }

    #[test]
    fn test_numeric_id_rules() {
        assert!(ActorId::new("1000012345678").is_ok());
        assert_eq!(ActorId::new(""), Err(IdError::Empty));
        assert_eq!(
            PersonNumber::new("1234x"),
            Err(IdError::NotNumeric("1234x".into()))
        );
    }

    #[test]
    fn test_numeric_id_serializes_as_string() {
        let id = ActorId::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
