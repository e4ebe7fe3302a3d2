//! Patient identity entity

use serde::Serialize;
use std::fmt;

/// First and last name read from a study's sidecar
///
/// Both names are trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PatientIdentity {
    first_name: String,
    last_name: String,
}

impl PatientIdentity {
    /// Builds an identity, returning `None` when either name is blank after trimming
    pub fn new(first_name: &str, last_name: &str) -> Option<Self> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();

        if first_name.is_empty() || last_name.is_empty() {
            return None;
        }

        Some(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for PatientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        let identity = PatientIdentity::new("  Jane ", "\tDoe\n").unwrap();
        assert_eq!(identity.first_name(), "Jane");
        assert_eq!(identity.last_name(), "Doe");
        assert_eq!(identity.full_name(), "Jane Doe");
    }

    #[test]
    fn test_blank_names_are_rejected() {
        assert!(PatientIdentity::new("", "Doe").is_none());
        assert!(PatientIdentity::new("Jane", "   ").is_none());
    }
}
