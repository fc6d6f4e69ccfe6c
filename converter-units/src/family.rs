//! Unit families
//!
//! Units are only convertible within a family. Each family converts through
//! a single base unit: meter for length, gram for weight, kelvin for temperature.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Group of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Length,
    Weight,
    Temperature,
}

impl UnitFamily {
    /// All families in declaration order
    pub const ALL: [UnitFamily; 3] = [UnitFamily::Length, UnitFamily::Weight, UnitFamily::Temperature];

    /// Whether a quantity of this family may be below zero.
    /// Only temperature scales have a meaningful negative range.
    pub fn allows_negative_values(&self) -> bool {
        matches!(self, UnitFamily::Temperature)
    }

    /// Identifier of the base unit every conversion in this family goes through
    pub fn base_unit_id(&self) -> &'static str {
        match self {
            UnitFamily::Length => "M",
            UnitFamily::Weight => "G",
            UnitFamily::Temperature => "K",
        }
    }

    /// Upper-case family name ("LENGTH")
    pub fn name(&self) -> &'static str {
        match self {
            UnitFamily::Length => "LENGTH",
            UnitFamily::Weight => "WEIGHT",
            UnitFamily::Temperature => "TEMPERATURE",
        }
    }

    /// Name with the first letter capitalized and the rest lower-case ("Length")
    pub fn display_name(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_values() {
        assert!(!UnitFamily::Length.allows_negative_values());
        assert!(!UnitFamily::Weight.allows_negative_values());
        assert!(UnitFamily::Temperature.allows_negative_values());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(UnitFamily::Length.display_name(), "Length");
        assert_eq!(UnitFamily::Weight.display_name(), "Weight");
        assert_eq!(format!("{}", UnitFamily::Temperature), "Temperature");
    }

    #[test]
    fn test_base_units() {
        assert_eq!(UnitFamily::Length.base_unit_id(), "M");
        assert_eq!(UnitFamily::Weight.base_unit_id(), "G");
        assert_eq!(UnitFamily::Temperature.base_unit_id(), "K");
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&UnitFamily::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");

        let family: UnitFamily = serde_json::from_str("\"weight\"").unwrap();
        assert_eq!(family, UnitFamily::Weight);
    }
}
