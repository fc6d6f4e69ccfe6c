//! Quantities - a value paired with its unit, and how they read in a sentence

use std::fmt;
use crate::Unit;

/// Stand-in name for a unit that could not be resolved
pub const PLACEHOLDER: &str = "???";

/// A value with an attached unit
#[derive(Debug, Clone, Copy)]
pub struct Quantity<'a> {
    pub value: f64,
    pub unit: &'a Unit,
}

impl<'a> Quantity<'a> {
    pub fn new(value: f64, unit: &'a Unit) -> Self {
        Quantity { value, unit }
    }

    /// Re-express this quantity in `target`
    pub fn convert_to<'b>(&self, target: &'b Unit) -> Result<Quantity<'b>, crate::ConversionError> {
        let value = self.unit.convert_to(self.value, target)?;
        Ok(Quantity::new(value, target))
    }
}

/// Exactly one reads as "1.0 meter"; any other value takes the plural.
impl fmt::Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 1.0 {
            write!(f, "1.0 {}", self.unit.singular)
        } else {
            write!(f, "{:?} {}", self.value, self.unit.plural)
        }
    }
}

impl Unit {
    pub fn format_quantity(&self, value: f64) -> String {
        Quantity::new(value, self).to_string()
    }
}

/// Plural display name of a unit, or [`PLACEHOLDER`] when it is unknown
pub fn name_or_placeholder(unit: Option<&Unit>) -> &str {
    unit.map_or(PLACEHOLDER, |u| u.plural.as_str())
}
