//! Unit definitions with their conversion scales

use std::fmt;
use regex::{Regex, RegexBuilder};
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::UnitFamily;

/// How a unit maps onto its family's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scale {
    /// base = value * factor
    Linear { factor: f64 },
    /// base = numerator * (value + offset) / denominator
    Affine { offset: f64, numerator: f64, denominator: f64 },
}

impl Scale {
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor } => value * factor,
            Scale::Affine { offset, numerator, denominator } => numerator * (value + offset) / denominator,
        }
    }

    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor } => value / factor,
            Scale::Affine { offset, numerator, denominator } => denominator * value / numerator - offset,
        }
    }
}

/// A recognized unit of measurement
#[derive(Debug, Clone)]
pub struct Unit {
    /// Short identifier, upper-case (e.g., "KM", "DC")
    pub id: String,
    /// Family the unit converts within
    pub family: UnitFamily,
    /// Display name for a quantity of exactly one (e.g., "foot")
    pub singular: String,
    /// Display name for every other quantity (e.g., "feet")
    pub plural: String,
    /// Conversion to and from the family base unit
    pub scale: Scale,
    /// Whole-string, case-insensitive matcher for free-text names
    pattern: Regex,
}

impl Unit {
    /// Create a unit with a proportional conversion and the regular "s" plural
    pub fn linear(id: &str, family: UnitFamily, singular: &str, factor: f64) -> Self {
        Self::new(id, family, singular, &format!("{}s", singular), Scale::Linear { factor })
    }

    /// Create a unit with an offset conversion (temperature scales)
    pub fn affine(
        id: &str,
        family: UnitFamily,
        singular: &str,
        plural: &str,
        offset: f64,
        numerator: f64,
        denominator: f64,
    ) -> Self {
        Self::new(id, family, singular, plural, Scale::Affine { offset, numerator, denominator })
    }

    fn new(id: &str, family: UnitFamily, singular: &str, plural: &str, scale: Scale) -> Self {
        Unit {
            id: id.to_string(),
            family,
            singular: singular.to_string(),
            plural: plural.to_string(),
            scale,
            pattern: name_pattern(singular, plural),
        }
    }

    /// Override an irregular plural ("feet"); the recognition pattern follows it
    pub fn with_plural(mut self, plural: &str) -> Self {
        self.plural = plural.to_string();
        self.pattern = name_pattern(&self.singular, &self.plural);
        self
    }

    /// Replace the derived recognition pattern with a custom regular expression
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = compile_pattern(pattern);
        self
    }

    /// Check whether `text` as a whole names this unit
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Check if this is the base unit of its family
    pub fn is_base(&self) -> bool {
        self.id == self.family.base_unit_id()
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        matches!(self.scale, Scale::Affine { .. })
    }

    /// Check if two units belong to the same family
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.family == other.family
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.scale.to_base(value)
    }

    pub fn from_base(&self, value: f64) -> f64 {
        self.scale.from_base(value)
    }

    /// Convert a value in this unit to `target`.
    ///
    /// The sign of the value is validated against this unit's family before
    /// family compatibility is checked.
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if value < 0.0 && !self.family.allows_negative_values() {
            return Err(ConversionError::NegativeValue {
                unit: self.id.clone(),
                family: self.family,
            });
        }

        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleFamilies {
                from: self.plural.clone(),
                to: target.plural.clone(),
                from_family: self.family,
                to_family: target.family,
            });
        }

        Ok(target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

fn name_pattern(singular: &str, plural: &str) -> Regex {
    compile_pattern(&format!("{}|{}", regex::escape(singular), regex::escape(plural)))
}

fn compile_pattern(pattern: &str) -> Regex {
    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("unit recognition patterns are built from the fixed catalog")
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Value is below zero in a family that has no negative range
    #[error("{family} shouldn't be negative")]
    NegativeValue { unit: String, family: UnitFamily },

    /// Units belong to different families
    #[error("cannot convert {from} ({from_family}) to {to} ({to_family}): incompatible families")]
    IncompatibleFamilies {
        from: String,
        to: String,
        from_family: UnitFamily,
        to_family: UnitFamily,
    },
}
