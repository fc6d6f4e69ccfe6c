//! Query diagnostics
//!
//! A rejected query is not a failure of the program. Every variant renders
//! as the exact line shown to the user, and the session keeps running.

use serde::Serialize;
use thiserror::Error;
use converter_units::{ConversionError, UnitFamily};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const NEGATIVE_VALUE: &str = "NEGATIVE_VALUE";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryError {
    /// Line does not have the shape `<number> <unit> <word> <unit>`
    #[error("Parse error")]
    Parse,

    /// At least one unit name is not in the catalog; unknown sides read "???"
    #[error("Conversion from {from} to {to} is impossible")]
    UnknownUnits { from: String, to: String },

    #[error("{family} shouldn't be negative")]
    NegativeValue { family: UnitFamily },

    #[error("Conversion from {from} to {to} is impossible")]
    IncompatibleUnits { from: String, to: String },
}

impl QueryError {
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Parse => codes::PARSE_ERROR,
            QueryError::UnknownUnits { .. } => codes::UNKNOWN_UNIT,
            QueryError::NegativeValue { .. } => codes::NEGATIVE_VALUE,
            QueryError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
        }
    }
}

impl From<ConversionError> for QueryError {
    fn from(e: ConversionError) -> Self {
        match e {
            ConversionError::NegativeValue { family, .. } => QueryError::NegativeValue { family },
            ConversionError::IncompatibleFamilies { from, to, .. } => QueryError::IncompatibleUnits {
                from: from.to_lowercase(),
                to: to.to_lowercase(),
            },
        }
    }
}
