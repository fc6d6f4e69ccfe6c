//! Converter Units - Unit catalog and conversions
//!
//! Provides the fixed catalog of units the converter understands, grouped
//! into families that convert through a shared base unit.
//!
//! Families:
//! - Length (m, km, cm, mm, mi, yd, ft, in) - base meter
//! - Weight (g, kg, mg, lb, oz) - base gram
//! - Temperature (K, C, F) - base kelvin

mod family;
mod unit;
mod quantity;
mod units;

pub use family::UnitFamily;
pub use unit::{Unit, Scale, ConversionError};
pub use quantity::{Quantity, name_or_placeholder, PLACEHOLDER};
pub use units::{UnitRegistry, UNITS};
