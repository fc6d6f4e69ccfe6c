//! Unit catalog - the fixed set of length, weight and temperature units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Unit, UnitFamily};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Ordered catalog of every known unit.
///
/// Declaration order matters: name resolution tries recognition patterns in
/// this order and the first match wins.
pub struct UnitRegistry {
    units: Vec<Unit>,
    ids: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            ids: HashMap::new(),
        };
        registry.register_all_units();
        tracing::debug!(units = registry.units.len(), "unit catalog built");
        registry
    }

    /// Resolve a free-text unit name.
    ///
    /// An exact identifier ("KM", "dc") wins over name patterns. Patterns must
    /// match the whole text, so "kilo" or "meters2" resolve to nothing.
    pub fn resolve(&self, text: &str) -> Option<&Unit> {
        let upper = text.to_ascii_uppercase();

        if let Some(unit) = self.get(&upper) {
            return Some(unit);
        }

        self.units.iter().find(|unit| unit.matches(&upper))
    }

    /// Get a unit by its upper-case identifier
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.ids.get(id).map(|&index| &self.units[index])
    }

    /// Get all units in a family, in catalog order
    pub fn by_family(&self, family: UnitFamily) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.family == family)
            .collect()
    }

    /// The unit every conversion in `family` passes through
    pub fn base_unit(&self, family: UnitFamily) -> Option<&Unit> {
        self.get(family.base_unit_id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit) {
        self.ids.insert(unit.id.clone(), self.units.len());
        self.units.push(unit);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        use UnitFamily::Length;

        self.register(Unit::linear("M", Length, "meter", 1.0));
        self.register(Unit::linear("KM", Length, "kilometer", 1000.0));
        self.register(Unit::linear("CM", Length, "centimeter", 0.01));
        self.register(Unit::linear("MM", Length, "millimeter", 0.001));
        self.register(Unit::linear("MI", Length, "mile", 1609.35));
        self.register(Unit::linear("YD", Length, "yard", 0.9144));
        self.register(Unit::linear("FT", Length, "foot", 0.3048).with_plural("feet"));
        self.register(Unit::linear("IN", Length, "inch", 0.0254).with_plural("inches"));
    }

    fn register_weight_units(&mut self) {
        use UnitFamily::Weight;

        self.register(Unit::linear("G", Weight, "gram", 1.0));
        self.register(Unit::linear("KG", Weight, "kilogram", 1000.0));
        self.register(Unit::linear("MG", Weight, "milligram", 0.001));
        self.register(Unit::linear("LB", Weight, "pound", 453.592));
        self.register(Unit::linear("OZ", Weight, "ounce", 28.3495));
    }

    fn register_temperature_units(&mut self) {
        use UnitFamily::Temperature;

        self.register(Unit::linear("K", Temperature, "kelvin", 1.0));

        // K = C + 273.15; "C" and "DC" are the same scale under two identifiers
        for id in ["C", "DC"] {
            self.register(
                Unit::affine(id, Temperature, "degree Celsius", "degrees Celsius", 273.15, 1.0, 1.0)
                    .with_pattern("(?:degrees? )?Celsius"),
            );
        }

        // K = 5 * (F + 459.67) / 9
        for id in ["F", "DF"] {
            self.register(
                Unit::affine(id, Temperature, "degree Fahrenheit", "degrees Fahrenheit", 459.67, 5.0, 9.0)
                    .with_pattern("(?:degrees? )?Fahrenheit"),
            );
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
