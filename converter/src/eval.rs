//! Query evaluation against the unit catalog

use std::fmt;
use converter_units::{name_or_placeholder, Quantity, UnitRegistry};
use crate::parser::ParsedQuery;
use crate::QueryError;

/// A successful conversion: the quantity asked about and its equivalent
#[derive(Debug, Clone, Copy)]
pub struct Conversion<'a> {
    pub source: Quantity<'a>,
    pub target: Quantity<'a>,
}

impl fmt::Display for Conversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.source, self.target)
    }
}

/// Resolves and converts parsed queries
pub struct Evaluator<'r> {
    registry: &'r UnitRegistry,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self { registry }
    }

    /// Evaluate a query.
    ///
    /// Checks run in a fixed order: both names must resolve, then the amount
    /// must suit the source family, then the families must agree.
    pub fn eval(&self, query: &ParsedQuery) -> Result<Conversion<'r>, QueryError> {
        let source = self.registry.resolve(&query.source);
        let target = self.registry.resolve(&query.target);

        tracing::debug!(
            amount = query.amount,
            source = %query.source,
            target = %query.target,
            resolved_source = ?source.map(|u| u.id.as_str()),
            resolved_target = ?target.map(|u| u.id.as_str()),
            "resolved query units"
        );

        let (source, target) = match (source, target) {
            (Some(s), Some(t)) => (s, t),
            (s, t) => {
                return Err(QueryError::UnknownUnits {
                    from: name_or_placeholder(s).to_string(),
                    to: name_or_placeholder(t).to_string(),
                })
            }
        };

        let source = Quantity::new(query.amount, source);
        let target = source.convert_to(target)?;

        Ok(Conversion { source, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use converter_units::{UnitFamily, UNITS};

    fn eval(line: &str) -> Result<Conversion<'static>, QueryError> {
        let query = parse(line)?;
        Evaluator::new(&UNITS).eval(&query)
    }

    fn message(line: &str) -> String {
        match eval(line) {
            Ok(conversion) => conversion.to_string(),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_kilometer_to_meters() {
        assert_eq!(message("1 kilometer to meters"), "1.0 kilometer is 1000.0 meters");
    }

    #[test]
    fn test_singular_result() {
        assert_eq!(message("1000 meters to km"), "1000.0 meters is 1.0 kilometer");
    }

    #[test]
    fn test_temperature_values() {
        let c = eval("0 celsius to fahrenheit").unwrap();
        assert!((c.target.value - 32.0).abs() < 1e-9);
        assert_eq!(c.target.unit.plural, "degrees Fahrenheit");

        let f = eval("32 degrees Fahrenheit to degrees Celsius").unwrap();
        assert!(f.target.value.abs() < 1e-9);
    }

    #[test]
    fn test_negative_temperature_converts() {
        let c = eval("-5 celsius to fahrenheit").unwrap();
        assert!((c.target.value - 23.0).abs() < 1e-9);
        assert!(message("-5 celsius to fahrenheit").starts_with("-5.0 degrees Celsius is "));
    }

    #[test]
    fn test_negative_length_rejected() {
        assert_eq!(
            eval("-5 meters to feet").unwrap_err(),
            QueryError::NegativeValue { family: UnitFamily::Length }
        );
        assert_eq!(message("-5 meters to feet"), "Length shouldn't be negative");
    }

    #[test]
    fn test_negative_checked_before_compatibility() {
        assert_eq!(message("-1 pound to celsius"), "Weight shouldn't be negative");
    }

    #[test]
    fn test_negative_zero_is_allowed() {
        assert_eq!(message("-0 meters to meters"), "-0.0 meters is -0.0 meters");
    }

    #[test]
    fn test_incompatible_families() {
        assert_eq!(message("10 meters to grams"), "Conversion from meters to grams is impossible");
        assert_eq!(
            message("10 C to feet"),
            "Conversion from degrees celsius to feet is impossible"
        );
    }

    #[test]
    fn test_unknown_units_use_placeholder() {
        assert_eq!(message("10 foo to meters"), "Conversion from ??? to meters is impossible");
        assert_eq!(message("10 meters to foo"), "Conversion from meters to ??? is impossible");
        assert_eq!(message("10 foo to bar"), "Conversion from ??? to ??? is impossible");
    }

    #[test]
    fn test_unknown_unit_keeps_display_case() {
        assert_eq!(
            message("10 degrees celsius to parsecs"),
            "Conversion from degrees Celsius to ??? is impossible"
        );
    }

    #[test]
    fn test_unknown_wins_over_negative() {
        assert_eq!(message("-10 foo to meters"), "Conversion from ??? to meters is impossible");
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(message("banana"), "Parse error");
    }

    #[test]
    fn test_aliases_convert_identically() {
        let expected = eval("20 C to F").unwrap().target.value;
        for line in [
            "20 DC to F",
            "20 Celsius to F",
            "20 celsius to DF",
            "20 degree Celsius to fahrenheit",
            "20 degrees Celsius to degrees fahrenheit",
        ] {
            let c = eval(line).unwrap();
            assert_eq!(c.target.value, expected, "line {}", line);
            assert_eq!(c.source.unit.plural, "degrees Celsius");
        }
    }

    #[test]
    fn test_imperial_lengths() {
        let c = eval("1 foot to inches").unwrap();
        assert!((c.target.value - 12.0).abs() < 1e-9);
        assert!(message("1 foot to inches").starts_with("1.0 foot is "));
        assert!(message("3 feet to yards").starts_with("3.0 feet is "));
    }

    #[test]
    fn test_weight() {
        let c = eval("1 kg to pounds").unwrap();
        assert!((c.target.value - 2.2046244201837775).abs() < 1e-9);
    }
}
