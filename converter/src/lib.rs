//! Converter - natural-language unit conversion
//!
//! Answers queries such as `"3 feet to meters"` or
//! `"100 degrees Celsius in Fahrenheit"` with a one-line sentence, and runs
//! the prompt/answer loop around them.

mod error;
mod parser;
mod eval;
mod session;

pub use error::{QueryError, codes};
pub use parser::{parse, ParsedQuery};
pub use eval::{Conversion, Evaluator};
pub use session::{Session, SessionState, PROMPT, EXIT_COMMAND};

use converter_units::{UnitRegistry, UNITS};

/// Main conversion engine
#[derive(Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r UnitRegistry,
}

impl Converter<'static> {
    /// Engine backed by the built-in unit catalog
    pub fn new() -> Self {
        Self { registry: &UNITS }
    }
}

impl<'r> Converter<'r> {
    pub fn with_registry(registry: &'r UnitRegistry) -> Self {
        Self { registry }
    }

    pub fn convert(&self, line: &str) -> Result<Conversion<'r>, QueryError> {
        let query = parser::parse(line)?;
        tracing::debug!(?query, "parsed query");
        Evaluator::new(self.registry).eval(&query)
    }

    /// The line to show for `line`: a result sentence or a diagnostic
    pub fn answer(&self, line: &str) -> String {
        match self.convert(line) {
            Ok(conversion) => conversion.to_string(),
            Err(e) => {
                tracing::debug!(code = e.code(), "query rejected: {}", e);
                e.to_string()
            }
        }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}
