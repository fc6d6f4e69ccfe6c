//! Query parser
//!
//! Accepted shape, matched against the whole line and case-insensitively:
//!
//! ```text
//! <number> <unit> <connector> <unit>
//! ```
//!
//! A unit may be preceded by "degree " or "degrees ". The connector is any
//! single word and is never inspected.

use std::sync::OnceLock;
use regex::{Regex, RegexBuilder};
use crate::QueryError;

/// One parsed line, before any unit has been resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub amount: f64,
    pub source: String,
    pub target: String,
}

fn get_query_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(
            r"^(?P<amount>-?[0-9]+(?:\.[0-9]+)?) (?P<source>(?:degrees? )?[A-Za-z0-9_]+) [A-Za-z0-9_]+ (?P<target>(?:degrees? )?[A-Za-z0-9_]+)$",
        )
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("query pattern is a valid regex")
    })
}

/// Parse a query line
pub fn parse(line: &str) -> Result<ParsedQuery, QueryError> {
    let caps = get_query_regex().captures(line).ok_or(QueryError::Parse)?;

    let amount = caps["amount"].parse::<f64>().map_err(|_| QueryError::Parse)?;

    Ok(ParsedQuery {
        amount,
        source: caps["source"].to_string(),
        target: caps["target"].to_string(),
    })
}
