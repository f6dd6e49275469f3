//! Dimension selector expressions.
//!
//! Width and height selectors are keyed by a comparison such as `"> 400"` or
//! `"<=320"`. The grammar is an operator followed by a number; nothing else
//! is evaluated.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("empty dimension query")]
    Empty,
    #[error("dimension query '{0}' has no comparison operator")]
    MissingOperator(String),
    #[error("dimension query '{query}' has an invalid operand '{operand}'")]
    InvalidOperand { query: String, operand: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
        }
    }
}

/// A parsed `<op> <number>` comparison against a viewport dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionQuery {
    pub comparison: Comparison,
    pub operand: f64,
}

impl DimensionQuery {
    /// Returns whether `value` satisfies the query.
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::Less => value < self.operand,
            Comparison::LessOrEqual => value <= self.operand,
            Comparison::Greater => value > self.operand,
            Comparison::GreaterOrEqual => value >= self.operand,
            Comparison::Equal => (value - self.operand).abs() < f64::EPSILON,
            Comparison::NotEqual => (value - self.operand).abs() >= f64::EPSILON,
        }
    }
}

impl FromStr for DimensionQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        if query.is_empty() {
            return Err(QueryError::Empty);
        }

        // Two-character operators first so "<=" is not read as "<".
        let operators = [
            ("<=", Comparison::LessOrEqual),
            (">=", Comparison::GreaterOrEqual),
            ("==", Comparison::Equal),
            ("!=", Comparison::NotEqual),
            ("<", Comparison::Less),
            (">", Comparison::Greater),
        ];

        let (comparison, rest) = operators
            .iter()
            .find_map(|(symbol, comparison)| query.strip_prefix(symbol).map(|rest| (*comparison, rest)))
            .ok_or_else(|| QueryError::MissingOperator(query.to_string()))?;

        let operand_text = rest.trim();
        let operand = operand_text
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| QueryError::InvalidOperand {
                query: query.to_string(),
                operand: operand_text.to_string(),
            })?;

        Ok(Self { comparison, operand })
    }
}

impl fmt::Display for DimensionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.comparison.symbol(), self.operand)
    }
}
