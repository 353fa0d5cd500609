//! Error types for the filter expression engine.

use thiserror::Error;

/// A specialized Result type for filter validation and compilation.
pub type FilterResult<T> = Result<T, FilterError>;

/// Structural errors raised while validating a filter clause.
///
/// Every message names the offending token and the expected continuation;
/// the UI surfaces it inline next to the filter control and disables the
/// Apply action until the clause is fixed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A token that cannot begin an operand group, e.g. a clause starting
    /// with `and` or a literal where a field reference is required.
    #[error("unexpected {token}: expected a channel, 'not' or '('")]
    UnexpectedToken {
        /// Description of the offending token.
        token: String,
    },

    /// The clause ended while an operator was still awaiting its operand.
    #[error("unexpected end of filter: expected {expected}")]
    UnexpectedEndOfClause {
        /// What the grammar required next.
        expected: String,
    },

    /// A channel operand not completed by a comparison or existence operator.
    #[error("expected an operator after {operand}, got {found}")]
    MissingOperator {
        /// Description of the dangling operand.
        operand: String,
        /// Description of the token found instead.
        found: String,
    },

    /// A comparison operator followed by something that is not an operand.
    #[error("expected a channel, number, or string after '{operator}', got {found}")]
    MissingOperand {
        /// The comparison operator's symbol.
        operator: String,
        /// Description of the token found instead.
        found: String,
    },

    /// A completed predicate followed by another token with no connective.
    #[error("expected 'and' or 'or' before {token}")]
    MissingConnective {
        /// Description of the token that needed a connective before it.
        token: String,
    },

    /// An opening parenthesis with no matching close.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    /// A number token whose text does not parse as a number.
    #[error("invalid number literal: {value}")]
    InvalidNumber {
        /// The literal text.
        value: String,
    },

    /// A string token not wrapped in matching single or double quotes.
    #[error("string literal must be wrapped in matching quotes: {value}")]
    UnquotedString {
        /// The literal text.
        value: String,
    },
}

impl FilterError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>) -> Self {
        FilterError::UnexpectedToken {
            token: token.into(),
        }
    }

    /// Creates an end-of-clause error.
    pub fn end_of_clause(expected: impl Into<String>) -> Self {
        FilterError::UnexpectedEndOfClause {
            expected: expected.into(),
        }
    }

    /// Creates a missing operator error.
    pub fn missing_operator(operand: impl Into<String>, found: impl Into<String>) -> Self {
        FilterError::MissingOperator {
            operand: operand.into(),
            found: found.into(),
        }
    }

    /// Creates a missing operand error.
    pub fn missing_operand(operator: impl Into<String>, found: impl Into<String>) -> Self {
        FilterError::MissingOperand {
            operator: operator.into(),
            found: found.into(),
        }
    }

    /// Creates a missing connective error.
    pub fn missing_connective(token: impl Into<String>) -> Self {
        FilterError::MissingConnective {
            token: token.into(),
        }
    }
}
