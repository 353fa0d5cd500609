//! The fixed operator vocabulary for filter expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Position class of an operator within a clause.
///
/// The autocomplete collaborator uses this to decide which suggestions are
/// sensible at the current cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Binary comparison between a channel and a literal (`==`, `!=`, ...).
    Comparison,
    /// Unary postfix existence check (`is null`, `is not null`).
    Existence,
    /// Logical connective joining two completed predicates (`and`, `or`).
    Connective,
    /// Prefix negation (`not`).
    Negation,
    /// Parentheses.
    Grouping,
}

/// An operator in the filter vocabulary.
///
/// Serializes as its symbol string so operator tokens round-trip through the
/// UI wire format, e.g. `{"type":"operator","value":"is not null"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    Ne,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
    /// Field absent (`is null`).
    IsNull,
    /// Field present (`is not null`).
    IsNotNull,
    /// Logical AND (`and`).
    And,
    /// Logical OR (`or`).
    Or,
    /// Logical NOT (`not`).
    Not,
    /// Opening parenthesis `(`.
    OpenParen,
    /// Closing parenthesis `)`.
    CloseParen,
}

impl Operator {
    /// Every operator, in the order offered to the autocomplete collaborator.
    pub const ALL: [Operator; 13] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::OpenParen,
        Operator::CloseParen,
    ];

    /// The symbol as it appears in a token's `value` field.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::IsNull => "is null",
            Operator::IsNotNull => "is not null",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::OpenParen => "(",
            Operator::CloseParen => ")",
        }
    }

    /// Display label shown in suggestion dropdowns (same text as the symbol).
    pub fn label(&self) -> &'static str {
        self.symbol()
    }

    /// The position class of this operator.
    pub fn kind(&self) -> OperatorKind {
        match self {
            Operator::Eq
            | Operator::Ne
            | Operator::Gt
            | Operator::Gte
            | Operator::Lt
            | Operator::Lte => OperatorKind::Comparison,
            Operator::IsNull | Operator::IsNotNull => OperatorKind::Existence,
            Operator::And | Operator::Or => OperatorKind::Connective,
            Operator::Not => OperatorKind::Negation,
            Operator::OpenParen | Operator::CloseParen => OperatorKind::Grouping,
        }
    }

    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Operator::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<String> for Operator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Operator::from_symbol(&value).ok_or_else(|| format!("unknown operator: {value}"))
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> String {
        op.symbol().to_string()
    }
}

/// Ready-made operator tokens for populating autocomplete options alongside
/// channel names.
pub fn operator_tokens() -> Vec<Token> {
    Operator::ALL.iter().map(|op| Token::operator(*op)).collect()
}
