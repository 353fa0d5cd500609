//! Filter clause tokens as exchanged with the UI collaborator.

use serde::{Deserialize, Serialize};

use crate::operators::Operator;

/// One token of a filter clause.
///
/// The wire format matches the tagged objects the UI stores, e.g.
/// `{"type":"channel","value":"shotnum","label":"Shot Number"}`. A clause is
/// an ordered list of these tokens; the engine never owns the list, it only
/// validates and compiles slices it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Token {
    /// A named data channel (scalar/image/waveform) or static metadata field.
    Channel {
        /// The channel's system name.
        value: String,
        /// Optional display label.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// One of the fixed operator vocabulary.
    Operator {
        /// The operator, carried by its symbol on the wire.
        value: Operator,
        /// Optional display label.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// A numeric literal, kept in its string representation.
    Number {
        /// The literal text, e.g. `"300"` or `"4.5"`.
        value: String,
    },
    /// A quoted string literal, quote characters included.
    String {
        /// The literal text including its surrounding quotes, e.g. `"'EX'"`.
        value: String,
    },
}

impl Token {
    /// Creates a channel token without a display label.
    pub fn channel(value: impl Into<String>) -> Self {
        Token::Channel {
            value: value.into(),
            label: None,
        }
    }

    /// Creates a channel token with a display label.
    pub fn labelled_channel(value: impl Into<String>, label: impl Into<String>) -> Self {
        Token::Channel {
            value: value.into(),
            label: Some(label.into()),
        }
    }

    /// Creates an operator token with its display label filled in.
    pub fn operator(op: Operator) -> Self {
        Token::Operator {
            value: op,
            label: Some(op.label().to_string()),
        }
    }

    /// Creates a number token from its literal text.
    pub fn number(value: impl Into<String>) -> Self {
        Token::Number {
            value: value.into(),
        }
    }

    /// Creates a string token; `value` must include its quote characters.
    pub fn string(value: impl Into<String>) -> Self {
        Token::String {
            value: value.into(),
        }
    }

    /// The operator carried by this token, if it is an operator token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Short description of the token, used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Channel { value, .. } => format!("channel '{value}'"),
            Token::Operator { value, .. } => format!("'{}'", value.symbol()),
            Token::Number { value } => format!("number {value}"),
            Token::String { value } => format!("string {value}"),
        }
    }
}
