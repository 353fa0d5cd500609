//! Lowering of parsed clauses into backend query conditions.
//!
//! The record store consumes Mongo-like condition objects: field predicates
//! such as `{"channels.type":{"$exists":true}}` combined with `$and`/`$or`/
//! `$not`. Knowledge of that grammar lives here and in
//! [`CompareOp::condition_key`](crate::CompareOp::condition_key), so a
//! backend dialect change is a table edit rather than a parser change.

use serde_json::{json, Map, Value};

use crate::ast::{FilterExpr, Literal};
use crate::parser::FilterParser;
use crate::token::Token;

/// Metadata fields present in every record.
///
/// These qualify with `metadata.` in conditions and sort keys; every other
/// channel name qualifies with `channels.`.
pub const STATIC_FIELDS: [&str; 4] = ["timestamp", "shotnum", "activeArea", "activeExperiment"];

/// Qualifies a channel name for the backend query grammar.
///
/// # Example
///
/// ```
/// use shotquery_filter_rs::qualify_field;
///
/// assert_eq!(qualify_field("shotnum"), "metadata.shotnum");
/// assert_eq!(qualify_field("N_COMP_FF_E"), "channels.N_COMP_FF_E");
/// ```
pub fn qualify_field(name: &str) -> String {
    if STATIC_FIELDS.contains(&name) {
        format!("metadata.{name}")
    } else {
        format!("channels.{name}")
    }
}

/// Compiles a clause into its serialized condition string.
///
/// The empty clause compiles to `""`, which callers drop rather than send.
/// A clause that fails to parse also compiles to `""`: validation already
/// happened at input time, so a failure here must not block the rest of the
/// filter set.
pub fn compile(clause: &[Token]) -> String {
    match FilterParser::parse(clause) {
        Ok(Some(expr)) => expr.to_condition().to_string(),
        Ok(None) | Err(_) => String::new(),
    }
}

impl FilterExpr {
    /// Lowers the expression into the backend's condition JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use shotquery_filter_rs::{FilterParser, Operator, Token};
    ///
    /// let clause = vec![
    ///     Token::channel("shotnum"),
    ///     Token::operator(Operator::IsNull),
    /// ];
    ///
    /// let expr = FilterParser::parse(&clause).unwrap().unwrap();
    /// assert_eq!(
    ///     expr.to_condition().to_string(),
    ///     r#"{"metadata.shotnum":{"$exists":false}}"#
    /// );
    /// ```
    pub fn to_condition(&self) -> Value {
        match self {
            FilterExpr::Compare { field, op, value } => {
                predicate(field, op.condition_key(), value.to_value())
            }

            FilterExpr::Exists { field, present } => {
                predicate(field, "$exists", Value::Bool(*present))
            }

            FilterExpr::And(terms) => json!({ "$and": conditions(terms) }),

            FilterExpr::Or(terms) => json!({ "$or": conditions(terms) }),

            FilterExpr::Not(inner) => json!({ "$not": inner.to_condition() }),
        }
    }
}

impl Literal {
    /// The JSON value embedded in the compiled predicate.
    fn to_value(&self) -> Value {
        match self {
            // Integral values serialize without a fractional part, matching
            // what the UI's number formatting produced.
            Literal::Number(n) if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 => {
                Value::from(*n as i64)
            }
            Literal::Number(n) => Value::from(*n),
            Literal::Str(s) => Value::from(s.as_str()),
            Literal::Channel(name) => Value::from(name.as_str()),
        }
    }
}

/// Builds a `{ "<qualified field>": { "<key>": value } }` predicate object.
fn predicate(field: &str, key: &str, value: Value) -> Value {
    let mut comparison = Map::new();
    comparison.insert(key.to_string(), value);

    let mut object = Map::new();
    object.insert(qualify_field(field), Value::Object(comparison));
    Value::Object(object)
}

fn conditions(terms: &[FilterExpr]) -> Vec<Value> {
    terms.iter().map(FilterExpr::to_condition).collect()
}
