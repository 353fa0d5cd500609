//! Filter expression engine for shot record queries.
//!
//! Filter clauses are composed in the UI as ordered lists of tokens (channel
//! references, operators, literals). This crate validates a clause on every
//! edit and compiles it into the record store's Mongo-like condition grammar
//! at submission time.
//!
//! # Example
//!
//! ```
//! use shotquery_filter_rs::{compile, validate, Operator, Token};
//!
//! let clause = vec![
//!     Token::channel("type"),
//!     Token::operator(Operator::IsNotNull),
//! ];
//!
//! assert!(validate(&clause).is_ok());
//! assert_eq!(compile(&clause), r#"{"channels.type":{"$exists":true}}"#);
//! ```
//!
//! Validation is strict: a structural error carries a message naming the
//! offending token and the expected continuation, and the UI blocks the Apply
//! action until the clause is fixed. Compilation of an already-validated
//! clause cannot fail; as a defensive fallback an unparseable clause compiles
//! to the empty condition instead of aborting the whole filter set.

mod applied;
mod ast;
mod compiler;
mod error;
mod operators;
mod parser;
mod token;

pub use applied::AppliedFilters;
pub use ast::{CompareOp, FilterExpr, Literal};
pub use compiler::{compile, qualify_field, STATIC_FIELDS};
pub use error::{FilterError, FilterResult};
pub use operators::{operator_tokens, Operator, OperatorKind};
pub use parser::{validate, FilterParser};
pub use token::Token;
