//! Expression tree for validated filter clauses.

use crate::operators::Operator;

/// Comparison operators usable between a channel and a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

impl CompareOp {
    /// The backend query-grammar key for this comparison.
    pub fn condition_key(&self) -> &'static str {
        match self {
            CompareOp::Eq => "$eq",
            CompareOp::Ne => "$ne",
            CompareOp::Gt => "$gt",
            CompareOp::Gte => "$gte",
            CompareOp::Lt => "$lt",
            CompareOp::Lte => "$lte",
        }
    }

    /// Narrows a vocabulary operator to a comparison, if it is one.
    pub fn from_operator(op: Operator) -> Option<CompareOp> {
        match op {
            Operator::Eq => Some(CompareOp::Eq),
            Operator::Ne => Some(CompareOp::Ne),
            Operator::Gt => Some(CompareOp::Gt),
            Operator::Gte => Some(CompareOp::Gte),
            Operator::Lt => Some(CompareOp::Lt),
            Operator::Lte => Some(CompareOp::Lte),
            _ => None,
        }
    }
}

/// A literal on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal, parsed from its token text.
    Number(f64),
    /// String literal with the surrounding quotes stripped.
    Str(String),
    /// A channel name compared as a raw string value.
    Channel(String),
}

/// A validated filter clause.
///
/// Runs of one connective collapse into a single flat `And`/`Or` node in
/// left-to-right order; the backend treats these arrays as associative, so
/// no left-associative nesting is built. Parentheses produce explicit
/// nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// `channel OP literal` comparison.
    Compare {
        /// The unqualified channel name from the left-hand token.
        field: String,
        /// The comparison operator.
        op: CompareOp,
        /// The right-hand literal.
        value: Literal,
    },

    /// `channel is null` (`present == false`) or `channel is not null`
    /// (`present == true`).
    Exists {
        /// The unqualified channel name.
        field: String,
        /// Whether the field must be present.
        present: bool,
    },

    /// Conjunction of two or more terms.
    And(Vec<FilterExpr>),

    /// Disjunction of two or more terms.
    Or(Vec<FilterExpr>),

    /// Negation of a term.
    Not(Box<FilterExpr>),
}

impl FilterExpr {
    /// Creates a NOT expression from another expression.
    pub fn negate(inner: FilterExpr) -> Self {
        FilterExpr::Not(Box::new(inner))
    }
}
