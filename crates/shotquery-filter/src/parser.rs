//! Recursive descent validator for filter token clauses.

use crate::ast::{CompareOp, FilterExpr, Literal};
use crate::error::{FilterError, FilterResult};
use crate::operators::Operator;
use crate::token::Token;

/// Parser for filter token clauses.
///
/// Walks the token list left to right and builds a [`FilterExpr`], enforcing
/// the operand/operator alternation rules along the way. The parser is pure:
/// it borrows the clause and holds no state between calls.
///
/// # Grammar
///
/// ```text
/// clause     ::= ε | or_expr
/// or_expr    ::= and_expr ("or" and_expr)*
/// and_expr   ::= unary ("and" unary)*
/// unary      ::= "not" unary | predicate
/// predicate  ::= "(" or_expr ")" | channel (compop operand | existsop)
/// operand    ::= channel | number | string
/// ```
///
/// `and` binds tighter than `or`; runs of one connective collapse into a
/// single flat node rather than a left-associative tree. The left-hand side
/// of a comparison or existence operator must be a channel token, since it
/// names the field being constrained; literals appear only on the right.
///
/// # Example
///
/// ```
/// use shotquery_filter_rs::{FilterExpr, FilterParser, Operator, Token};
///
/// let clause = vec![
///     Token::channel("shotnum"),
///     Token::operator(Operator::Gt),
///     Token::number("300"),
/// ];
///
/// let expr = FilterParser::parse(&clause).unwrap();
/// assert!(matches!(expr, Some(FilterExpr::Compare { .. })));
/// ```
pub struct FilterParser<'a> {
    tokens: &'a [Token],
    position: usize,
}

/// Validates a clause without keeping the expression tree.
///
/// Called on every edit to drive inline error display and the enabled state
/// of the Apply action. The empty clause is always valid.
pub fn validate(clause: &[Token]) -> FilterResult<()> {
    FilterParser::parse(clause).map(|_| ())
}

impl<'a> FilterParser<'a> {
    /// Parses a clause into an expression tree.
    ///
    /// Returns `Ok(None)` for the empty clause, which places no constraint
    /// on the query.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] describing the first grammar violation
    /// encountered in the token list.
    pub fn parse(clause: &'a [Token]) -> FilterResult<Option<FilterExpr>> {
        if clause.is_empty() {
            return Ok(None);
        }

        let mut parser = Self {
            tokens: clause,
            position: 0,
        };
        let expr = parser.parse_or_expr()?;

        // A completed predicate followed by anything but a connective.
        if let Some(token) = parser.peek() {
            return Err(FilterError::missing_connective(token.describe()));
        }

        Ok(Some(expr))
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns a clone of the current token.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it is the given operator.
    fn eat(&mut self, op: Operator) -> bool {
        if self.peek().and_then(Token::as_operator) == Some(op) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Parses OR expressions: `and_expr ("or" and_expr)*`
    fn parse_or_expr(&mut self) -> FilterResult<FilterExpr> {
        let mut terms = vec![self.parse_and_expr()?];

        while self.eat(Operator::Or) {
            terms.push(self.parse_and_expr()?);
        }

        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(FilterExpr::Or(terms))
        }
    }

    /// Parses AND expressions: `unary ("and" unary)*`
    fn parse_and_expr(&mut self) -> FilterResult<FilterExpr> {
        let mut terms = vec![self.parse_unary_expr()?];

        while self.eat(Operator::And) {
            terms.push(self.parse_unary_expr()?);
        }

        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(FilterExpr::And(terms))
        }
    }

    /// Parses unary expressions: `"not" unary | predicate`
    fn parse_unary_expr(&mut self) -> FilterResult<FilterExpr> {
        if self.eat(Operator::Not) {
            let inner = self.parse_unary_expr()?;
            return Ok(FilterExpr::negate(inner));
        }

        self.parse_predicate()
    }

    /// Parses predicates: `"(" or_expr ")" | channel (compop operand | existsop)`
    fn parse_predicate(&mut self) -> FilterResult<FilterExpr> {
        let token = self
            .advance()
            .ok_or_else(|| FilterError::end_of_clause("a channel or '('"))?;

        match token {
            Token::Operator {
                value: Operator::OpenParen,
                ..
            } => {
                let inner = self.parse_or_expr()?;
                if !self.eat(Operator::CloseParen) {
                    return Err(FilterError::UnclosedParenthesis);
                }
                Ok(inner)
            }

            Token::Channel { value: field, .. } => self.parse_predicate_tail(field),

            other => Err(FilterError::unexpected_token(other.describe())),
        }
    }

    /// Parses the operator and optional operand completing a predicate.
    fn parse_predicate_tail(&mut self, field: String) -> FilterResult<FilterExpr> {
        let token = self.advance().ok_or_else(|| {
            FilterError::end_of_clause(format!("an operator after channel '{field}'"))
        })?;

        let Some(op) = token.as_operator() else {
            return Err(FilterError::missing_operator(
                format!("channel '{field}'"),
                token.describe(),
            ));
        };

        if let Some(compare) = CompareOp::from_operator(op) {
            let value = self.parse_operand(op)?;
            return Ok(FilterExpr::Compare {
                field,
                op: compare,
                value,
            });
        }

        match op {
            Operator::IsNull => Ok(FilterExpr::Exists {
                field,
                present: false,
            }),
            Operator::IsNotNull => Ok(FilterExpr::Exists {
                field,
                present: true,
            }),
            // A connective, `not`, or parenthesis directly after the channel
            // leaves the operand dangling.
            _ => Err(FilterError::missing_operator(
                format!("channel '{field}'"),
                format!("'{}'", op.symbol()),
            )),
        }
    }

    /// Parses the right-hand operand of a comparison.
    fn parse_operand(&mut self, op: Operator) -> FilterResult<Literal> {
        let token = self.advance().ok_or_else(|| {
            FilterError::end_of_clause(format!(
                "a channel, number, or string after '{}'",
                op.symbol()
            ))
        })?;

        match token {
            Token::Channel { value, .. } => Ok(Literal::Channel(value)),

            Token::Number { value } => match value.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Ok(Literal::Number(parsed)),
                _ => Err(FilterError::InvalidNumber { value }),
            },

            Token::String { value } => strip_quotes(&value),

            Token::Operator { value, .. } => Err(FilterError::missing_operand(
                op.symbol(),
                format!("'{}'", value.symbol()),
            )),
        }
    }
}

/// Strips the matching quote characters from a string literal.
///
/// The UI only creates string tokens for terms wrapped in single or double
/// quotes, so a mismatch here is a structural error at input time.
fn strip_quotes(value: &str) -> FilterResult<Literal> {
    let mut chars = value.chars();
    let open = chars.next();
    let close = chars.next_back();

    match (open, close) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => {
            Ok(Literal::Str(value[1..value.len() - 1].to_string()))
        }
        _ => Err(FilterError::UnquotedString {
            value: value.to_string(),
        }),
    }
}
