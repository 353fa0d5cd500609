//! The ordered collection of filter clauses currently in effect.

use serde::{Deserialize, Serialize};

use crate::compiler::compile;
use crate::error::FilterResult;
use crate::parser::validate;
use crate::token::Token;

/// The applied-filters collection: an ordered list of clauses.
///
/// Each clause is independently valid or empty. The "no filters" state is a
/// list containing exactly one empty clause, never an empty outer list; the
/// constructors preserve that invariant. Serializes transparently as the
/// nested token-list JSON the UI store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppliedFilters {
    clauses: Vec<Vec<Token>>,
}

impl Default for AppliedFilters {
    fn default() -> Self {
        Self::new()
    }
}

impl AppliedFilters {
    /// Creates the default "no filters" state: `[[]]`.
    pub fn new() -> Self {
        Self {
            clauses: vec![Vec::new()],
        }
    }

    /// Creates the collection from clauses, normalizing an empty outer list
    /// back to the `[[]]` default.
    pub fn from_clauses(clauses: Vec<Vec<Token>>) -> Self {
        if clauses.is_empty() {
            Self::new()
        } else {
            Self { clauses }
        }
    }

    /// The clauses, in their applied order.
    pub fn clauses(&self) -> &[Vec<Token>] {
        &self.clauses
    }

    /// Appends a new clause (the "Add new filter" action).
    pub fn push_clause(&mut self, clause: Vec<Token>) {
        self.clauses.push(clause);
    }

    /// Replaces the clause at `index`, ignoring out-of-range indices.
    pub fn set_clause(&mut self, index: usize, clause: Vec<Token>) {
        if let Some(slot) = self.clauses.get_mut(index) {
            *slot = clause;
        }
    }

    /// Removes the clause at `index`, restoring the `[[]]` default if the
    /// last clause is removed.
    pub fn remove_clause(&mut self, index: usize) {
        if index < self.clauses.len() {
            self.clauses.remove(index);
        }
        if self.clauses.is_empty() {
            self.clauses.push(Vec::new());
        }
    }

    /// Returns true when no clause places any constraint on the query.
    pub fn is_empty(&self) -> bool {
        self.clauses.iter().all(|clause| clause.is_empty())
    }

    /// Validates every clause.
    ///
    /// # Errors
    ///
    /// Returns the first structural error found; a single invalid clause
    /// blocks the entire Apply action.
    pub fn validate(&self) -> FilterResult<()> {
        for clause in &self.clauses {
            validate(clause)?;
        }
        Ok(())
    }

    /// Compiles every clause, dropping empty conditions.
    ///
    /// Each surviving string becomes one `conditions` query parameter; the
    /// backend combines them with AND.
    pub fn to_conditions(&self) -> Vec<String> {
        self.clauses
            .iter()
            .map(|clause| compile(clause))
            .filter(|condition| !condition.is_empty())
            .collect()
    }
}
