//! Errors the library can report. A conflict discovered during search is
//! deliberately *not* part of this enum (it is an internal `bool` signal
//! consumed entirely by the DPLL driver, §7), and UNSAT is a legitimate
//! [`Solution`](crate::solution::Solution) variant, not an error.

use thiserror::Error;

/// Errors that can occur while parsing a DIMACS CNF input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: malformed header, expected 'p cnf <nvars> <nclauses>', got '{text}'")]
    InvalidHeader { line: usize, text: String },

    #[error("line {line}: missing 'p cnf ...' header")]
    MissingHeader { line: usize },

    #[error("line {line}: expected a non-zero signed integer, got '{text}'")]
    InvalidToken { line: usize, text: String },

    #[error("line {line}: unterminated clause, reached end of input before a closing 0")]
    UnterminatedClause { line: usize },

    #[error("line {line}: literal {literal} has variable {var} outside of 1..={num_vars}")]
    VariableOutOfRange {
        line: usize,
        literal: i64,
        var: i64,
        num_vars: usize,
    },

    #[error("line {line}: literal {literal} occurs twice in the same clause")]
    DuplicateLiteral { line: usize, literal: i64 },

    #[error("header declares {expected} clauses but {found} were present")]
    ClauseCountMismatch { expected: usize, found: usize },
}
