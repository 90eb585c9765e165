//! A DPLL-based SAT solver over a persistent, reference-counted clause
//! representation.
//!
//! Clauses are stored as immutable integer sets (see [`pset`]); deciding a
//! variable never mutates a clause's current residual set, it pushes a new,
//! structurally-shared version onto that clause's stack (see [`clause`]).
//! A single monotonically increasing mark names each frame of the search,
//! so backtracking is "pop every clause version and every trail entry
//! stamped at or above this mark" rather than an explicit undo log (see
//! [`dpll`] and [`trail`]).
//!
//! ```
//! use std::io::Cursor;
//! use solver::{dimacs, cnf::Cnf, dpll::Solver};
//!
//! let raw = dimacs::parse(Cursor::new("p cnf 2 2\n1 2 0\n1 -2 0\n")).unwrap();
//! let mut solver = Solver::new(Cnf::from_raw(&raw));
//! assert!(solver.solve());
//! ```

pub mod clause;
pub mod cnf;
pub mod dimacs;
pub mod dpll;
pub mod error;
pub mod literal;
pub mod pset;
pub mod solution;
pub mod trail;

pub use error::ParseError;
pub use solution::{Assignment, Solution};

use std::io::Read;

/// Parses a DIMACS CNF document and solves it in one call.
pub fn solve(input: impl Read) -> Result<Solution, ParseError> {
    let raw = dimacs::parse(input)?;
    let cnf = cnf::Cnf::from_raw(&raw);
    let mut solver = dpll::Solver::new(cnf);

    if solver.solve() {
        Ok(Solution::Satisfiable(Assignment::from_trail(solver.trail())))
    } else {
        Ok(Solution::Unsatisfiable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_reports_satisfiable_with_an_assignment() {
        let solution = solve("p cnf 1 1\n1 0\n".as_bytes()).unwrap();
        match solution {
            Solution::Satisfiable(assignment) => assert_eq!(assignment.true_vars, vec![1]),
            Solution::Unsatisfiable => panic!("expected satisfiable"),
        }
    }

    #[test]
    fn solve_reports_unsatisfiable() {
        let solution = solve("p cnf 1 2\n1 0\n-1 0\n".as_bytes()).unwrap();
        assert_eq!(solution, Solution::Unsatisfiable);
    }

    #[test]
    fn solve_propagates_parse_errors() {
        let err = solve("c no header here\n1 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader { .. }));
    }
}
