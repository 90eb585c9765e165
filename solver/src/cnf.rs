//! The in-memory CNF instance (§3): a list of clauses, each as a
//! [`ClauseStack`], plus per-variable occurrence lists so unit propagation
//! and pure-literal elimination don't have to scan every clause to find the
//! ones that mention a given variable.

use crate::clause::ClauseStack;
use crate::dimacs::RawCnf;
use crate::literal::{Literal, VarId};
use crate::pset;

pub struct Cnf {
    num_vars: usize,
    clauses: Vec<ClauseStack>,
    /// `occurrences[v]` lists the indices of clauses mentioning variable
    /// `v`, regardless of polarity. Unindexed slot 0 is unused.
    occurrences: Vec<Vec<usize>>,
}

impl Cnf {
    pub fn from_raw(raw: &RawCnf) -> Cnf {
        let mut occurrences = vec![Vec::new(); raw.num_vars + 1];
        let mut clauses = Vec::with_capacity(raw.clauses.len());

        for (idx, literals) in raw.clauses.iter().enumerate() {
            for &lit in literals {
                occurrences[crate::literal::var_of(lit)].push(idx);
            }
            let set = pset::from_iter(literals.iter().copied());
            clauses.push(ClauseStack::new(set));
        }

        Cnf {
            num_vars: raw.num_vars,
            clauses,
            occurrences,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clause(&self, idx: usize) -> &ClauseStack {
        &self.clauses[idx]
    }

    pub fn clause_mut(&mut self, idx: usize) -> &mut ClauseStack {
        &mut self.clauses[idx]
    }

    pub fn clauses_mut(&mut self) -> &mut [ClauseStack] {
        &mut self.clauses
    }

    /// Indices of clauses mentioning `var`, in either polarity.
    pub fn occurrences_of(&self, var: VarId) -> &[usize] {
        &self.occurrences[var]
    }
}

/// Removes `lit` from a clause's residual literal set, returning the new
/// set. A no-op (returns the same set) if `lit` isn't present.
pub fn without_literal(literals: &pset::Pset, lit: Literal) -> pset::Pset {
    if pset::contains(literals, lit) {
        pset::remove(literals, lit)
    } else {
        pset::refup(literals)
    }
}
