//! The DPLL search driver (§4.3-§4.7): unit propagation, pure-literal
//! elimination, and a recursive, mark-stamped branch-and-backtrack search
//! over the assignment trail and the clauses' versioned literal sets.
//!
//! No CDCL, no learned clauses, no restarts, no branching heuristic beyond
//! "first unassigned variable", no incremental API, no multithreading. This
//! is the plain recursive search, not an engine.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::clause::Mark;
use crate::cnf::{self, Cnf};
use crate::literal::{self, VarId};
use crate::pset;
use crate::trail::{State, Trail};

pub struct Solver {
    cnf: Cnf,
    trail: Trail,
    next_mark: Mark,
}

impl Solver {
    pub fn new(cnf: Cnf) -> Solver {
        let num_vars = cnf.num_vars();
        Solver {
            cnf,
            trail: Trail::new(num_vars),
            next_mark: 1,
        }
    }

    /// Runs the search to completion and reports whether the instance is
    /// satisfiable. On success, the trail holds a satisfying assignment;
    /// variables that never had to be decided stay unassigned ("don't
    /// care", §6.3) rather than being forced to an arbitrary value.
    pub fn solve(&mut self) -> bool {
        self.sat()
    }

    fn all_clauses_trivially_true(&self) -> bool {
        (0..self.cnf.num_clauses()).all(|i| self.cnf.clause(i).top().satisfied)
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Assigns `var` to `sign` (true/false) at `mark`, updating every clause
    /// that mentions it: clauses containing the satisfied literal are
    /// pushed to a satisfied version, clauses containing the falsified
    /// literal have it removed from their residual set. Returns `false` on
    /// conflict, when some clause's residual set became empty.
    fn try_set(&mut self, var: VarId, sign: bool, mark: Mark) -> bool {
        trace!("try_set: var {} = {} at mark {}", var, sign, mark);
        if sign {
            self.trail.remove_from_z(var);
            self.trail.assign_true(var, mark);
        } else {
            self.trail.remove_from_z(var);
            self.trail.assign_false(var, mark);
        }

        let satisfied_lit = literal::of(var, sign);
        let falsified_lit = literal::of(var, !sign);
        let mut ok = true;

        for &idx in self.cnf.occurrences_of(var).to_vec().iter() {
            let clause = self.cnf.clause_mut(idx);
            if clause.top().satisfied {
                continue;
            }
            if pset::contains(&clause.top().literals, satisfied_lit) {
                clause.push_satisfy(mark);
            } else if pset::contains(&clause.top().literals, falsified_lit) {
                let shrunk = cnf::without_literal(&clause.top().literals, falsified_lit);
                if !clause.push_shrink(shrunk, mark) {
                    debug!("try_set: conflict in clause {} at mark {}", idx, mark);
                    ok = false;
                }
            }
        }

        ok
    }

    /// Undoes every effect stamped with mark `>= threshold`: every clause's
    /// version stack and the trail each get a single sweep.
    fn rewind(&mut self, threshold: Mark) {
        for clause in self.cnf.clauses_mut() {
            clause.pop_above(threshold);
        }
        self.trail.rewind(threshold);
    }

    /// Repeatedly finds a clause with exactly one residual literal and
    /// forces it true, until no unit clause remains or a conflict is found.
    /// Returns `false` on conflict.
    ///
    /// The worklist starts with every clause, but after that only clauses
    /// in the just-assigned variable's occurrence list are re-examined,
    /// which is the reason clauses carry occurrence lists in the first place.
    fn unit_propagate(&mut self, mark: Mark) -> bool {
        let num_clauses = self.cnf.num_clauses();
        let mut queued = vec![true; num_clauses];
        let mut queue: VecDeque<usize> = (0..num_clauses).collect();

        while let Some(idx) = queue.pop_front() {
            queued[idx] = false;

            let top = self.cnf.clause(idx).top();
            if top.satisfied || pset::len(&top.literals) != 1 {
                continue;
            }
            let lit = pset::singleton(&top.literals);
            let var = literal::var_of(lit);
            if self.trail.state(var) != State::Unassigned {
                continue;
            }

            debug!("unit_propagate: forcing var {} to {}", var, literal::is_positive(lit));
            if !self.try_set(var, literal::is_positive(lit), mark) {
                return false;
            }

            for &affected in self.cnf.occurrences_of(var) {
                if !queued[affected] {
                    queued[affected] = true;
                    queue.push_back(affected);
                }
            }
        }

        true
    }

    /// Forces every variable that occurs with only one polarity among the
    /// unsatisfied clauses. Traverses a single snapshot of the unassigned
    /// set so that assignments made during the pass don't change which
    /// variables get considered.
    fn eliminate_pure_literals(&mut self, mark: Mark) -> bool {
        for var in self.trail.z_snapshot() {
            if self.trail.state(var) != State::Unassigned {
                continue;
            }

            let mut seen_pos = false;
            let mut seen_neg = false;
            for &idx in self.cnf.occurrences_of(var) {
                let top = self.cnf.clause(idx).top();
                if top.satisfied {
                    continue;
                }
                if pset::contains(&top.literals, literal::pos(var)) {
                    seen_pos = true;
                }
                if pset::contains(&top.literals, literal::neg(var)) {
                    seen_neg = true;
                }
            }

            if seen_pos && !seen_neg {
                debug!("eliminate_pure_literals: var {} is pure positive", var);
                if !self.try_set(var, true, mark) {
                    return false;
                }
            } else if seen_neg && !seen_pos {
                debug!("eliminate_pure_literals: var {} is pure negative", var);
                if !self.try_set(var, false, mark) {
                    return false;
                }
            }
        }
        true
    }

    /// The recursive search: propagate, eliminate pure literals, and either
    /// stop (every clause already satisfied, or no variable left to try) or
    /// branch on the first free variable.
    fn sat(&mut self) -> bool {
        let mark = self.next_mark;
        self.next_mark += 1;

        if !self.unit_propagate(mark) || !self.eliminate_pure_literals(mark) {
            self.rewind(mark);
            return false;
        }

        if self.all_clauses_trivially_true() {
            trace!("sat: every clause satisfied at mark {}, remaining vars are don't-care", mark);
            return true;
        }

        let var = match self.trail.first_in_z() {
            Some(var) => var,
            None => {
                // Every variable decided, yet some clause is still
                // unsatisfied: no assignment on this branch can fix it.
                self.rewind(mark);
                return false;
            }
        };

        trace!("sat: branching on var {} at mark {}", var, mark);

        if self.try_set(var, true, mark) && self.sat() {
            return true;
        }
        self.rewind(mark);

        let mark = self.next_mark;
        self.next_mark += 1;

        if self.try_set(var, false, mark) && self.sat() {
            return true;
        }

        // Deliberately not rewound here: the caller that eventually issues
        // its own rewind at an equal-or-lower mark will sweep this frame's
        // marks away too, in the same single pass.
        false
    }
}
