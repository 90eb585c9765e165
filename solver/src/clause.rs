//! The per-clause versioned state stack (§4.2).
//!
//! Each clause slot owns a small stack of versions. The top of the stack is
//! what the search currently sees; pushing layers a new version atop the
//! previous one, and `pop_above` restores history by discarding every
//! version whose mark is at or above a threshold. Realised here as a plain
//! growable `Vec`, which keeps "peek the top" and "pop everything above a
//! mark" both cheap in the number of frames actually touched.

use crate::pset::{self, Pset};

pub type Mark = u32;

/// One version of a clause's state: its residual literal set as of this
/// mark, and whether the clause became satisfied at or before this mark.
pub struct Version {
    pub literals: Pset,
    pub mark: Mark,
    pub satisfied: bool,
}

pub struct ClauseStack {
    versions: Vec<Version>,
}

impl ClauseStack {
    /// The initial (mark 0) version holds the clause's original literals.
    pub fn new(initial_literals: Pset) -> ClauseStack {
        ClauseStack {
            versions: vec![Version {
                literals: initial_literals,
                mark: 0,
                satisfied: false,
            }],
        }
    }

    pub fn top(&self) -> &Version {
        self.versions
            .last()
            .expect("clause stack: initial version missing")
    }

    /// Pushes a version that marks the clause satisfied, sharing the top's
    /// literal set (the satisfied set is never further shrunk).
    ///
    /// Precondition: the current top is unsatisfied.
    pub fn push_satisfy(&mut self, mark: Mark) {
        debug_assert!(!self.top().satisfied, "push_satisfy on a satisfied clause");
        let literals = pset::refup(&self.top().literals);
        self.versions.push(Version {
            literals,
            mark,
            satisfied: true,
        });
    }

    /// Pushes a shrunk, still-unsatisfied version. Returns `false` if the
    /// new literal set is empty (the clause is unsatisfiable on this
    /// branch and the caller must treat this as a conflict).
    pub fn push_shrink(&mut self, new_literals: Pset, mark: Mark) -> bool {
        let conflict = new_literals.is_none();
        self.versions.push(Version {
            literals: new_literals,
            mark,
            satisfied: false,
        });
        !conflict
    }

    /// Pops every version with `mark >= threshold`, releasing each popped
    /// version's literal set. The initial (mark 0) version is never popped.
    pub fn pop_above(&mut self, threshold: Mark) {
        while self.versions.len() > 1 && self.versions.last().unwrap().mark >= threshold {
            let popped = self.versions.pop().unwrap();
            pset::refdown(popped.literals);
        }
    }
}
