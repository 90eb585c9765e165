//! The result of solving an instance (§4.9, §6.3): either an assignment, or
//! a bare UNSAT verdict. Unsatisfiability is a legitimate outcome here, not
//! an error; it carries no payload and nothing went wrong to produce it.

use std::fmt;

use crate::literal::VarId;
use crate::trail::Trail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Satisfiable(Assignment),
    Unsatisfiable,
}

/// A variable's final status: decided true, decided false, or never
/// decided because no clause depended on its value ("don't care").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub num_vars: usize,
    pub true_vars: Vec<VarId>,
    pub false_vars: Vec<VarId>,
    pub dont_care_vars: Vec<VarId>,
}

impl Assignment {
    pub fn from_trail(trail: &Trail) -> Assignment {
        let mut true_vars = trail.true_vars().to_vec();
        let mut false_vars = trail.false_vars().to_vec();
        let mut dont_care_vars = trail.unassigned_vars().to_vec();
        true_vars.sort_unstable();
        false_vars.sort_unstable();
        dont_care_vars.sort_unstable();

        Assignment {
            num_vars: true_vars.len() + false_vars.len() + dont_care_vars.len(),
            true_vars,
            false_vars,
            dont_care_vars,
        }
    }
}

impl fmt::Display for Solution {
    /// §6.3's exact output shape: `satisfied!` followed by `true:`,
    /// `false:`, and `don't care:` lines listing variable ids, or the bare
    /// word `unsatisfied`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unsatisfiable => write!(f, "unsatisfied"),
            Solution::Satisfiable(assignment) => {
                writeln!(f, "satisfied!")?;
                write_var_line(f, "true:", &assignment.true_vars)?;
                write_var_line(f, "false:", &assignment.false_vars)?;
                write_var_line(f, "don't care:", &assignment.dont_care_vars)
            }
        }
    }
}

/// Writes a labeled block only "where applicable" (§6.3): an empty
/// category contributes no block at all, not an empty one.
fn write_var_line(f: &mut fmt::Formatter<'_>, label: &str, vars: &[VarId]) -> fmt::Result {
    if vars.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}", label)?;
    for var in vars {
        writeln!(f, "    {}", var)?;
    }
    Ok(())
}
