use proptest::bool::weighted;
use proptest::collection::vec;
use proptest::prelude::*;

use solver::cnf::Cnf;
use solver::dimacs::{self, RawCnf};
use solver::dpll::Solver;
use solver::literal::{self, Literal};
use solver::trail::State;

const MAX_NUM_VARIABLES: usize = 12;
const MAX_NUM_LITERALS: usize = 5;
const MAX_NUM_CLAUSES: usize = 8;

fn solve_with_cadical(num_vars: usize, clauses: &[Vec<Literal>]) -> Option<bool> {
    let mut solver: cadical::Solver = Default::default();
    for clause in clauses {
        solver.add_clause(clause.iter().map(|&lit| lit as i32));
    }
    let _ = num_vars;
    solver.solve()
}

fn solve_with_ours(num_vars: usize, clauses: &[Vec<Literal>]) -> bool {
    let raw = RawCnf {
        num_vars,
        clauses: clauses.to_vec(),
    };
    let cnf = Cnf::from_raw(&raw);
    let mut solver = Solver::new(cnf);
    solver.solve()
}

fn clause_is_satisfied(clause: &[Literal], model: impl Fn(usize) -> bool) -> bool {
    clause.iter().any(|&lit| model(literal::var_of(lit)) == literal::is_positive(lit))
}

fn arbitrary_cnf() -> impl Strategy<Value = (usize, Vec<Vec<Literal>>)> {
    vec(
        vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS),
        1..=MAX_NUM_CLAUSES,
    )
    .prop_map(|clauses| {
        let num_vars = clauses
            .iter()
            .flat_map(|clause| clause.iter().map(|(var, _)| *var))
            .max()
            .unwrap_or(1);

        let clauses: Vec<Vec<Literal>> = clauses
            .into_iter()
            .map(|clause| {
                let mut seen = std::collections::HashSet::new();
                clause
                    .into_iter()
                    .filter_map(|(var, sign)| {
                        let lit = literal::of(var, sign);
                        if seen.insert(lit) {
                            Some(lit)
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .filter(|clause: &Vec<Literal>| !clause.is_empty())
            .collect();

        (num_vars, clauses)
    })
}

proptest! {
    #[test]
    fn only_positive_unit_clauses(num_vars in 1..=MAX_NUM_VARIABLES) {
        let clauses: Vec<Vec<Literal>> = (1..=num_vars).map(|v| vec![v as Literal]).collect();
        let ours = solve_with_ours(num_vars, &clauses);
        let reference = solve_with_cadical(num_vars, &clauses).unwrap_or(false);
        prop_assert_eq!(ours, reference);
    }

    #[test]
    fn only_negative_unit_clauses(num_vars in 1..=MAX_NUM_VARIABLES) {
        let clauses: Vec<Vec<Literal>> = (1..=num_vars).map(|v| vec![-(v as Literal)]).collect();
        let ours = solve_with_ours(num_vars, &clauses);
        let reference = solve_with_cadical(num_vars, &clauses).unwrap_or(false);
        prop_assert_eq!(ours, reference);
    }

    #[test]
    fn only_unit_clauses(signs in vec(weighted(0.5), 1..=MAX_NUM_VARIABLES)) {
        let num_vars = signs.len();
        let clauses: Vec<Vec<Literal>> = signs
            .iter()
            .enumerate()
            .map(|(i, &sign)| vec![literal::of(i + 1, sign)])
            .collect();
        let ours = solve_with_ours(num_vars, &clauses);
        let reference = solve_with_cadical(num_vars, &clauses).unwrap_or(false);
        prop_assert_eq!(ours, reference);
    }

    #[test]
    fn agrees_with_cadical_on_satisfiability((num_vars, clauses) in arbitrary_cnf()) {
        let ours = solve_with_ours(num_vars, &clauses);
        if let Some(reference) = solve_with_cadical(num_vars, &clauses) {
            prop_assert_eq!(ours, reference);
        }
    }

    #[test]
    fn a_satisfiable_result_carries_a_valid_model((num_vars, clauses) in arbitrary_cnf()) {
        let raw = RawCnf { num_vars, clauses: clauses.clone() };
        let cnf = Cnf::from_raw(&raw);
        let mut solver = Solver::new(cnf);

        if solver.solve() {
            let trail = solver.trail();
            let model = |v: usize| trail.state(v) != State::False;
            for clause in &clauses {
                prop_assert!(clause_is_satisfied(clause, model));
            }
        }
    }
}

#[test]
fn regression_from_a_dimacs_fixture() {
    let raw = dimacs::parse(&b"p cnf 4 3\n1 2 0\n-1 3 0\n-2 -3 4 0\n"[..]).unwrap();
    let cnf = Cnf::from_raw(&raw);
    let mut solver = Solver::new(cnf);
    assert!(solver.solve());
}
