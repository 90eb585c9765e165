use std::fs;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::info;

use solver::cnf::Cnf;
use solver::dpll::Solver;
use solver::solution::{Assignment, Solution};

/// Recursion depth is bounded by the number of variables (§5); the default
/// thread stack isn't guaranteed to hold a deep chain of decision frames,
/// so the search runs on a thread with a stack sized for that.
const SEARCH_STACK_SIZE: usize = 512 * 1024 * 1024;

/// SIGINT terminates the process outright (§6.2): the library has no
/// cancellation points to check during a search, so there is nothing to
/// cooperatively signal.
fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        eprintln!("solver: interrupted");
        process::exit(130);
    }) {
        eprintln!("solver: failed to install SIGINT handler: {}", err);
        process::exit(1);
    }
}

fn main() {
    env_logger::init();
    install_sigint_handler();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("solver: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32> {
    let matches = App::new("solver")
        .about("A DPLL based SAT solver for DIMACS CNF input")
        .arg(Arg::with_name("INPUT").help("CNF file to read (stdin if omitted)").index(1))
        .get_matches();

    let mut text = String::new();
    match matches.value_of("INPUT") {
        Some(path) => {
            info!("reading '{}'", path);
            text = fs::read_to_string(path).with_context(|| format!("could not read '{}'", path))?;
        }
        None => {
            info!("reading from stdin");
            io::stdin()
                .read_to_string(&mut text)
                .context("could not read stdin")?;
        }
    }

    let raw = solver::dimacs::parse(text.as_bytes()).context("failed to parse DIMACS input")?;

    let handle = std::thread::Builder::new()
        .stack_size(SEARCH_STACK_SIZE)
        .spawn(move || {
            let cnf = Cnf::from_raw(&raw);
            let mut solver = Solver::new(cnf);
            let satisfiable = solver.solve();
            if satisfiable {
                Solution::Satisfiable(Assignment::from_trail(solver.trail()))
            } else {
                Solution::Unsatisfiable
            }
        })
        .context("failed to spawn the search thread")?;

    let solution = handle.join().map_err(|_| anyhow::anyhow!("the search thread panicked"))?;

    match solution {
        Solution::Satisfiable(assignment) => {
            print!("{}", Solution::Satisfiable(assignment));
            Ok(0)
        }
        Solution::Unsatisfiable => {
            print!("{}", Solution::Unsatisfiable);
            Ok(1)
        }
    }
}
