//! The DIMACS CNF front end (§4.8, §6.1).
//!
//! spec.md treats this as an external collaborator with a minimal
//! interface; it is implemented here as a real module because something has
//! to actually do the parsing. Grounded in `varisat-dimacs`'s parser for the
//! shape of the diagnostics, scaled down: this solver has no incremental
//! solving API, so there is no reason to parse incrementally. The whole
//! input is read and parsed in one pass.

use std::io::{self, Read};

use rustc_hash::FxHashSet;

use crate::error::ParseError;
use crate::literal::{Literal, VarId};

/// The raw result of parsing: a variable count and a list of clauses, each a
/// list of distinct, in-range, signed literals.
pub struct RawCnf {
    pub num_vars: usize,
    pub clauses: Vec<Vec<Literal>>,
}

/// Reads and parses a complete DIMACS CNF document from `input`.
pub fn parse(mut input: impl Read) -> Result<RawCnf, ParseError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|err| ParseError::InvalidToken {
            line: 0,
            text: format!("i/o error reading input: {}", err),
        })?;
    parse_str(&text)
}

fn parse_str(text: &str) -> Result<RawCnf, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut tokens: Vec<(i64, usize)> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }

        if trimmed.starts_with('p') {
            if header.is_some() {
                return Err(ParseError::InvalidHeader {
                    line,
                    text: trimmed.to_string(),
                });
            }
            header = Some(parse_header_line(trimmed, line)?);
            continue;
        }

        for tok in trimmed.split_whitespace() {
            let value: i64 = tok.parse().map_err(|_| ParseError::InvalidToken {
                line,
                text: tok.to_string(),
            })?;
            tokens.push((value, line));
        }
    }

    let (num_vars, num_clauses) = header.ok_or(ParseError::MissingHeader { line: 1 })?;

    let mut clauses: Vec<Vec<Literal>> = Vec::new();
    let mut current: Vec<Literal> = Vec::new();
    let mut current_vars: FxHashSet<VarId> = FxHashSet::default();
    let mut last_line = 0;

    for (value, line) in tokens {
        last_line = line;
        if value == 0 {
            clauses.push(std::mem::take(&mut current));
            current_vars.clear();
            continue;
        }

        let var = value.unsigned_abs() as VarId;
        if var == 0 || var > num_vars {
            return Err(ParseError::VariableOutOfRange {
                line,
                literal: value,
                var: var as i64,
                num_vars,
            });
        }

        if !current_vars.insert(var) {
            return Err(ParseError::DuplicateLiteral {
                line,
                literal: value,
            });
        }
        current.push(value);
    }

    if !current.is_empty() {
        return Err(ParseError::UnterminatedClause { line: last_line });
    }

    if clauses.len() != num_clauses {
        return Err(ParseError::ClauseCountMismatch {
            expected: num_clauses,
            found: clauses.len(),
        });
    }

    Ok(RawCnf { num_vars, clauses })
}

fn parse_header_line(line_text: &str, line: usize) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeader {
        line,
        text: line_text.to_string(),
    };

    let mut fields = line_text.split_whitespace();

    if fields.next() != Some("p") || fields.next() != Some("cnf") {
        return Err(invalid());
    }

    let num_vars: usize = fields.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let num_clauses: usize = fields.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

    if fields.next().is_some() {
        return Err(invalid());
    }

    Ok((num_vars, num_clauses))
}

/// Writes `clauses` (over `num_vars` variables) as a DIMACS CNF document,
/// the inverse of [`parse`]. Mainly useful for tests and diagnostics.
pub fn write(target: &mut impl io::Write, num_vars: usize, clauses: &[Vec<Literal>]) -> io::Result<()> {
    writeln!(target, "p cnf {} {}", num_vars, clauses.len())?;
    for clause in clauses {
        for lit in clause {
            write!(target, "{} ", lit)?;
        }
        writeln!(target, "0")?;
    }
    Ok(())
}
