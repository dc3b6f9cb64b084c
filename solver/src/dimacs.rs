//! Strict line-oriented reader for the DIMACS CNF format.
//!
//! Empty lines and lines starting with `c` are skipped. A single
//! `p cnf <vars> <clauses>` header must precede the first clause; every
//! clause line is a whitespace-separated run of non-zero literals in
//! `[-vars; vars]` terminated by `0`. Anything else is a [`ParseError`].

use crate::cnf::{CNF, CNFClause, CNFVar};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no 'p cnf' header line found")]
    MissingHeader,
    #[error("header is declared twice (line {line})")]
    DuplicateHeader { line: usize },
    #[error("expected 'p cnf <vars> <clauses>' (line {line})")]
    MalformedHeader { line: usize },
    #[error("clause appears before the 'p cnf' header (line {line})")]
    ClauseBeforeHeader { line: usize },
    #[error("invalid literal '{token}' (line {line})")]
    InvalidLiteral { line: usize, token: String },
    #[error("expected literals in [-{max}; {max}], but got {literal} (line {line})")]
    LiteralOutOfRange { line: usize, literal: i64, max: usize },
    #[error("clause is not terminated with zero (line {line})")]
    UnterminatedClause { line: usize },
    #[error("literals appear after the terminating zero (line {line})")]
    TrailingLiterals { line: usize },
    #[error("expected {expected} clauses, but got more (line {line})")]
    TooManyClauses { line: usize, expected: usize },
    #[error("expected {expected} clauses, but got {found}")]
    MissingClauses { expected: usize, found: usize },
}

/// Parses DIMACS text into a [`CNF`] formula.
pub fn parse(input: &str) -> Result<CNF, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut clauses: Vec<CNFClause> = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line_no = number + 1;

        let first = match line.split_whitespace().next() {
            None => continue,
            Some(token) => token,
        };
        if first.starts_with('c') {
            continue;
        }

        if first == "p" {
            if header.is_some() {
                return Err(ParseError::DuplicateHeader { line: line_no });
            }
            header = Some(parse_header(line, line_no)?);
            continue;
        }

        match header {
            None => return Err(ParseError::ClauseBeforeHeader { line: line_no }),
            Some((vars, expected)) => {
                if clauses.len() == expected {
                    return Err(ParseError::TooManyClauses {
                        line: line_no,
                        expected,
                    });
                }
                clauses.push(parse_clause(line, vars, line_no)?);
            }
        }
    }

    match header {
        None => Err(ParseError::MissingHeader),
        Some((vars, expected)) => {
            if clauses.len() != expected {
                return Err(ParseError::MissingClauses {
                    expected,
                    found: clauses.len(),
                });
            }
            Ok(CNF {
                clauses,
                num_variables: vars,
            })
        }
    }
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, usize), ParseError> {
    let malformed = || ParseError::MalformedHeader { line: line_no };

    let mut tokens = line.split_whitespace().skip(1);
    if tokens.next() != Some("cnf") {
        return Err(malformed());
    }
    let vars = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let expected = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok((vars, expected))
}

fn parse_clause(line: &str, max_var: usize, line_no: usize) -> Result<CNFClause, ParseError> {
    let mut clause = CNFClause::new();
    let mut terminated = false;

    for token in line.split_whitespace() {
        if terminated {
            return Err(ParseError::TrailingLiterals { line: line_no });
        }
        let literal = token
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidLiteral {
                line: line_no,
                token: token.to_string(),
            })?;
        if literal == 0 {
            terminated = true;
            continue;
        }
        let var = literal.unsigned_abs() as usize;
        if var > max_var {
            return Err(ParseError::LiteralOutOfRange {
                line: line_no,
                literal,
                max: max_var,
            });
        }
        clause.push(CNFVar::new(var, literal > 0));
    }

    if !terminated {
        return Err(ParseError::UnterminatedClause { line: line_no });
    }
    Ok(clause)
}
