use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn solve_file(content: &str) -> assert_cmd::assert::Assert {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();

    Command::cargo_bin("dpll-solver-cli")
        .unwrap()
        .arg(file.path())
        .assert()
}

#[test]
fn trivial_sat() {
    solve_file("p cnf 1 1\n1 0\n").success().stdout("SAT");
}

#[test]
fn contradicting_units_are_unsat() {
    solve_file("p cnf 1 2\n1 0\n-1 0\n").success().stdout("UNSAT");
}

#[test]
fn unit_propagation_chain_is_sat() {
    solve_file("p cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n")
        .success()
        .stdout("SAT");
}

#[test]
fn pigeonhole_two_into_one_is_unsat() {
    solve_file("p cnf 2 4\n1 2 0\n-1 -2 0\n-1 2 0\n1 -2 0\n")
        .success()
        .stdout("UNSAT");
}

#[test]
fn empty_clause_is_unsat() {
    solve_file("p cnf 2 1\n0\n").success().stdout("UNSAT");
}

#[test]
fn tautological_clause_is_sat() {
    solve_file("p cnf 1 1\n1 -1 0\n").success().stdout("SAT");
}

#[test]
fn empty_formula_is_sat() {
    solve_file("p cnf 4 0\n").success().stdout("SAT");
}

#[test]
fn comments_and_tabs_are_tolerated() {
    solve_file("c header comment\np cnf 2 2\n1\t2 0\nc between clauses\n-1 0\n")
        .success()
        .stdout("SAT");
}

#[test]
fn missing_argument_fails() {
    Command::cargo_bin("dpll-solver-cli")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn surplus_argument_fails() {
    Command::cargo_bin("dpll-solver-cli")
        .unwrap()
        .args(&["one.cnf", "two.cnf"])
        .assert()
        .failure();
}

#[test]
fn unreadable_file_fails() {
    Command::cargo_bin("dpll-solver-cli")
        .unwrap()
        .arg("no/such/file.cnf")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn malformed_header_fails() {
    solve_file("p cnf one two\n")
        .failure()
        .stderr(predicate::str::contains("bad CNF syntax"));
}

#[test]
fn out_of_range_literal_fails() {
    solve_file("p cnf 2 1\n1 -3 0\n")
        .failure()
        .stderr(predicate::str::contains("expected literals in [-2; 2]"));
}

#[test]
fn wrong_clause_count_fails() {
    solve_file("p cnf 1 2\n1 0\n")
        .failure()
        .stderr(predicate::str::contains("expected 2 clauses"));
}
