use std::fs;
use std::process;

use clap::{App, Arg};
use log::debug;

use dpll_solver::{dimacs, DpllSolver, Solver};

fn main() {
    env_logger::init();

    let matches = App::new("dpll-solver")
        .about("Decides satisfiability of a formula in DIMACS CNF format")
        .arg(
            Arg::with_name("input")
                .help("Path to the DIMACS CNF file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.value_of("input").unwrap();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("cannot read '{}': {}", path, err);
            process::exit(1);
        }
    };

    let formula = match dimacs::parse(&content) {
        Ok(formula) => formula,
        Err(err) => {
            eprintln!("bad CNF syntax in '{}': {}", path, err);
            process::exit(1);
        }
    };

    debug!(
        "parsed {} variables and {} clauses from '{}'",
        formula.num_variables,
        formula.len(),
        path
    );
    debug!("formula:\n{}", formula);

    match DpllSolver::new().solve(&formula) {
        Ok(solution) => print!("{}", solution),
        Err(err) => {
            eprintln!("solver failed: {}", err);
            process::exit(1);
        }
    }
}
