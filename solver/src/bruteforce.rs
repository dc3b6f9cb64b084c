use crate::cnf::CNF;
use crate::sat_solution::{SATSolution, Valuation};
use crate::sat_solver::{Solver, SolverError};

/// A solver that naively checks all possible valuations.
///
/// Exponential in the variable count; it exists as an oracle for testing
/// the real solver on small formulas.
pub struct Bruteforce;

impl Solver for Bruteforce {
    fn solve(&self, formula: &CNF) -> Result<SATSolution, SolverError> {
        let mut valuation = vec![false; formula.num_variables];
        if guess(formula, 0, &mut valuation) {
            Ok(SATSolution::Satisfiable(valuation))
        } else {
            Ok(SATSolution::Unsatisfiable)
        }
    }
}

fn guess(formula: &CNF, var: usize, valuation: &mut Valuation) -> bool {
    if var == valuation.len() {
        return satisfies(formula, valuation);
    }
    if guess(formula, var + 1, valuation) {
        return true;
    }
    valuation[var] = true;
    let found = guess(formula, var + 1, valuation);
    if !found {
        valuation[var] = false;
    }
    found
}

fn satisfies(formula: &CNF, valuation: &[bool]) -> bool {
    formula.clauses.iter().all(|clause| {
        clause
            .vars
            .iter()
            .any(|lit| valuation[lit.index()] == lit.sign)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::{CNFClause, CNFVar};

    #[test]
    fn finds_a_witness_for_a_satisfiable_formula() {
        let formula: CNF = vec![
            CNFClause::single(CNFVar::pos(1)),
            vec![CNFVar::neg(1), CNFVar::pos(2)].into_iter().collect(),
        ]
        .into_iter()
        .collect();

        match Bruteforce.solve(&formula).unwrap() {
            SATSolution::Satisfiable(valuation) => assert_eq!(valuation, vec![true, true]),
            SATSolution::Unsatisfiable => panic!("expected SAT"),
        }
    }

    #[test]
    fn exhausts_an_unsatisfiable_formula() {
        let formula: CNF = vec![
            CNFClause::single(CNFVar::pos(1)),
            CNFClause::single(CNFVar::neg(1)),
        ]
        .into_iter()
        .collect();

        assert!(Bruteforce.solve(&formula).unwrap().is_unsat());
    }

    #[test]
    fn empty_formula_is_trivially_satisfiable() {
        assert!(Bruteforce.solve(&CNF::empty()).unwrap().is_sat());
    }

    #[test]
    fn empty_clause_is_never_satisfiable() {
        let formula = CNF::single(CNFClause::new());
        assert!(Bruteforce.solve(&formula).unwrap().is_unsat());
    }
}
