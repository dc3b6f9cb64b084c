use crate::assignment::Assignment;
use crate::cnf::{CNF, CNFClause, CNFVar};
use crate::occurrence::OccurrenceIndex;
use crate::sat_solution::SATSolution;
use crate::sat_solver::{Solver, SolverError};
use log::{debug, trace};
use std::mem;

/// DPLL solver over an explicit stack of owned partial assignments.
///
/// Instead of recursing, the search keeps a LIFO of assignment snapshots:
/// popping a node, testing it for satisfaction or contradiction, and
/// otherwise splitting on the lowest-index undecided variable. Each split
/// re-runs unit propagation incrementally, scanning only the clauses whose
/// unit status the new decision can have changed.
///
/// # Example
/// ```
/// use dpll_solver::{DpllSolver, Solver, dimacs};
///
/// let formula = dimacs::parse("p cnf 2 2\n1 2 0\n-1 0\n").unwrap();
/// let solution = DpllSolver::new().solve(&formula).unwrap();
/// assert!(solution.is_sat());
/// ```
pub struct DpllSolver;

impl DpllSolver {
    pub fn new() -> DpllSolver {
        DpllSolver
    }
}

impl Default for DpllSolver {
    fn default() -> Self {
        DpllSolver::new()
    }
}

impl Solver for DpllSolver {
    fn solve(&self, formula: &CNF) -> Result<SATSolution, SolverError> {
        debug!(
            "solving formula with {} variables and {} clauses",
            formula.num_variables,
            formula.len()
        );
        let solution = SearchState::new(formula)?.run()?;
        debug!("formula is {}", solution);
        Ok(solution)
    }
}

fn literal_satisfied(lit: CNFVar, assignment: &Assignment) -> bool {
    if lit.sign {
        assignment.is_true(lit.index())
    } else {
        assignment.is_false(lit.index())
    }
}

fn literal_falsified(lit: CNFVar, assignment: &Assignment) -> bool {
    if lit.sign {
        assignment.is_false(lit.index())
    } else {
        assignment.is_true(lit.index())
    }
}

/// Some literal of the clause is satisfied.
fn clause_satisfied(clause: &CNFClause, assignment: &Assignment) -> bool {
    clause
        .vars
        .iter()
        .any(|&lit| literal_satisfied(lit, assignment))
}

/// Every literal of the clause is falsified. Vacuously true for the
/// empty clause.
fn clause_falsified(clause: &CNFClause, assignment: &Assignment) -> bool {
    clause
        .vars
        .iter()
        .all(|&lit| literal_falsified(lit, assignment))
}

/// The single free literal of a clause with no satisfied literal, if any.
///
/// A clause in which the same variable occurs free twice is not unit,
/// whichever polarities the occurrences carry.
fn unit_literal(clause: &CNFClause, assignment: &Assignment) -> Option<CNFVar> {
    let mut unit = None;
    for &lit in &clause.vars {
        if literal_satisfied(lit, assignment) {
            return None;
        }
        if assignment.is_unset(lit.index()) {
            if unit.is_some() {
                return None;
            }
            unit = Some(lit);
        }
    }
    unit
}

fn formula_satisfied(formula: &CNF, assignment: &Assignment) -> bool {
    formula
        .clauses
        .iter()
        .all(|clause| clause_satisfied(clause, assignment))
}

fn has_contradiction(formula: &CNF, assignment: &Assignment) -> bool {
    formula
        .clauses
        .iter()
        .any(|clause| clause_falsified(clause, assignment))
}

/// Unit propagation over the whole clause list, iterated to fixpoint.
///
/// Used once on the root assignment; afterwards the incremental variant
/// keeps the no-unit-clause invariant as decisions are made.
fn propagate_all_units(formula: &CNF, assignment: &mut Assignment) {
    loop {
        let mut changed = false;
        for clause in &formula.clauses {
            if let Some(lit) = unit_literal(clause, assignment) {
                assignment.set(lit.index(), lit.sign);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

/// Unit propagation after deciding `var` with polarity `positive`.
///
/// Only clauses containing the literal that just became falsified can have
/// turned unit, so the worklist starts with the opposite-polarity
/// occurrences of `var` and grows by the occurrences of every variable the
/// propagation decides in turn. A clause may be scanned more than once;
/// each scan either finds nothing or decides a fresh variable, which bounds
/// the whole run by the variable count.
fn propagate_toggled(
    formula: &CNF,
    occurrences: &OccurrenceIndex,
    assignment: &mut Assignment,
    var: usize,
    positive: bool,
) -> Result<(), SolverError> {
    let width = formula.num_variables;
    let mut pending: Vec<&[usize]> = Vec::new();
    pending
        .try_reserve_exact(width)
        .map_err(|_| SolverError::OutOfMemory)?;
    pending.resize(width, &[]);
    pending[var] = occurrences.newly_falsified(var, positive);

    loop {
        let mut changed = false;
        for slot in 0..width {
            let batch = mem::take(&mut pending[slot]);
            for &clause_index in batch {
                if let Some(lit) = unit_literal(&formula.clauses[clause_index], assignment) {
                    let unit_var = lit.index();
                    assignment.set(unit_var, lit.sign);
                    pending[unit_var] = occurrences.newly_falsified(unit_var, lit.sign);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    Ok(())
}

/// Everything one `solve` call owns: the immutable formula and occurrence
/// index plus the stack of live assignment snapshots.
struct SearchState<'a> {
    formula: &'a CNF,
    occurrences: OccurrenceIndex,
    stack: Vec<Assignment>,
}

impl<'a> SearchState<'a> {
    fn new(formula: &'a CNF) -> Result<SearchState<'a>, SolverError> {
        let occurrences = OccurrenceIndex::build(formula)?;

        let mut root = Assignment::new(formula.num_variables)?;
        propagate_all_units(formula, &mut root);

        let mut stack = Vec::new();
        stack.try_reserve(1).map_err(|_| SolverError::OutOfMemory)?;
        stack.push(root);

        Ok(SearchState {
            formula,
            occurrences,
            stack,
        })
    }

    fn run(&mut self) -> Result<SATSolution, SolverError> {
        while let Some(assignment) = self.stack.pop() {
            if formula_satisfied(self.formula, &assignment) {
                return Ok(SATSolution::Satisfiable(assignment.to_valuation()));
            }
            if has_contradiction(self.formula, &assignment) {
                continue;
            }

            match assignment.first_unset() {
                // Total and contradiction-free, hence satisfying.
                None => return Ok(SATSolution::Satisfiable(assignment.to_valuation())),
                Some(var) => self.branch(&assignment, var)?,
            }
        }
        Ok(SATSolution::Unsatisfiable)
    }

    /// Pushes both children of `parent` split on `var`. The false branch
    /// goes first so that the true branch is explored first on the LIFO.
    fn branch(&mut self, parent: &Assignment, var: usize) -> Result<(), SolverError> {
        trace!("branching on variable {}", var + 1);

        let mut on_false = parent.try_clone()?;
        on_false.set(var, false);
        propagate_toggled(self.formula, &self.occurrences, &mut on_false, var, false)?;

        let mut on_true = parent.try_clone()?;
        on_true.set(var, true);
        propagate_toggled(self.formula, &self.occurrences, &mut on_true, var, true)?;

        self.stack
            .try_reserve(2)
            .map_err(|_| SolverError::OutOfMemory)?;
        self.stack.push(on_false);
        self.stack.push(on_true);
        Ok(())
    }
}
