use crate::cnf::CNF;
use crate::sat_solution::SATSolution;
use thiserror::Error;

/// Internal failures a solver can surface to its caller.
///
/// Decisions (SAT / UNSAT) are not errors; they are carried by
/// [`SATSolution`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// An allocation inside the search failed. All owned state has been
    /// released by the time this reaches the caller.
    #[error("insufficient memory")]
    OutOfMemory,
}

/// The trait which has to be implemented by each solver
pub trait Solver {
    fn solve(&self, formula: &CNF) -> Result<SATSolution, SolverError>;
}
