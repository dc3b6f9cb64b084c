use std::fmt;

/// A total truth assignment, indexed by 0-based variable.
pub type Valuation = Vec<bool>;

/// Outcome of a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SATSolution {
    /// The formula is satisfiable; the valuation witnesses it, with
    /// don't-care variables completed to `false`.
    Satisfiable(Valuation),
    Unsatisfiable,
}

impl SATSolution {
    pub fn is_sat(&self) -> bool {
        matches!(self, SATSolution::Satisfiable(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SATSolution::Unsatisfiable)
    }

    /// The witnessing valuation, if satisfiable.
    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            SATSolution::Satisfiable(valuation) => Some(valuation),
            SATSolution::Unsatisfiable => None,
        }
    }
}

impl fmt::Display for SATSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SATSolution::Satisfiable(_) => write!(f, "SAT"),
            SATSolution::Unsatisfiable => write!(f, "UNSAT"),
        }
    }
}
