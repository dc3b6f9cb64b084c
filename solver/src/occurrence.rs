use crate::cnf::CNF;
use crate::sat_solver::SolverError;

/// For every variable, the clauses it occurs in, split by polarity.
///
/// Built once per `solve` call and read-only afterwards. Clause indices
/// refer into `CNF::clauses`; a literal occurring twice in a clause lists
/// that clause twice.
pub struct OccurrenceIndex {
    pos_occ: Vec<Vec<usize>>,
    neg_occ: Vec<Vec<usize>>,
}

impl OccurrenceIndex {
    /// Indexes the formula in one pass over its stored clause order.
    pub fn build(formula: &CNF) -> Result<OccurrenceIndex, SolverError> {
        let mut pos_occ = occurrence_buckets(formula.num_variables)?;
        let mut neg_occ = occurrence_buckets(formula.num_variables)?;

        for (index, clause) in formula.clauses.iter().enumerate() {
            for lit in &clause.vars {
                let bucket = if lit.sign {
                    &mut pos_occ[lit.index()]
                } else {
                    &mut neg_occ[lit.index()]
                };
                bucket.try_reserve(1).map_err(|_| SolverError::OutOfMemory)?;
                bucket.push(index);
            }
        }

        Ok(OccurrenceIndex { pos_occ, neg_occ })
    }

    /// Clauses containing the positive literal of `var`.
    #[inline]
    pub fn positive(&self, var: usize) -> &[usize] {
        &self.pos_occ[var]
    }

    /// Clauses containing the negative literal of `var`.
    #[inline]
    pub fn negative(&self, var: usize) -> &[usize] {
        &self.neg_occ[var]
    }

    /// Clauses in which a literal over `var` just became falsified by
    /// deciding the variable with the given polarity. Only these can have
    /// turned into unit clauses.
    #[inline]
    pub fn newly_falsified(&self, var: usize, positive: bool) -> &[usize] {
        if positive {
            self.negative(var)
        } else {
            self.positive(var)
        }
    }
}

fn occurrence_buckets(len: usize) -> Result<Vec<Vec<usize>>, SolverError> {
    let mut buckets = Vec::new();
    buckets
        .try_reserve_exact(len)
        .map_err(|_| SolverError::OutOfMemory)?;
    buckets.resize_with(len, Vec::new);
    Ok(buckets)
}
