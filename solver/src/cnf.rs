use itertools::Itertools;
use std::fmt;
use std::iter::FromIterator;

/// Type used for referencing logical variables
pub type VarId = usize;

/// Representation of logical formulae in CNF form
/// (conjunction of clauses).
///
/// Clauses keep the order in which they were inserted; the solver
/// iterates them exactly in stored order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses: Vec<CNFClause>,
    /// Number of variables the formula ranges over. Every literal id
    /// lies in `1..=num_variables`.
    pub num_variables: usize,
}

/// Representation of a clause (disjunction of literals)
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub struct CNFClause {
    /// Vector of inner literals
    pub vars: Vec<CNFVar>,
}

/// Logical literal
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct CNFVar {
    /// Identifier of a variable; 1-based, as in DIMACS
    pub id: VarId,
    /// Literal is negated iff `sign == false`
    pub sign: bool,
}

impl CNF {
    /// Creates an empty CNF formula
    #[inline]
    pub fn empty() -> CNF {
        CNF {
            clauses: Vec::new(),
            num_variables: 0,
        }
    }

    /// Creates a singleton CNF formula out of a single clause
    #[inline]
    pub fn single(clause: CNFClause) -> CNF {
        CNF {
            num_variables: clause.max_variable_id(),
            clauses: vec![clause],
        }
    }

    /// Adds a new clause to the formula
    #[inline]
    pub fn push(&mut self, c: CNFClause) {
        self.num_variables = self.num_variables.max(c.max_variable_id());
        self.clauses.push(c);
    }

    /// Returns number of clauses in the formula
    #[inline]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Prints formula in DIMACS compatible form
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.num_variables, self.clauses.len());

        for clause in &self.clauses {
            for var in &clause.vars {
                out.push_str(&var.to_i32().to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }
}

impl FromIterator<CNFClause> for CNF {
    fn from_iter<I: IntoIterator<Item = CNFClause>>(iter: I) -> Self {
        let clauses = iter.into_iter().collect::<Vec<CNFClause>>();

        let num_variables = clauses
            .iter()
            .map(|clause| clause.max_variable_id())
            .max()
            .unwrap_or(0);

        CNF {
            clauses,
            num_variables,
        }
    }
}

impl CNFClause {
    /// Creates an empty CNF clause
    #[inline]
    pub fn new() -> CNFClause {
        CNFClause { vars: Vec::new() }
    }

    /// Creates a CNF clause containing a single literal
    #[inline]
    pub fn single(var: CNFVar) -> CNFClause {
        CNFClause { vars: vec![var] }
    }

    /// Adds a single literal to the clause. Duplicates are kept as-is;
    /// the solver tolerates them.
    #[inline]
    pub fn push(&mut self, v: CNFVar) {
        self.vars.push(v);
    }

    /// Returns the greatest variable identifier used in the clause
    #[inline]
    pub fn max_variable_id(&self) -> usize {
        self.vars.iter().map(|lit| lit.id).max().unwrap_or(0)
    }

    /// Calculates number of literals in clause
    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for CNFClause {
    fn default() -> Self {
        CNFClause::new()
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item = CNFVar>>(iter: I) -> Self {
        CNFClause {
            vars: iter.into_iter().collect(),
        }
    }
}

impl CNFVar {
    /// Creates literal with given identifier and positivity
    #[inline]
    pub fn new(id: VarId, sign: bool) -> CNFVar {
        CNFVar { id, sign }
    }

    /// Creates a positive literal with given identifier
    #[inline]
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar { id, sign: true }
    }

    /// Creates a negative literal with given identifier
    #[inline]
    pub fn neg(id: VarId) -> CNFVar {
        CNFVar { id, sign: false }
    }

    /// 0-based index of the underlying variable
    #[inline]
    pub fn index(&self) -> usize {
        self.id - 1
    }

    /// Converts to signed integer. The absolute value indicates
    /// the identifier and sign states for positivity.
    pub fn to_i32(&self) -> i32 {
        if self.sign {
            self.id as i32
        } else {
            -(self.id as i32)
        }
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vars.iter().map(|v| v.to_string()).join(" "))
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}
