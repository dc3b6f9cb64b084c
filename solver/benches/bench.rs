use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use dpll_solver::{CNFClause, CNFVar, DpllSolver, Solver, CNF};

/// The pigeonhole principle for `holes + 1` pigeons and `holes` holes,
/// a classic unsatisfiable family that forces exhaustive backtracking.
fn pigeonhole(holes: usize) -> CNF {
    let pigeons = holes + 1;
    let var = |pigeon: usize, hole: usize| CNFVar::pos(pigeon * holes + hole + 1);

    let mut formula = CNF::empty();
    for pigeon in 0..pigeons {
        formula.push((0..holes).map(|hole| var(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in first + 1..pigeons {
                let mut clause = CNFClause::new();
                clause.push(CNFVar::neg(var(first, hole).id));
                clause.push(CNFVar::neg(var(second, hole).id));
                formula.push(clause);
            }
        }
    }
    formula
}

/// An implication chain `1`, `-1 2`, `-2 3`, …; satisfiable purely by
/// unit propagation, exercising the occurrence-driven worklist.
fn propagation_chain(length: usize) -> CNF {
    let mut formula = CNF::empty();
    formula.push(CNFClause::single(CNFVar::pos(1)));
    for variable in 1..length {
        let mut clause = CNFClause::new();
        clause.push(CNFVar::neg(variable));
        clause.push(CNFVar::pos(variable + 1));
        formula.push(clause);
    }
    formula
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dpll");

    for &holes in &[4, 5, 6] {
        let formula = pigeonhole(holes);
        group.bench_function(format!("pigeonhole-{}", holes), |b| {
            b.iter_batched(
                || formula.clone(),
                |formula| DpllSolver::new().solve(&formula),
                BatchSize::SmallInput,
            )
        });
    }

    for &length in &[100, 500] {
        let formula = propagation_chain(length);
        group.bench_function(format!("chain-{}", length), |b| {
            b.iter_batched(
                || formula.clone(),
                |formula| DpllSolver::new().solve(&formula),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish()
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}
criterion_main!(benches);
