//! Criterion benchmarks for the calendar CSP solver.
//!
//! Uses seeded random instances and a strict precedence chain to measure
//! preprocessing and search cost independent of any caller.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_calendar::csp::{
    generate, CspProblem, CspSolver, GeneratorConfig, Operator, Propagation, SolverConfig,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

// ===========================================================================
// Chain: m0 < m1 < ... < m(n-1) over exactly n days (unique solution)
// ===========================================================================

fn chain(n: usize) -> CspProblem {
    let end = start() + chrono::Days::new(n as u64 - 1);
    let mut problem = CspProblem::new(n, start(), end);
    for i in 1..n {
        problem.add_binary(i - 1, Operator::Lt, i);
    }
    problem
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    group.sample_size(10);

    for &n in &[5usize, 10, 20] {
        let problem = chain(n);
        for propagation in [Propagation::SinglePass, Propagation::Fixpoint] {
            let solver = CspSolver::new(SolverConfig::default().with_propagation(propagation));
            group.bench_with_input(
                BenchmarkId::new(format!("{propagation:?}"), n),
                &(problem.clone(), solver),
                |b, (p, s)| {
                    b.iter(|| {
                        let result = s.solve(black_box(p));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.sample_size(10);

    for (meetings, days, unary, binary) in [(5usize, 14u64, 4usize, 8usize), (8, 21, 6, 14), (12, 30, 8, 20)] {
        let problem = generate(
            &GeneratorConfig::new(start())
                .with_meetings(meetings)
                .with_horizon_days(days)
                .with_constraints(unary, binary)
                .with_seed(42),
        );
        let solver = CspSolver::new(SolverConfig::default().with_node_limit(1_000_000));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("m{meetings}_d{days}")),
            &(problem, solver),
            |b, (p, s)| {
                b.iter(|| {
                    let result = s.solve(black_box(p));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_random);
criterion_main!(benches);
