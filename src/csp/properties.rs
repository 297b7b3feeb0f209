//! Property tests against exhaustive enumeration on small instances.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use super::consistency::enforce;
use super::{
    solve, test_solution, CspProblem, CspSolver, DateConstraint, Operator, Propagation,
    SolverConfig,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Every satisfying assignment, in lexicographic order over the range.
fn brute_force(problem: &CspProblem) -> Vec<Vec<NaiveDate>> {
    let dates = problem.initial_domains().first().map(|d| d.dates().to_vec());
    let dates = dates.unwrap_or_default();
    let mut solutions = Vec::new();
    let mut current = vec![None; problem.n_meetings];
    enumerate(problem, &dates, 0, &mut current, &mut solutions);
    solutions
}

fn enumerate(
    problem: &CspProblem,
    dates: &[NaiveDate],
    k: usize,
    current: &mut Vec<Option<NaiveDate>>,
    out: &mut Vec<Vec<NaiveDate>>,
) {
    if k == problem.n_meetings {
        if test_solution(current, &problem.constraints) {
            out.push(current.iter().flatten().copied().collect());
        }
        return;
    }
    for &d in dates {
        current[k] = Some(d);
        enumerate(problem, dates, k + 1, current, out);
    }
    current[k] = None;
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn constraint(n: usize, days: u64) -> impl Strategy<Value = DateConstraint> {
    prop_oneof![
        (0..n, operator(), 0..days).prop_map(|(m, op, offset)| {
            let date = start().checked_add_days(Days::new(offset)).unwrap();
            DateConstraint::unary(m, op, date)
        }),
        (0..n, operator(), 0..n).prop_map(|(l, op, r)| DateConstraint::binary(l, op, r)),
    ]
}

fn problem() -> impl Strategy<Value = CspProblem> {
    (1usize..=3, 1u64..=4).prop_flat_map(|(n, days)| {
        prop::collection::vec(constraint(n, days), 0..6).prop_map(move |constraints| {
            let end = start().checked_add_days(Days::new(days - 1)).unwrap();
            CspProblem::new(n, start(), end).with_constraints(constraints)
        })
    })
}

proptest! {
    #[test]
    fn prop_solution_is_sound(p in problem()) {
        if let Some(dates) = solve(p.n_meetings, p.range_start, p.range_end, &p.constraints).unwrap() {
            prop_assert_eq!(dates.len(), p.n_meetings);
            let partial: Vec<_> = dates.iter().copied().map(Some).collect();
            prop_assert!(test_solution(&partial, &p.constraints));
            prop_assert!(dates.iter().all(|&d| p.range_start <= d && d <= p.range_end));
        }
    }

    #[test]
    fn prop_matches_first_brute_force_solution(p in problem()) {
        let expected = brute_force(&p).into_iter().next();
        for propagation in [Propagation::SinglePass, Propagation::Fixpoint] {
            let solver = CspSolver::new(SolverConfig::default().with_propagation(propagation));
            let solution = solver.solve(&p).unwrap();
            prop_assert_eq!(&solution.assignment, &expected, "{:?}", propagation);
        }
    }

    #[test]
    fn prop_pruning_keeps_every_solution(p in problem()) {
        let solutions = brute_force(&p);
        for propagation in [Propagation::SinglePass, Propagation::Fixpoint] {
            let mut domains = p.initial_domains();
            let outcome = enforce(&p, &mut domains, propagation);
            if !outcome.is_consistent() {
                prop_assert!(solutions.is_empty());
            }
            for solution in &solutions {
                for (domain, &d) in domains.iter().zip(solution) {
                    prop_assert!(domain.contains(d), "{} pruned by {:?}", d, propagation);
                }
            }
        }
    }

    #[test]
    fn prop_repeated_solves_agree(p in problem()) {
        let first = solve(p.n_meetings, p.range_start, p.range_end, &p.constraints).unwrap();
        let second = solve(p.n_meetings, p.range_start, p.range_end, &p.constraints).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unassigned_slots_never_falsify(p in problem(), mask in prop::collection::vec(any::<bool>(), 3)) {
        for solution in brute_force(&p).iter().take(5) {
            let partial: Vec<_> = solution
                .iter()
                .zip(&mask)
                .map(|(&d, &keep)| keep.then_some(d))
                .collect();
            prop_assert!(test_solution(&partial, &p.constraints));
        }
        prop_assert!(test_solution(&vec![None; p.n_meetings], &p.constraints));
    }
}
