//! Backtracking search and solver entry points.
//!
//! # Algorithm
//!
//! 1. Validate the problem (fail fast on bad meeting indices)
//! 2. Build one domain per meeting and run [`enforce`]
//! 3. Depth-first over meetings `0..n`: try each candidate date in
//!    ascending order, keep it if the partial assignment still passes
//!    [`test_solution`], descend to the next meeting, and undo on failure
//!
//! The descent keeps an explicit cursor per meeting instead of recursing,
//! so the number of meetings is not limited by the call stack.
//!
//! Candidates are tried in a fixed order, so the first solution found is
//! the lexicographically smallest one and repeated solves agree.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::SolverConfig;
use super::consistency::{enforce, Consistency};
use super::constraint::DateConstraint;
use super::domain::Domain;
use super::error::CspError;
use super::evaluator::test_solution;
use super::model::CspProblem;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// An assignment satisfying every constraint was found.
    Feasible,
    /// No assignment satisfies every constraint.
    Infeasible,
    /// The time limit expired before a verdict.
    Timeout,
    /// The node limit was exhausted before a verdict.
    NodeLimit,
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Dates removed by node and arc consistency.
    pub pruned: usize,
    /// Tentative assignments made during search.
    pub nodes: u64,
    /// Tentative assignments undone.
    pub backtracks: u64,
}

/// Result of [`CspSolver::solve`].
#[derive(Debug, Clone)]
pub struct CspSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// One date per meeting, index-aligned; `Some` only when feasible.
    pub assignment: Option<Vec<NaiveDate>>,
    /// Search statistics.
    pub stats: SearchStats,
    /// Solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl CspSolution {
    fn without_assignment(status: SolverStatus, stats: SearchStats, started: Instant) -> Self {
        Self {
            status,
            assignment: None,
            stats,
            solve_time_ms: elapsed_ms(started),
        }
    }

    /// Whether a feasible assignment was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == SolverStatus::Feasible
    }

    /// Converts to the plain `solve` result shape.
    pub fn into_result(self) -> Result<Option<Vec<NaiveDate>>, CspError> {
        match self.status {
            SolverStatus::Feasible | SolverStatus::Infeasible => Ok(self.assignment),
            SolverStatus::Timeout | SolverStatus::NodeLimit => Err(CspError::LimitReached {
                nodes: self.stats.nodes,
            }),
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Consistency-preprocessing backtracking solver for calendar problems.
#[derive(Debug, Clone, Default)]
pub struct CspSolver {
    config: SolverConfig,
}

impl CspSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the problem.
    ///
    /// Returns `Err` only for malformed problems; infeasibility and limits are
    /// reported through [`CspSolution::status`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use u_calendar::csp::{CspProblem, CspSolver, Operator, SolverConfig, SolverStatus};
    ///
    /// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    /// let mut problem = CspProblem::new(2, jan(1), jan(2));
    /// problem.add_binary(0, Operator::Ne, 1);
    ///
    /// let solution = CspSolver::new(SolverConfig::default()).solve(&problem).unwrap();
    /// assert_eq!(solution.status, SolverStatus::Feasible);
    /// assert_eq!(solution.assignment, Some(vec![jan(1), jan(2)]));
    /// ```
    pub fn solve(&self, problem: &CspProblem) -> Result<CspSolution, CspError> {
        problem.validate()?;
        let started = Instant::now();

        let mut domains = problem.initial_domains();
        let consistency = enforce(problem, &mut domains, self.config.propagation);
        let mut stats = SearchStats {
            pruned: consistency.pruned(),
            ..SearchStats::default()
        };

        if let Consistency::Wipeout { meeting, .. } = consistency {
            debug!("infeasible before search: meeting {meeting} has no candidate dates");
            return Ok(CspSolution::without_assignment(
                SolverStatus::Infeasible,
                stats,
                started,
            ));
        }

        let mut search = Backtracker {
            domains: &domains,
            constraints: &problem.constraints,
            assignment: vec![None; problem.n_meetings],
            stats: &mut stats,
            deadline: self
                .config
                .time_limit_ms
                .and_then(|ms| started.checked_add(Duration::from_millis(ms))),
            node_limit: self.config.node_limit,
        };

        let outcome = search.run();
        let assignment = match outcome {
            Outcome::Found => search.assignment.iter().copied().collect::<Option<Vec<_>>>(),
            _ => None,
        };
        let status = match outcome {
            Outcome::Found => SolverStatus::Feasible,
            Outcome::Exhausted => SolverStatus::Infeasible,
            Outcome::Aborted(status) => status,
        };

        debug!(
            "solve of {} meetings finished {:?}: {} nodes, {} backtracks, {} pruned",
            problem.n_meetings, status, stats.nodes, stats.backtracks, stats.pruned
        );

        Ok(CspSolution {
            status,
            assignment,
            stats,
            solve_time_ms: elapsed_ms(started),
        })
    }

    /// Solves independent problems, in parallel with the `parallel` feature.
    ///
    /// Results are in input order.
    pub fn solve_batch(&self, problems: &[CspProblem]) -> Vec<Result<CspSolution, CspError>> {
        #[cfg(feature = "parallel")]
        {
            problems.par_iter().map(|p| self.solve(p)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            problems.iter().map(|p| self.solve(p)).collect()
        }
    }
}

/// Solves a calendar satisfaction problem with the default configuration.
///
/// Returns `Ok(Some(dates))` with one date per meeting, `Ok(None)` when no
/// assignment exists, and `Err` when a constraint references a meeting
/// outside `0..n_meetings`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::csp::{solve, DateConstraint, Operator};
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let constraints = [DateConstraint::unary(0, Operator::Eq, jan(2))];
///
/// assert_eq!(solve(1, jan(1), jan(3), &constraints).unwrap(), Some(vec![jan(2)]));
/// ```
pub fn solve(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[DateConstraint],
) -> Result<Option<Vec<NaiveDate>>, CspError> {
    let problem = CspProblem::new(n_meetings, range_start, range_end)
        .with_constraints(constraints.iter().copied());
    CspSolver::default().solve(&problem)?.into_result()
}

enum Outcome {
    Found,
    Exhausted,
    Aborted(SolverStatus),
}

struct Backtracker<'a> {
    domains: &'a [Domain],
    constraints: &'a [DateConstraint],
    assignment: Vec<Option<NaiveDate>>,
    stats: &'a mut SearchStats,
    deadline: Option<Instant>,
    node_limit: Option<u64>,
}

impl Backtracker<'_> {
    fn limit_hit(&self) -> Option<SolverStatus> {
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(SolverStatus::Timeout);
        }
        if self.node_limit.is_some_and(|n| self.stats.nodes >= n) {
            return Some(SolverStatus::NodeLimit);
        }
        None
    }

    /// Depth-first search over meetings `0..n` with one domain cursor per
    /// meeting, so depth is bounded by the heap rather than the call stack.
    fn run(&mut self) -> Outcome {
        let n = self.assignment.len();
        if n == 0 {
            if let Some(status) = self.limit_hit() {
                return Outcome::Aborted(status);
            }
            return if test_solution(&self.assignment, self.constraints) {
                Outcome::Found
            } else {
                Outcome::Exhausted
            };
        }

        let domains = self.domains;
        let mut cursors = vec![0usize; n];
        let mut k = 0;

        loop {
            let candidates = domains[k].dates();
            let mut placed = false;

            while cursors[k] < candidates.len() {
                if let Some(status) = self.limit_hit() {
                    return Outcome::Aborted(status);
                }
                let date = candidates[cursors[k]];
                cursors[k] += 1;
                self.stats.nodes += 1;
                self.assignment[k] = Some(date);

                if test_solution(&self.assignment, self.constraints) {
                    placed = true;
                    break;
                }

                self.assignment[k] = None;
                self.stats.backtracks += 1;
            }

            if placed {
                // The check above ran on the full assignment once k is last.
                if k + 1 == n {
                    return Outcome::Found;
                }
                k += 1;
                cursors[k] = 0;
                continue;
            }

            // Meeting k exhausted: undo the choice of meeting k - 1.
            cursors[k] = 0;
            if k == 0 {
                return Outcome::Exhausted;
            }
            k -= 1;
            self.assignment[k] = None;
            self.stats.backtracks += 1;
        }
    }
}
