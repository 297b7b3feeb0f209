//! Seeded random problem generation for benchmarks and stress tests.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constraint::{DateConstraint, Operator};
use super::model::CspProblem;

/// Parameters for [`generate`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::csp::{generate, GeneratorConfig};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let config = GeneratorConfig::new(start)
///     .with_meetings(6)
///     .with_horizon_days(10)
///     .with_constraints(3, 8)
///     .with_seed(7);
///
/// let problem = generate(&config);
/// assert_eq!(problem.meeting_count(), 6);
/// assert_eq!(problem.constraint_count(), 11);
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// First day of the shared range.
    pub range_start: NaiveDate,
    /// Number of days in the shared range (at least 1).
    pub horizon_days: u64,
    /// Number of meetings.
    pub n_meetings: usize,
    /// Number of unary constraints.
    pub n_unary: usize,
    /// Number of binary constraints.
    pub n_binary: usize,
    /// Random seed.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Five meetings over two weeks, four unary and eight binary constraints.
    pub fn new(range_start: NaiveDate) -> Self {
        Self {
            range_start,
            horizon_days: 14,
            n_meetings: 5,
            n_unary: 4,
            n_binary: 8,
            seed: 42,
        }
    }

    /// Sets the number of meetings.
    pub fn with_meetings(mut self, n: usize) -> Self {
        self.n_meetings = n;
        self
    }

    /// Sets the range length in days (clamped to at least 1).
    pub fn with_horizon_days(mut self, days: u64) -> Self {
        self.horizon_days = days.max(1);
        self
    }

    /// Sets the number of unary and binary constraints.
    pub fn with_constraints(mut self, n_unary: usize, n_binary: usize) -> Self {
        self.n_unary = n_unary;
        self.n_binary = n_binary;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Last day of the shared range.
    pub fn range_end(&self) -> NaiveDate {
        self.range_start
            .checked_add_days(Days::new(self.horizon_days.saturating_sub(1)))
            .unwrap_or(self.range_start)
    }
}

/// Generates a random problem; the same config always yields the same problem.
///
/// Unary literals are drawn from the range itself. With zero meetings no
/// constraints are generated.
pub fn generate(config: &GeneratorConfig) -> CspProblem {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let range_end = config.range_end();
    let mut problem = CspProblem::new(config.n_meetings, config.range_start, range_end);

    if config.n_meetings == 0 {
        return problem;
    }

    let span = config.horizon_days.max(1);
    for _ in 0..config.n_unary {
        let meeting = rng.random_range(0..config.n_meetings);
        let op = random_operator(&mut rng);
        let offset = rng.random_range(0..span);
        let date = config
            .range_start
            .checked_add_days(Days::new(offset))
            .unwrap_or(config.range_start);
        problem.add_unary(meeting, op, date);
    }

    for _ in 0..config.n_binary {
        let left = rng.random_range(0..config.n_meetings);
        let right = rng.random_range(0..config.n_meetings);
        let op = random_operator(&mut rng);
        problem.add_binary(left, op, right);
    }

    problem
}

fn random_operator<R: Rng>(rng: &mut R) -> Operator {
    Operator::ALL[rng.random_range(0..Operator::ALL.len())]
}
