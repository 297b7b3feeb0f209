//! CSP model definition.

use super::constraint::{DateConstraint, Operator};
use super::domain::Domain;
use super::error::CspError;
use chrono::NaiveDate;

/// A calendar satisfaction problem.
///
/// `n_meetings` meetings share the inclusive date range
/// `[range_start, range_end]`; constraints restrict individual meetings
/// against fixed dates or relate pairs of meetings.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::csp::{CspProblem, Operator};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
///
/// let mut problem = CspProblem::new(3, start, end);
/// problem.add_binary(0, Operator::Lt, 1);
/// problem.add_binary(1, Operator::Lt, 2);
/// problem.add_unary(2, Operator::Ne, end);
/// assert!(problem.validate().is_ok());
/// assert_eq!(problem.constraint_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CspProblem {
    /// Number of meetings, indexed `0..n_meetings`.
    pub n_meetings: usize,
    /// First date of every meeting's domain.
    pub range_start: NaiveDate,
    /// Last date (inclusive) of every meeting's domain.
    pub range_end: NaiveDate,
    /// Constraints, in insertion order.
    pub constraints: Vec<DateConstraint>,
}

impl CspProblem {
    /// Creates a problem with no constraints.
    pub fn new(n_meetings: usize, range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            n_meetings,
            range_start,
            range_end,
            constraints: Vec::new(),
        }
    }

    /// Sets the constraint list, replacing any existing constraints.
    pub fn with_constraints(mut self, constraints: impl IntoIterator<Item = DateConstraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: DateConstraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: add `meeting op date`.
    pub fn add_unary(&mut self, meeting: usize, op: Operator, date: NaiveDate) {
        self.constraints.push(DateConstraint::unary(meeting, op, date));
    }

    /// Convenience: add `left op right`.
    pub fn add_binary(&mut self, left: usize, op: Operator, right: usize) {
        self.constraints.push(DateConstraint::binary(left, op, right));
    }

    /// Checks that every constraint references an existing meeting.
    pub fn validate(&self) -> Result<(), CspError> {
        for constraint in &self.constraints {
            let meeting = constraint.max_meeting();
            if meeting >= self.n_meetings {
                return Err(CspError::MeetingOutOfRange {
                    constraint: constraint.to_string(),
                    meeting,
                    n_meetings: self.n_meetings,
                });
            }
        }
        Ok(())
    }

    /// Fresh, unpruned domains: one per meeting, all equal to the shared range.
    pub fn initial_domains(&self) -> Vec<Domain> {
        let domain = Domain::from_range(self.range_start, self.range_end);
        vec![domain; self.n_meetings]
    }

    /// Unary constraints, in insertion order.
    pub fn unary_constraints(&self) -> impl Iterator<Item = &DateConstraint> {
        self.constraints.iter().filter(|c| c.arity() == 1)
    }

    /// Binary constraints followed by their mirrored counterparts.
    ///
    /// Each relation therefore appears once from either endpoint's side.
    pub fn directed_arcs(&self) -> Vec<DateConstraint> {
        let forward = self.constraints.iter().filter(|c| c.arity() == 2).copied();
        let mirrored = self.constraints.iter().filter_map(DateConstraint::mirrored);
        forward.chain(mirrored).collect()
    }

    /// Returns the number of meetings.
    pub fn meeting_count(&self) -> usize {
        self.n_meetings
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
