//! Assignment checking.

use super::constraint::DateConstraint;
use chrono::NaiveDate;

/// Evaluates one constraint against a (possibly partial) assignment.
///
/// Returns `None` when either side is unassigned, i.e. the constraint cannot
/// be decided yet. Indices past the end of `assignment` count as unassigned.
pub fn check(constraint: &DateConstraint, assignment: &[Option<NaiveDate>]) -> Option<bool> {
    let slot = |i: usize| assignment.get(i).copied().flatten();
    let (left, op, right) = match *constraint {
        DateConstraint::Unary { meeting, op, date } => (slot(meeting)?, op, date),
        DateConstraint::Binary { left, op, right } => (slot(left)?, op, slot(right)?),
    };
    Some(op.evaluate(left, right))
}

/// Tests whether an assignment satisfies every constraint.
///
/// Constraints touching an unassigned meeting are skipped, so this works
/// both as a full-solution checker and as a pruning test on partial
/// assignments.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::csp::{test_solution, DateConstraint, Operator};
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let constraints = [DateConstraint::binary(0, Operator::Lt, 1)];
///
/// assert!(test_solution(&[Some(jan(1)), Some(jan(2))], &constraints));
/// assert!(!test_solution(&[Some(jan(2)), Some(jan(1))], &constraints));
/// assert!(test_solution(&[Some(jan(2)), None], &constraints));
/// ```
pub fn test_solution(assignment: &[Option<NaiveDate>], constraints: &[DateConstraint]) -> bool {
    constraints
        .iter()
        .all(|c| check(c, assignment).unwrap_or(true))
}
