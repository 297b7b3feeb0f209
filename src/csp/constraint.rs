//! Date constraints.

use chrono::NaiveDate;
use std::fmt;

/// Comparison operator relating two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<` (strictly earlier).
    Lt,
    /// `<=`
    Le,
    /// `>` (strictly later).
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// Tests whether `left op right` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use u_calendar::csp::Operator;
    ///
    /// let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let b = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// assert!(Operator::Lt.evaluate(a, b));
    /// assert!(Operator::Le.evaluate(a, a));
    /// assert!(!Operator::Gt.evaluate(a, b));
    /// ```
    pub fn evaluate(self, left: NaiveDate, right: NaiveDate) -> bool {
        match self {
            Operator::Eq => left == right,
            Operator::Ne => left != right,
            Operator::Lt => left < right,
            Operator::Le => left <= right,
            Operator::Gt => left > right,
            Operator::Ge => left >= right,
        }
    }

    /// The operator that expresses the same relation with operands swapped.
    ///
    /// `a < b` holds exactly when `b > a` holds, so `Lt` mirrors to `Gt`.
    /// Equality and inequality are symmetric and mirror to themselves.
    pub fn mirrored(self) -> Self {
        match self {
            Operator::Eq => Operator::Eq,
            Operator::Ne => Operator::Ne,
            Operator::Lt => Operator::Gt,
            Operator::Le => Operator::Ge,
            Operator::Gt => Operator::Lt,
            Operator::Ge => Operator::Le,
        }
    }

    /// Source-style symbol (`"<="`, `"!="`, ...).
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A constraint on the date of one meeting or between two meetings.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calendar::csp::{DateConstraint, Operator};
///
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let unary = DateConstraint::unary(0, Operator::Gt, new_year);
/// assert_eq!(unary.arity(), 1);
///
/// let binary = DateConstraint::binary(0, Operator::Lt, 1);
/// assert_eq!(binary.mirrored(), Some(DateConstraint::binary(1, Operator::Gt, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateConstraint {
    /// `meeting op date`.
    Unary {
        /// Constrained meeting index.
        meeting: usize,
        /// Comparison operator.
        op: Operator,
        /// Literal date on the right-hand side.
        date: NaiveDate,
    },

    /// `left op right` between two meetings.
    Binary {
        /// Meeting index on the left-hand side.
        left: usize,
        /// Comparison operator.
        op: Operator,
        /// Meeting index on the right-hand side.
        right: usize,
    },
}

impl DateConstraint {
    /// Creates a unary constraint `meeting op date`.
    pub fn unary(meeting: usize, op: Operator, date: NaiveDate) -> Self {
        DateConstraint::Unary { meeting, op, date }
    }

    /// Creates a binary constraint `left op right`.
    pub fn binary(left: usize, op: Operator, right: usize) -> Self {
        DateConstraint::Binary { left, op, right }
    }

    /// Number of meetings the constraint mentions (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            DateConstraint::Unary { .. } => 1,
            DateConstraint::Binary { .. } => 2,
        }
    }

    /// The operator of this constraint.
    pub fn op(&self) -> Operator {
        match *self {
            DateConstraint::Unary { op, .. } | DateConstraint::Binary { op, .. } => op,
        }
    }

    /// Meeting index on the left-hand side.
    pub fn left(&self) -> usize {
        match *self {
            DateConstraint::Unary { meeting, .. } => meeting,
            DateConstraint::Binary { left, .. } => left,
        }
    }

    /// Highest meeting index referenced by this constraint.
    pub fn max_meeting(&self) -> usize {
        match *self {
            DateConstraint::Unary { meeting, .. } => meeting,
            DateConstraint::Binary { left, right, .. } => left.max(right),
        }
    }

    /// For a binary constraint, the equivalent constraint with operands swapped.
    ///
    /// Returns `None` for unary constraints.
    pub fn mirrored(&self) -> Option<Self> {
        match *self {
            DateConstraint::Unary { .. } => None,
            DateConstraint::Binary { left, op, right } => Some(DateConstraint::Binary {
                left: right,
                op: op.mirrored(),
                right: left,
            }),
        }
    }
}

impl fmt::Display for DateConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateConstraint::Unary { meeting, op, date } => write!(f, "m{meeting} {op} {date}"),
            DateConstraint::Binary { left, op, right } => write!(f, "m{left} {op} m{right}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_evaluate_all_operators() {
        let (a, b) = (date(1), date(2));

        assert!(Operator::Eq.evaluate(a, a));
        assert!(!Operator::Eq.evaluate(a, b));
        assert!(Operator::Ne.evaluate(a, b));
        assert!(!Operator::Ne.evaluate(b, b));
        assert!(Operator::Lt.evaluate(a, b));
        assert!(!Operator::Lt.evaluate(a, a));
        assert!(Operator::Le.evaluate(a, a));
        assert!(!Operator::Le.evaluate(b, a));
        assert!(Operator::Gt.evaluate(b, a));
        assert!(!Operator::Gt.evaluate(b, b));
        assert!(Operator::Ge.evaluate(b, b));
        assert!(!Operator::Ge.evaluate(a, b));
    }

    #[test]
    fn test_mirrored_operator_swaps_operands() {
        let dates = [date(1), date(2), date(3)];
        for op in Operator::ALL {
            for &x in &dates {
                for &y in &dates {
                    assert_eq!(
                        op.evaluate(x, y),
                        op.mirrored().evaluate(y, x),
                        "{op} vs mirrored {} on {x}, {y}",
                        op.mirrored()
                    );
                }
            }
        }
    }

    #[test]
    fn test_mirror_is_involution() {
        for op in Operator::ALL {
            assert_eq!(op.mirrored().mirrored(), op);
        }
    }

    #[test]
    fn test_operator_display() {
        let rendered: Vec<String> = Operator::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(rendered, ["==", "!=", "<", "<=", ">", ">="]);
    }

    #[test]
    fn test_constraint_accessors() {
        let u = DateConstraint::unary(3, Operator::Ne, date(5));
        assert_eq!(u.arity(), 1);
        assert_eq!(u.left(), 3);
        assert_eq!(u.max_meeting(), 3);
        assert_eq!(u.op(), Operator::Ne);
        assert_eq!(u.mirrored(), None);

        let b = DateConstraint::binary(4, Operator::Le, 1);
        assert_eq!(b.arity(), 2);
        assert_eq!(b.left(), 4);
        assert_eq!(b.max_meeting(), 4);
        assert_eq!(b.mirrored(), Some(DateConstraint::binary(1, Operator::Ge, 4)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DateConstraint::unary(0, Operator::Eq, date(2)).to_string(),
            "m0 == 2024-01-02"
        );
        assert_eq!(DateConstraint::binary(0, Operator::Ge, 2).to_string(), "m0 >= m2");
    }
}
