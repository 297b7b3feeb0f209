//! Meeting domains.

use super::constraint::Operator;
use chrono::NaiveDate;

/// The ordered candidate dates of one meeting.
///
/// Built from an inclusive calendar range and afterwards only shrunk, so a
/// domain is always an ascending, order-preserving subsequence of the range
/// it was created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    dates: Vec<NaiveDate>,
}

impl Domain {
    /// Every calendar day from `start` to `end`, inclusive, ascending.
    ///
    /// When `end` precedes `start` the domain is the single date `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use u_calendar::csp::Domain;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let domain = Domain::from_range(start, end);
    /// assert_eq!(domain.len(), 3); // leap day included
    /// ```
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Self {
        let mut dates = Vec::new();
        let mut day = start;
        while day < end {
            dates.push(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        dates.push(day);
        Self { dates }
    }

    /// Candidate dates in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Iterates candidate dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Whether some date `y` in this domain satisfies `x op y`.
    ///
    /// Relies on the ascending order: ordering operators only need the
    /// smallest or largest candidate.
    pub fn has_support(&self, x: NaiveDate, op: Operator) -> bool {
        let (Some(&min), Some(&max)) = (self.dates.first(), self.dates.last()) else {
            return false;
        };
        match op {
            Operator::Eq => self.contains(x),
            Operator::Ne => min != x || max != x,
            Operator::Lt => x < max,
            Operator::Le => x <= max,
            Operator::Gt => x > min,
            Operator::Ge => x >= min,
        }
    }

    /// Keeps only the dates matching `keep`; returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(NaiveDate) -> bool,
    {
        let before = self.dates.len();
        self.dates.retain(|&d| keep(d));
        before - self.dates.len()
    }
}
