//! Error types.

use thiserror::Error;

/// Errors raised for malformed problems or aborted solves.
///
/// Infeasibility is not an error: it is reported as `Ok(None)` by
/// [`solve`](super::solve) and as [`SolverStatus::Infeasible`](super::SolverStatus)
/// by [`CspSolver`](super::CspSolver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CspError {
    /// A constraint mentions a meeting index outside `[0, n_meetings)`.
    #[error("constraint `{constraint}` references meeting {meeting}, but only {n_meetings} meetings exist")]
    MeetingOutOfRange {
        /// Rendered constraint.
        constraint: String,
        /// Offending meeting index.
        meeting: usize,
        /// Number of meetings in the problem.
        n_meetings: usize,
    },

    /// The search stopped on a time or node limit before reaching a verdict.
    #[error("search limit reached after {nodes} nodes")]
    LimitReached {
        /// Nodes explored before stopping.
        nodes: u64,
    },
}
