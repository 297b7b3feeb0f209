//! Solver configuration.

/// Arc-consistency strategy used before search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Revise every directed arc exactly once, in constraint order.
    ///
    /// A later revision may shrink a domain that an earlier arc depended on
    /// without that arc being re-checked. Search re-validates every
    /// constraint, so results are unaffected.
    #[default]
    SinglePass,

    /// AC-3: re-queue arcs into a meeting whose domain shrank until no
    /// domain changes.
    Fixpoint,
}

/// Configuration for [`CspSolver`](super::CspSolver).
///
/// # Examples
///
/// ```
/// use u_calendar::csp::{Propagation, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_propagation(Propagation::Fixpoint)
///     .with_time_limit_ms(500);
/// assert_eq!(config.propagation, Propagation::Fixpoint);
/// assert_eq!(config.time_limit_ms, Some(500));
/// assert!(config.node_limit.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Arc-consistency strategy.
    pub propagation: Propagation,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked before every tentative assignment; when exceeded the solve
    /// returns [`SolverStatus::Timeout`](super::SolverStatus::Timeout).
    /// `None` disables the limit (the default).
    pub time_limit_ms: Option<u64>,

    /// Optional cap on search nodes (tentative assignments).
    ///
    /// `None` disables the limit (the default).
    pub node_limit: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            propagation: Propagation::SinglePass,
            time_limit_ms: None,
            node_limit: None,
        }
    }
}

impl SolverConfig {
    /// Sets the arc-consistency strategy.
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the search node limit.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }
}
