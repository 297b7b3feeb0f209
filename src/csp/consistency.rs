//! Node and arc consistency preprocessing.
//!
//! # Algorithm
//!
//! 1. Node consistency: filter each meeting's domain by its unary constraints
//! 2. Arc consistency: for every binary constraint and its mirror, drop tail
//!    dates that have no supporting date in the head domain
//! 3. Report a wipeout as soon as any domain becomes empty
//!
//! # Reference
//!
//! Mackworth, A. K. (1977). "Consistency in Networks of Relations",
//! *Artificial Intelligence* 8(1), 99-118.

use std::collections::VecDeque;

use chrono::NaiveDate;
use log::{debug, trace};

use super::config::Propagation;
use super::constraint::{DateConstraint, Operator};
use super::domain::Domain;
use super::model::CspProblem;

/// Outcome of preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Consistency {
    /// Every domain is non-empty.
    Consistent {
        /// Total dates removed across all domains.
        pruned: usize,
    },
    /// A domain became empty; the problem is infeasible.
    Wipeout {
        /// Meeting whose domain emptied first.
        meeting: usize,
        /// Total dates removed before the wipeout.
        pruned: usize,
    },
}

impl Consistency {
    /// Whether search can proceed.
    pub(crate) fn is_consistent(&self) -> bool {
        matches!(self, Consistency::Consistent { .. })
    }

    /// Dates removed by preprocessing.
    pub(crate) fn pruned(&self) -> usize {
        match *self {
            Consistency::Consistent { pruned } | Consistency::Wipeout { pruned, .. } => pruned,
        }
    }
}

/// Removes dates of `domain` that violate `x op date`.
///
/// Returns the number of dates removed.
pub(crate) fn node_consistency(domain: &mut Domain, op: Operator, date: NaiveDate) -> usize {
    domain.retain(|x| op.evaluate(x, date))
}

/// Removes dates of `domains[tail]` without support in `domains[head]`
/// under `tail op head`.
///
/// `tail` and `head` may be the same meeting. Returns the number of dates
/// removed.
pub(crate) fn revise(domains: &mut [Domain], tail: usize, op: Operator, head: usize) -> usize {
    let supported: Vec<bool> = domains[tail]
        .iter()
        .map(|x| domains[head].has_support(x, op))
        .collect();
    let mut flags = supported.into_iter();
    domains[tail].retain(|_| flags.next().unwrap_or(true))
}

/// Applies node consistency then arc consistency to `domains`.
///
/// `domains` must hold one entry per meeting of a validated `problem`;
/// [`CspSolver`](super::CspSolver) guarantees this by validating first.
pub(crate) fn enforce(problem: &CspProblem, domains: &mut [Domain], propagation: Propagation) -> Consistency {
    let mut pruned = 0;

    for constraint in problem.unary_constraints() {
        if let DateConstraint::Unary { meeting, op, date } = *constraint {
            pruned += node_consistency(&mut domains[meeting], op, date);
            if domains[meeting].is_empty() {
                debug!("node consistency emptied meeting {meeting} on `{constraint}`");
                return Consistency::Wipeout { meeting, pruned };
            }
        }
    }

    let arcs = problem.directed_arcs();
    let outcome = match propagation {
        Propagation::SinglePass => single_pass(&arcs, domains, pruned),
        Propagation::Fixpoint => fixpoint(&arcs, domains, problem.n_meetings, pruned),
    };

    debug!(
        "preprocessing ({:?}) over {} arcs: {:?}",
        propagation,
        arcs.len(),
        outcome
    );
    outcome
}

fn single_pass(arcs: &[DateConstraint], domains: &mut [Domain], mut pruned: usize) -> Consistency {
    for arc in arcs {
        if let DateConstraint::Binary { left, op, right } = *arc {
            let removed = revise(domains, left, op, right);
            trace!("revise `{arc}` removed {removed}");
            pruned += removed;
            if domains[left].is_empty() {
                return Consistency::Wipeout {
                    meeting: left,
                    pruned,
                };
            }
        }
    }
    Consistency::Consistent { pruned }
}

fn fixpoint(
    arcs: &[DateConstraint],
    domains: &mut [Domain],
    n_meetings: usize,
    mut pruned: usize,
) -> Consistency {
    // Arcs to re-examine when a meeting's domain shrinks: those whose head it is.
    let mut by_head: Vec<Vec<usize>> = vec![Vec::new(); n_meetings];
    for (i, arc) in arcs.iter().enumerate() {
        if let DateConstraint::Binary { right, .. } = *arc {
            by_head[right].push(i);
        }
    }

    let mut queue: VecDeque<usize> = (0..arcs.len()).collect();
    let mut queued = vec![true; arcs.len()];

    while let Some(i) = queue.pop_front() {
        queued[i] = false;
        let DateConstraint::Binary { left, op, right } = arcs[i] else {
            continue;
        };

        let removed = revise(domains, left, op, right);
        if removed == 0 {
            continue;
        }
        trace!("revise `{}` removed {removed}", arcs[i]);
        pruned += removed;

        if domains[left].is_empty() {
            return Consistency::Wipeout {
                meeting: left,
                pruned,
            };
        }

        for &j in &by_head[left] {
            if !queued[j] {
                queued[j] = true;
                queue.push_back(j);
            }
        }
    }

    Consistency::Consistent { pruned }
}
