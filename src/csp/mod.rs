//! Calendar satisfaction problems (CSP).
//!
//! Assigns a date to each of `n` meetings from a shared inclusive date
//! range so that every unary (meeting vs. fixed date) and binary (meeting
//! vs. meeting) constraint holds.
//!
//! # Key Components
//!
//! - **Domains**: [`Domain`] — ordered candidate dates of one meeting
//! - **Constraints**: [`DateConstraint`] — unary or binary, with an [`Operator`]
//! - **Model**: [`CspProblem`] — meetings, shared range, constraints
//! - **Preprocessing**: node consistency, then single-pass or fixpoint arc consistency
//! - **Search**: [`CspSolver`] / [`solve`] — chronological backtracking
//! - **Checking**: [`test_solution`] — full or partial assignments
//!
//! # Design
//!
//! The solver returns any one feasible assignment, deterministically the
//! lexicographically smallest under ascending date order. It does not
//! optimize, and supports constraints of arity one or two only.
//!
//! # References
//!
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! 4th ed., ch. 6.

mod config;
mod consistency;
mod constraint;
mod domain;
mod error;
mod evaluator;
mod generator;
mod model;
mod solver;

#[cfg(test)]
mod properties;

pub use config::{Propagation, SolverConfig};
pub use constraint::{DateConstraint, Operator};
pub use domain::Domain;
pub use error::CspError;
pub use evaluator::{check, test_solution};
pub use generator::{generate, GeneratorConfig};
pub use model::CspProblem;
pub use solver::{solve, CspSolution, CspSolver, SearchStats, SolverStatus};
