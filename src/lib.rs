//! Calendar satisfaction problem solver.
//!
//! Schedules `n` meetings on calendar dates subject to unary and binary
//! date constraints:
//!
//! - **Domains**: every meeting starts with the same inclusive date range.
//! - **Consistency**: node consistency prunes dates violating unary
//!   constraints; arc consistency prunes dates with no supporting partner
//!   date under a binary constraint.
//! - **Search**: deterministic chronological backtracking that checks the
//!   partial assignment after every tentative date.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_calendar::csp::{solve, DateConstraint, Operator};
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let constraints = [
//!     DateConstraint::binary(0, Operator::Lt, 1),
//!     DateConstraint::binary(1, Operator::Lt, 2),
//! ];
//!
//! let dates = solve(3, jan(1), jan(5), &constraints).unwrap().unwrap();
//! assert_eq!(dates, vec![jan(1), jan(2), jan(3)]);
//! ```
//!
//! # Architecture
//!
//! Purely synchronous and in-memory: problems are built per call and the
//! result is returned by value. The optional `parallel` feature only
//! parallelizes [`csp::CspSolver::solve_batch`] across independent problems.

pub mod csp;
