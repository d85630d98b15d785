//! Solver abstractions for vargrid models.
//!
//! The modeling core never solves anything itself. It registers variables and
//! constraints through the [`Solver`] capability and reads results back
//! through [`Attribute`] queries.
//!
//! # Overview
//!
//! - [`Solver`]: Capability trait implemented by backends
//! - [`SolverConfig`]: Run options applied before `optimize`
//! - [`SolverStatus`]: Common status values across solvers
//! - [`SolverError`]: Errors surfaced from the solver boundary

mod config;
mod error;
mod status;
mod traits;
mod types;

pub use config::SolverConfig;
pub use error::SolverError;
pub use status::SolverStatus;
pub use traits::Solver;
pub use types::{Attribute, ObjectiveSense, VarType};
