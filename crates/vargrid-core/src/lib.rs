//! Indexed decision-variable families and cartesian model building.
//!
//! Variables are declared as N-dimensional [`VariableGroup`]s built by a
//! [`VariableFactory`], stored under enum keys in a [`VariableTable`], and
//! combined into constraints with the traversal helpers ([`for_each`],
//! [`sum`], [`comp`]) and the patterns in [`constraints`]. Everything is
//! registered through the [`Solver`](vargrid_solver::Solver) capability;
//! [`Model`] is the in-memory backend and [`ModelBuilder`] drives a full
//! build-and-solve run.

pub mod comprehension;
pub mod constraints;
pub mod error;
pub mod factory;
pub mod group;
pub mod index;
pub mod iterate;
pub mod model;
pub mod naming;
pub mod run;
pub mod table;
pub mod types;

pub use comprehension::{NdIndex, cartesian_product, comp, comp_nd, comp2};
pub use error::{BuildError, IndexError};
pub use factory::VariableFactory;
pub use group::{Node, VariableGroup};
pub use index::{IndexIter, IndexRange, indices, range};
pub use iterate::{for_each, sum, try_for_each, try_sum};
pub use model::{Model, ModelSummary, ModelWriteError};
pub use naming::{NAMES_ENABLED, Naming};
pub use run::{ModelBuilder, SolveResult, StageReport, solve};
pub use table::{TableKey, VariableTable};
pub use types::{ConstraintRecord, IndicatorRecord, Objective, VariableRecord};
