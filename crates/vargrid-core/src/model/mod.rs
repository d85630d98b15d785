//! In-memory recording backend.
//!
//! [`Model`] implements [`Solver`](vargrid_solver::Solver) by validating and
//! storing every call. It has no solving algorithm: `optimize` fails with
//! `SolverNotAvailable`. It is the backend used to inspect what a model
//! builder produced and to drive the modeling layer in tests.
//!
//! # Module Organization
//!
//! - [`builder`]: The `Solver` implementation
//! - [`storage`]: Column-first sparse storage access
//! - [`metadata`]: Variable and constraint naming and metadata
//! - [`pretty`]: Plain-text rendering and `write_model`
//! - [`summary`]: Size statistics and the printable stats report

mod builder;
mod metadata;
mod pretty;
mod storage;
mod summary;

use crate::model::metadata::Labels;
use crate::types::{ConstraintRecord, IndicatorRecord, Objective, VariableRecord};
use std::collections::BTreeMap;
use std::time::Instant;
use vargrid_expr::{ConstraintId, VariableId};
use vargrid_solver::SolverError;

pub use pretty::ModelWriteError;
pub use summary::ModelSummary;

/// Recording model for linear and mixed-integer programs.
///
/// Variables and constraints receive dense ids in registration order.
/// Coefficients are additionally kept per column for nonzero counts and
/// column access.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub(crate) variables: Vec<VariableRecord>,
    pub(crate) constraints: Vec<ConstraintRecord>,
    pub(crate) indicators: Vec<IndicatorRecord>,
    pub(crate) objective: Objective,
    // Column-first sparse storage: variable_id -> vec of (constraint_id, coefficient)
    pub(crate) columns: BTreeMap<VariableId, Vec<(ConstraintId, f64)>>,
    pub(crate) variable_labels: Labels<VariableId>,
    pub(crate) constraint_labels: Labels<ConstraintId>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn indicators(&self) -> &[IndicatorRecord] {
        &self.indicators
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), SolverError> {
        if !id.is_placeholder() && (id.inner() as usize) < self.variables.len() {
            Ok(())
        } else {
            Err(SolverError::InvalidVariableId(id))
        }
    }

    /// Check ids and coefficients, then merge duplicate terms and drop zeros.
    pub(crate) fn normalize_terms(
        &self,
        terms: Vec<(VariableId, f64)>,
    ) -> Result<Vec<(VariableId, f64)>, SolverError> {
        let started = Instant::now();
        let terms_in = terms.len();

        let mut merged: BTreeMap<VariableId, f64> = BTreeMap::new();
        for (var_id, coeff) in terms {
            self.ensure_variable_exists(var_id)?;
            if !coeff.is_finite() {
                return Err(SolverError::InvalidCoefficient { coefficient: coeff });
            }
            *merged.entry(var_id).or_insert(0.0) += coeff;
        }

        let normalized: Vec<(VariableId, f64)> = merged
            .into_iter()
            .filter(|(_, coeff)| *coeff != 0.0)
            .collect();

        tracing::trace!(
            component = "model",
            operation = "lower_expr",
            status = "success",
            expr_terms_in = terms_in,
            expr_terms_out = normalized.len(),
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Lowered linear expression"
        );

        Ok(normalized)
    }
}
