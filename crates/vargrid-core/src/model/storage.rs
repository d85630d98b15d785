//! Read access to recorded variables, rows and columns.

use crate::types::{ConstraintRecord, VariableRecord};
use vargrid_expr::{ConstraintId, VariableId};
use vargrid_solver::SolverError;

use super::Model;

impl Model {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Linear rows only; indicator constraints are counted separately.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_indicators(&self) -> usize {
        self.indicators.len()
    }

    /// Stored coefficients across all linear rows.
    pub fn num_nonzeros(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn get_variable(&self, id: VariableId) -> Result<&VariableRecord, SolverError> {
        self.variables
            .get(id.inner() as usize)
            .filter(|_| !id.is_placeholder())
            .ok_or(SolverError::InvalidVariableId(id))
    }

    pub fn get_constraint(&self, id: ConstraintId) -> Option<&ConstraintRecord> {
        self.constraints.get(id.inner() as usize)
    }

    /// Coefficients of one variable across rows, in row order.
    pub fn get_column(&self, id: VariableId) -> Option<&[(ConstraintId, f64)]> {
        self.columns.get(&id).map(Vec::as_slice)
    }

    /// The coefficient matrix transposed into rows, ordered by variable.
    pub fn rows(&self) -> Vec<Vec<(VariableId, f64)>> {
        let mut rows = vec![Vec::new(); self.constraints.len()];
        for (&var, column) in &self.columns {
            for &(row, coeff) in column {
                if let Some(entries) = rows.get_mut(row.inner() as usize) {
                    entries.push((var, coeff));
                }
            }
        }
        rows
    }
}
