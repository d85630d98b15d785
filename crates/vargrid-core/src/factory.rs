//! Construction of variable groups.

use std::convert::Infallible;
use std::time::Instant;

use vargrid_expr::VariableId;
use vargrid_solver::{Solver, SolverError, VarType};

use crate::group::VariableGroup;
use crate::naming::Naming;

/// Builds [`VariableGroup`] trees.
///
/// Attached groups register every leaf with a solver, named
/// `base[i0,i1,...]` through the factory's [`Naming`]. Independent groups
/// hold placeholder handles and never touch a solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableFactory {
    naming: Naming,
}

impl VariableFactory {
    pub fn new(naming: Naming) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> Naming {
        self.naming
    }

    /// Register one variable per index tuple of `shape` with `solver`.
    ///
    /// An empty `shape` registers a single scalar named `base`. A zero in
    /// `shape` produces an empty branch rather than an error. The first
    /// solver failure aborts the build; variables registered before it stay
    /// in the solver.
    pub fn create<S: Solver + ?Sized>(
        &self,
        solver: &mut S,
        var_type: VarType,
        lower: f64,
        upper: f64,
        base: &str,
        shape: &[usize],
    ) -> Result<VariableGroup, SolverError> {
        let started = Instant::now();
        let naming = self.naming;
        let group = VariableGroup::build(shape, |index| {
            solver.create_variable(var_type, lower, upper, &naming.name_nd(base, index))
        })?;
        tracing::debug!(
            component = "factory",
            operation = "create",
            status = "success",
            base,
            var_type = var_type.as_str(),
            dims = shape.len(),
            leaves = group.len(),
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Created variable group"
        );
        Ok(group)
    }

    /// Register a single variable and wrap it in a scalar group.
    pub fn create_scalar<S: Solver + ?Sized>(
        &self,
        solver: &mut S,
        var_type: VarType,
        lower: f64,
        upper: f64,
        base: &str,
    ) -> Result<VariableGroup, SolverError> {
        self.create(solver, var_type, lower, upper, base, &[])
    }

    /// Binary variables over `shape`.
    pub fn create_binary<S: Solver + ?Sized>(
        &self,
        solver: &mut S,
        base: &str,
        shape: &[usize],
    ) -> Result<VariableGroup, SolverError> {
        self.create(solver, VarType::Binary, 0.0, 1.0, base, shape)
    }

    /// Group of the given shape whose leaves are unregistered placeholders.
    ///
    /// Fill it in later with [`VariableGroup::at_mut`] once a solver exists.
    pub fn create_independent(shape: &[usize]) -> VariableGroup {
        let group = VariableGroup::build::<_, Infallible>(shape, |_| Ok(VariableId::placeholder()));
        match group {
            Ok(group) => group,
            Err(never) => match never {},
        }
    }
}
