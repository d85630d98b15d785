//! The solver capability consumed by the modeling core.

use crate::{Attribute, ObjectiveSense, SolverConfig, SolverError, SolverStatus, VarType};
use vargrid_expr::{ComparisonSense, ConstraintId, Expr, VariableId};

/// Capability every solver backend provides.
///
/// Handles returned by a backend stay owned by it; callers keep copies and
/// nothing in the modeling core ever deregisters them.
pub trait Solver {
    /// Register a decision variable and return its handle.
    fn create_variable(
        &mut self,
        var_type: VarType,
        lower: f64,
        upper: f64,
        name: &str,
    ) -> Result<VariableId, SolverError>;

    /// Register `expr <sense> rhs`.
    fn add_constraint(
        &mut self,
        expr: Expr,
        sense: ComparisonSense,
        rhs: f64,
        name: &str,
    ) -> Result<ConstraintId, SolverError>;

    /// Register `expr <sense> rhs`, enforced only while `binary == active_value`.
    fn add_indicator_constraint(
        &mut self,
        binary: VariableId,
        active_value: bool,
        expr: Expr,
        sense: ComparisonSense,
        rhs: f64,
        name: &str,
    ) -> Result<(), SolverError>;

    /// Replace the objective.
    fn set_objective(&mut self, expr: Expr, sense: ObjectiveSense) -> Result<(), SolverError>;

    /// Solve with the given run options.
    fn optimize(&mut self, config: &SolverConfig) -> Result<SolverStatus, SolverError>;

    /// Read a numeric attribute.
    fn get_attribute(&self, attribute: Attribute) -> Result<f64, SolverError>;

    /// Solution value of a variable.
    fn value(&self, var: VariableId) -> Result<f64, SolverError> {
        self.get_attribute(Attribute::Value(var))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSolver {
        variables: u32,
        constraints: u32,
    }

    impl Solver for CountingSolver {
        fn create_variable(
            &mut self,
            _var_type: VarType,
            _lower: f64,
            _upper: f64,
            _name: &str,
        ) -> Result<VariableId, SolverError> {
            self.variables += 1;
            Ok(VariableId::new(self.variables - 1))
        }

        fn add_constraint(
            &mut self,
            _expr: Expr,
            _sense: ComparisonSense,
            _rhs: f64,
            _name: &str,
        ) -> Result<ConstraintId, SolverError> {
            self.constraints += 1;
            Ok(ConstraintId::new(self.constraints - 1))
        }

        fn add_indicator_constraint(
            &mut self,
            _binary: VariableId,
            _active_value: bool,
            _expr: Expr,
            _sense: ComparisonSense,
            _rhs: f64,
            _name: &str,
        ) -> Result<(), SolverError> {
            Ok(())
        }

        fn set_objective(
            &mut self,
            _expr: Expr,
            _sense: ObjectiveSense,
        ) -> Result<(), SolverError> {
            Ok(())
        }

        fn optimize(&mut self, _config: &SolverConfig) -> Result<SolverStatus, SolverError> {
            Ok(SolverStatus::Optimal)
        }

        fn get_attribute(&self, attribute: Attribute) -> Result<f64, SolverError> {
            match attribute {
                Attribute::NumVariables => Ok(f64::from(self.variables)),
                Attribute::Value(var) => Ok(f64::from(var.inner())),
                other => Err(SolverError::NoSolution {
                    attribute: other.as_str(),
                }),
            }
        }
    }

    #[test]
    fn test_value_defaults_to_attribute_query() {
        let mut solver = CountingSolver::default();
        let a = solver
            .create_variable(VarType::Binary, 0.0, 1.0, "a")
            .unwrap();
        let b = solver
            .create_variable(VarType::Binary, 0.0, 1.0, "b")
            .unwrap();
        assert_eq!(solver.value(a).unwrap(), 0.0);
        assert_eq!(solver.value(b).unwrap(), 1.0);
        assert_eq!(solver.get_attribute(Attribute::NumVariables).unwrap(), 2.0);
        assert!(solver.get_attribute(Attribute::MipGap).is_err());
    }

    #[test]
    fn test_constraint_handles_are_sequential() {
        let mut solver = CountingSolver::default();
        let c0 = solver
            .add_constraint(Expr::zero(), ComparisonSense::Equal, 0.0, "")
            .unwrap();
        let c1 = solver
            .add_constraint(Expr::zero(), ComparisonSense::Equal, 0.0, "")
            .unwrap();
        assert_eq!(c0.inner() + 1, c1.inner());
    }
}
