use vargrid_expr::{ComparisonSense, ConstraintId, Expr, VariableId};
use vargrid_solver::{Solver, VarType};

use crate::model::Model;

pub(super) fn continuous(model: &mut Model, lower: f64, upper: f64) -> VariableId {
    model
        .create_variable(VarType::Continuous, lower, upper, "")
        .unwrap()
}

pub(super) fn binary(model: &mut Model) -> VariableId {
    model.create_variable(VarType::Binary, 0.0, 1.0, "").unwrap()
}

pub(super) fn upper_bound_row(model: &mut Model, var: VariableId, rhs: f64) -> ConstraintId {
    model
        .add_constraint(Expr::var(var), ComparisonSense::LessEqual, rhs, "")
        .unwrap()
}
