use vargrid_expr::{ComparisonSense, VariableId};
use vargrid_solver::{ObjectiveSense, VarType};

/// A registered decision variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableRecord {
    pub var_type: VarType,
    pub lower: f64,
    pub upper: f64,
}

/// A registered linear row `terms <sense> rhs`.
///
/// Terms are merged per variable, zero coefficients dropped, sorted by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRecord {
    pub terms: Vec<(VariableId, f64)>,
    pub sense: ComparisonSense,
    pub rhs: f64,
}

/// A row enforced only while `binary == active_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    pub binary: VariableId,
    pub active_value: bool,
    pub terms: Vec<(VariableId, f64)>,
    pub sense: ComparisonSense,
    pub rhs: f64,
    pub name: Option<String>,
}

/// Objective function with a sense and linear terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Objective {
    pub sense: Option<ObjectiveSense>,
    pub terms: Vec<(VariableId, f64)>,
    pub constant: f64,
}
