//! Value types exchanged with a solver backend.

use serde::{Deserialize, Serialize};
use vargrid_expr::VariableId;

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarType {
    Continuous,
    Integer,
    Binary,
}

impl VarType {
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Continuous => "continuous",
            VarType::Integer => "integer",
            VarType::Binary => "binary",
        }
    }

    /// True for integer and binary variables.
    pub fn is_integral(self) -> bool {
        !matches!(self, VarType::Continuous)
    }
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

impl ObjectiveSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveSense::Minimize => "minimize",
            ObjectiveSense::Maximize => "maximize",
        }
    }
}

/// Numeric attribute readable from a backend after building or solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Solution value of a variable.
    Value(VariableId),
    ObjectiveValue,
    MipGap,
    NodeCount,
    /// Wall-clock seconds spent in the last `optimize` call.
    Runtime,
    NumVariables,
    NumConstraints,
    NumNonZeros,
}

impl Attribute {
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Value(_) => "value",
            Attribute::ObjectiveValue => "objective_value",
            Attribute::MipGap => "mip_gap",
            Attribute::NodeCount => "node_count",
            Attribute::Runtime => "runtime",
            Attribute::NumVariables => "num_variables",
            Attribute::NumConstraints => "num_constraints",
            Attribute::NumNonZeros => "num_nonzeros",
        }
    }

    /// True for attributes that only exist once a solution is available.
    pub fn requires_solution(self) -> bool {
        matches!(
            self,
            Attribute::Value(_) | Attribute::ObjectiveValue | Attribute::MipGap
        )
    }
}
