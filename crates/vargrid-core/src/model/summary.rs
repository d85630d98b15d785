//! Size statistics for a recorded model.

use serde::Serialize;
use vargrid_solver::{ObjectiveSense, VarType};

use crate::model::Model;

/// Counts describing a recorded model.
///
/// `Display` prints the one-line stats report
/// `Vars: .. Constrs: .. Indicators: .. NZ: ..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub variables: usize,
    pub binaries: usize,
    pub integers: usize,
    pub constraints: usize,
    pub indicators: usize,
    pub nonzeros: usize,
    pub objective_terms: usize,
    pub objective_sense: Option<ObjectiveSense>,
}

impl Model {
    pub fn summary(&self) -> ModelSummary {
        let count = |kind: VarType| self.variables.iter().filter(|v| v.var_type == kind).count();
        ModelSummary {
            variables: self.num_variables(),
            binaries: count(VarType::Binary),
            integers: count(VarType::Integer),
            constraints: self.num_constraints(),
            indicators: self.num_indicators(),
            nonzeros: self.num_nonzeros(),
            objective_terms: self.objective.terms.len(),
            objective_sense: self.objective.sense,
        }
    }
}

impl std::fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vars: {} Constrs: {} Indicators: {} NZ: {}",
            self.variables, self.constraints, self.indicators, self.nonzeros
        )?;
        if self.binaries > 0 || self.integers > 0 {
            write!(f, " (binary {}, integer {})", self.binaries, self.integers)?;
        }
        match self.objective_sense {
            Some(sense) => write!(f, " Objective: {} {} terms", sense.as_str(), self.objective_terms),
            None => write!(f, " Objective: none"),
        }
    }
}
