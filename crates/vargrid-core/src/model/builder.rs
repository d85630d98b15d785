//! `Solver` implementation: validate, then record.

use vargrid_expr::{ComparisonSense, ConstraintId, Expr, VariableId};
use vargrid_solver::{
    Attribute, ObjectiveSense, Solver, SolverConfig, SolverError, SolverStatus, VarType,
};

use crate::model::Model;
use crate::types::{ConstraintRecord, IndicatorRecord, Objective, VariableRecord};

fn check_rhs(rhs: f64) -> Result<(), SolverError> {
    if rhs.is_nan() {
        Err(SolverError::InvalidCoefficient { coefficient: rhs })
    } else {
        Ok(())
    }
}

/// Next dense index for a store holding `len` entries.
///
/// `u32::MAX` is the placeholder handle and is never issued.
fn next_index(len: usize, kind: &str) -> Result<u32, SolverError> {
    u32::try_from(len)
        .ok()
        .filter(|&index| index != u32::MAX)
        .ok_or_else(|| SolverError::SolverSpecific(format!("{kind} limit of {} reached", u32::MAX)))
}

impl Solver for Model {
    fn create_variable(
        &mut self,
        var_type: VarType,
        lower: f64,
        upper: f64,
        name: &str,
    ) -> Result<VariableId, SolverError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(SolverError::InvalidVariableBounds { lower, upper });
        }

        let id = VariableId::new(next_index(self.variables.len(), "variable")?);
        self.variables.push(VariableRecord {
            var_type,
            lower,
            upper,
        });
        if !name.is_empty() {
            self.set_variable_name(id, name.to_string())?;
        }
        Ok(id)
    }

    fn add_constraint(
        &mut self,
        expr: Expr,
        sense: ComparisonSense,
        rhs: f64,
        name: &str,
    ) -> Result<ConstraintId, SolverError> {
        check_rhs(rhs)?;
        // Constants left in the expression belong on the right-hand side.
        let (terms, constant) = expr.into_parts();
        let terms = self.normalize_terms(terms)?;

        let id = ConstraintId::new(next_index(self.constraints.len(), "constraint")?);
        for (var_id, coeff) in &terms {
            self.columns.entry(*var_id).or_default().push((id, *coeff));
        }
        self.constraints.push(ConstraintRecord {
            terms,
            sense,
            rhs: rhs - constant,
        });
        if !name.is_empty() {
            self.set_constraint_name(id, name.to_string())?;
        }
        Ok(id)
    }

    fn add_indicator_constraint(
        &mut self,
        binary: VariableId,
        active_value: bool,
        expr: Expr,
        sense: ComparisonSense,
        rhs: f64,
        name: &str,
    ) -> Result<(), SolverError> {
        self.ensure_variable_exists(binary)?;
        if self.variables[binary.inner() as usize].var_type != VarType::Binary {
            return Err(SolverError::NotBinary(binary));
        }
        check_rhs(rhs)?;
        let (terms, constant) = expr.into_parts();
        let terms = self.normalize_terms(terms)?;

        self.indicators.push(IndicatorRecord {
            binary,
            active_value,
            terms,
            sense,
            rhs: rhs - constant,
            name: (!name.is_empty()).then(|| name.to_string()),
        });
        Ok(())
    }

    fn set_objective(&mut self, expr: Expr, sense: ObjectiveSense) -> Result<(), SolverError> {
        let (terms, constant) = expr.into_parts();
        let terms = self.normalize_terms(terms)?;
        self.objective = Objective {
            sense: Some(sense),
            terms,
            constant,
        };
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = sense.as_str(),
            terms = self.objective.terms.len(),
            "Set objective function"
        );
        Ok(())
    }

    fn optimize(&mut self, config: &SolverConfig) -> Result<SolverStatus, SolverError> {
        if self.variables.is_empty() {
            return Err(SolverError::EmptyModel);
        }
        if self.objective.sense.is_none() {
            return Err(SolverError::NoObjective);
        }
        tracing::debug!(
            component = "model",
            operation = "optimize",
            status = "unavailable",
            variables = self.num_variables(),
            constraints = self.num_constraints(),
            time_limit = ?config.time_limit,
            "Recording model cannot solve"
        );
        Err(SolverError::SolverNotAvailable(
            "recording model has no solving algorithm".to_string(),
        ))
    }

    fn get_attribute(&self, attribute: Attribute) -> Result<f64, SolverError> {
        match attribute {
            Attribute::NumVariables => Ok(self.num_variables() as f64),
            Attribute::NumConstraints => Ok(self.num_constraints() as f64),
            Attribute::NumNonZeros => Ok(self.num_nonzeros() as f64),
            Attribute::Value(id) => {
                self.ensure_variable_exists(id)?;
                Err(SolverError::NoSolution {
                    attribute: attribute.as_str(),
                })
            }
            Attribute::ObjectiveValue
            | Attribute::MipGap
            | Attribute::NodeCount
            | Attribute::Runtime => Err(SolverError::NoSolution {
                attribute: attribute.as_str(),
            }),
        }
    }
}
