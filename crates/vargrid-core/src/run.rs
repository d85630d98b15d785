//! Build-then-solve orchestration.
//!
//! A model is written once as a [`ModelBuilder`]: variables, constraints,
//! objective, and optional configuration. [`solve`] runs those phases in
//! order against any [`Solver`], optimizes, and folds the outcome into a
//! [`SolveResult`]. Every `BuildError` raised along the way ends up in the
//! result instead of being returned.

use std::time::Instant;

use serde::Serialize;
use vargrid_solver::{Attribute, Solver, SolverConfig, SolverStatus};
use vargrid_tools::{MemoryProbe, StageSample};

use crate::error::BuildError;

/// Phases of a model, implemented per model and run by [`solve`].
pub trait ModelBuilder<S: Solver + ?Sized> {
    fn create_variables(&mut self, solver: &mut S) -> Result<(), BuildError>;

    fn add_constraints(&mut self, solver: &mut S) -> Result<(), BuildError>;

    fn set_objective(&mut self, solver: &mut S) -> Result<(), BuildError>;

    /// Last chance to adjust the backend or the run options before `optimize`.
    fn configure(&mut self, _solver: &mut S, _config: &mut SolverConfig) -> Result<(), BuildError> {
        Ok(())
    }

    /// Build into `solver` and optimize with `config`.
    fn solve(&mut self, solver: &mut S, config: &SolverConfig) -> SolveResult {
        solve(self, solver, config)
    }
}

/// Timing of one orchestration phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub name: &'static str,
    pub duration_seconds: f64,
    /// Resident memory change across the phase, when it could be read.
    pub rss_delta_bytes: Option<i64>,
}

impl From<&StageSample> for StageReport {
    fn from(sample: &StageSample) -> Self {
        Self {
            name: sample.stage,
            duration_seconds: sample.duration.as_secs_f64(),
            rss_delta_bytes: sample.rss_delta(),
        }
    }
}

/// Outcome of [`solve`].
///
/// `success` means every phase ran and `optimize` returned a status, which
/// may still be infeasible. Solution figures are only filled in when the
/// status carries a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    pub success: bool,
    pub status: Option<SolverStatus>,
    pub objective: Option<f64>,
    pub gap: Option<f64>,
    pub node_count: Option<f64>,
    /// Wall-clock seconds for the whole run, build phases included.
    pub runtime_seconds: f64,
    /// Phase that failed, if any.
    pub failed_stage: Option<&'static str>,
    pub error_code: Option<&'static str>,
    pub error_message: Option<String>,
    pub stages: Vec<StageReport>,
}

impl SolveResult {
    pub fn is_optimal(&self) -> bool {
        self.status.is_some_and(SolverStatus::is_optimal)
    }

    pub fn has_solution(&self) -> bool {
        self.status.is_some_and(SolverStatus::has_solution)
    }

    /// Status label, `"error"` when no status was reached.
    pub fn status_label(&self) -> &'static str {
        self.status.map_or("error", SolverStatus::as_str)
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status: {}", self.status_label())?;
        if let Some(objective) = self.objective {
            write!(f, " Objective: {objective}")?;
        }
        if let Some(gap) = self.gap {
            write!(f, " Gap: {gap}")?;
        }
        write!(f, " Runtime: {:.3}s", self.runtime_seconds)?;
        if let Some(message) = &self.error_message {
            write!(f, " Error: {message}")?;
        }
        Ok(())
    }
}

type StageFailure = (&'static str, BuildError);

fn run_stages<S, B>(
    builder: &mut B,
    solver: &mut S,
    config: &SolverConfig,
    probe: &mut MemoryProbe,
) -> Result<SolverStatus, StageFailure>
where
    S: Solver + ?Sized,
    B: ModelBuilder<S> + ?Sized,
{
    probe
        .measure("create_variables", || builder.create_variables(solver))
        .map_err(|err| ("create_variables", err))?;
    probe
        .measure("add_constraints", || builder.add_constraints(solver))
        .map_err(|err| ("add_constraints", err))?;
    probe
        .measure("set_objective", || builder.set_objective(solver))
        .map_err(|err| ("set_objective", err))?;

    let mut effective = config.clone();
    probe
        .measure("configure", || builder.configure(solver, &mut effective))
        .map_err(|err| ("configure", err))?;

    probe
        .measure("optimize", || solver.optimize(&effective))
        .map_err(|err| ("optimize", BuildError::from(err)))
}

/// Run every phase of `builder` against `solver`, then optimize.
pub fn solve<S, B>(builder: &mut B, solver: &mut S, config: &SolverConfig) -> SolveResult
where
    S: Solver + ?Sized,
    B: ModelBuilder<S> + ?Sized,
{
    let started = Instant::now();
    let mut probe = MemoryProbe::new();
    let outcome = run_stages(builder, solver, config, &mut probe);
    let stages: Vec<StageReport> = probe.samples().iter().map(StageReport::from).collect();
    let runtime_seconds = started.elapsed().as_secs_f64();

    match outcome {
        Ok(status) => {
            let node_count = solver.get_attribute(Attribute::NodeCount).ok();
            let (objective, gap) = if status.has_solution() {
                (
                    solver.get_attribute(Attribute::ObjectiveValue).ok(),
                    solver.get_attribute(Attribute::MipGap).ok(),
                )
            } else {
                (None, None)
            };
            tracing::debug!(
                component = "run",
                operation = "solve",
                status = "success",
                solver_status = status.as_str(),
                objective = ?objective,
                runtime_seconds,
                "Solve finished"
            );
            SolveResult {
                success: true,
                status: Some(status),
                objective,
                gap,
                node_count,
                runtime_seconds,
                failed_stage: None,
                error_code: None,
                error_message: None,
                stages,
            }
        }
        Err((stage, err)) => {
            tracing::error!(
                component = "run",
                operation = "solve",
                status = "error",
                stage,
                error_code = err.code(),
                error = %err,
                "Solve failed"
            );
            SolveResult {
                success: false,
                status: None,
                objective: None,
                gap: None,
                node_count: None,
                runtime_seconds,
                failed_stage: Some(stage),
                error_code: Some(err.code()),
                error_message: Some(err.to_string()),
                stages,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use crate::table::VariableTable;
    use crate::{VariableFactory, constraints, indices, try_sum};
    use vargrid_solver::{ObjectiveSense, VarType};

    crate::table_key! {
        enum Var { X }
    }

    struct Tiny {
        vars: VariableTable<Var>,
        fail_in_constraints: bool,
    }

    impl Tiny {
        fn new(fail_in_constraints: bool) -> Self {
            Self {
                vars: VariableTable::new(),
                fail_in_constraints,
            }
        }
    }

    impl ModelBuilder<Model> for Tiny {
        fn create_variables(&mut self, solver: &mut Model) -> Result<(), BuildError> {
            let x = VariableFactory::default().create(
                solver,
                VarType::Continuous,
                0.0,
                1.0,
                "x",
                &[3],
            )?;
            self.vars.set(Var::X, x);
            Ok(())
        }

        fn add_constraints(&mut self, solver: &mut Model) -> Result<(), BuildError> {
            let n = if self.fail_in_constraints { 4 } else { 3 };
            let x = self.vars.get(Var::X)?;
            constraints::at_most_one(solver, &[indices(n)], |idx| {
                Ok::<_, BuildError>(x.at(idx)?)
            })?;
            Ok(())
        }

        fn set_objective(&mut self, solver: &mut Model) -> Result<(), BuildError> {
            let x = self.vars.get(Var::X)?;
            let objective = try_sum(&[indices(3)], |idx| x.at(idx))?;
            solver.set_objective(objective, ObjectiveSense::Maximize)?;
            Ok(())
        }
    }

    #[test]
    fn recording_backend_reports_unavailable_solver() {
        let mut model = Model::new();
        let result = Tiny::new(false).solve(&mut model, &SolverConfig::quick());

        assert!(!result.success);
        assert_eq!(result.failed_stage, Some("optimize"));
        assert_eq!(result.error_code, Some("SOLVER_NOT_AVAILABLE"));
        assert_eq!(result.status_label(), "error");
        assert_eq!(result.stages.len(), 5);
        assert_eq!(model.num_constraints(), 1);
    }

    #[test]
    fn build_errors_are_captured_with_their_stage() {
        let mut model = Model::new();
        let result = solve(&mut Tiny::new(true), &mut model, &SolverConfig::default());

        assert!(!result.success);
        assert_eq!(result.failed_stage, Some("add_constraints"));
        assert_eq!(result.error_code, Some("INDEX_OUT_OF_RANGE"));
        assert!(
            result
                .error_message
                .as_deref()
                .is_some_and(|msg| msg.starts_with("[INDEX_OUT_OF_RANGE]"))
        );
        let names: Vec<_> = result.stages.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["create_variables", "add_constraints"]);
    }

    #[test]
    fn result_serializes_to_json() {
        let mut model = Model::new();
        let result = Tiny::new(false).solve(&mut model, &SolverConfig::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["failed_stage"], "optimize");
        assert_eq!(json["stages"][0]["name"], "create_variables");
        assert!(result.to_string().starts_with("Status: error"));
    }
}
