//! Plain-text rendering of a recorded model.
//!
//! The layout is LP-like: objective, `Subject To` rows, indicator rows,
//! `Bounds`, then `Binary` and `Integer` sections, closed by `End`. Named
//! handles print under their names; unnamed ones fall back to `x{id}` and
//! `c{id}`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use vargrid_expr::{ConstraintId, VariableId};
use vargrid_solver::{ObjectiveSense, VarType};

use crate::model::Model;

/// Failure writing a rendered model to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelWriteError {
    pub path: PathBuf,
    pub reason: String,
}

impl ModelWriteError {
    pub fn code(&self) -> &'static str {
        "MODEL_WRITE_FAILED"
    }
}

impl std::fmt::Display for ModelWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Could not write model to {}: {}",
            self.code(),
            self.path.display(),
            self.reason
        )
    }
}

impl std::error::Error for ModelWriteError {}

impl Model {
    /// Render every variable, row, indicator and the objective as text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        match self.objective.sense {
            Some(ObjectiveSense::Minimize) => out.push_str("Minimize\n"),
            Some(ObjectiveSense::Maximize) => out.push_str("Maximize\n"),
            None => out.push_str("Minimize\n"),
        }
        let mut objective = self.format_terms(&self.objective.terms);
        if self.objective.constant != 0.0 {
            let _ = write!(objective, " {}", signed(self.objective.constant));
        }
        let _ = writeln!(out, " obj: {objective}");

        out.push_str("Subject To\n");
        for (pos, row) in self.constraints.iter().enumerate() {
            let id = ConstraintId::new(pos as u32);
            let _ = writeln!(
                out,
                " {}: {} {} {}",
                self.constraint_label(id),
                self.format_terms(&row.terms),
                row.sense.symbol(),
                row.rhs
            );
        }

        if !self.indicators.is_empty() {
            out.push_str("Indicators\n");
            for (pos, ind) in self.indicators.iter().enumerate() {
                let label = ind.name.clone().unwrap_or_else(|| format!("ind{pos}"));
                let _ = writeln!(
                    out,
                    " {label}: {} = {} -> {} {} {}",
                    self.variable_label(ind.binary),
                    u8::from(ind.active_value),
                    self.format_terms(&ind.terms),
                    ind.sense.symbol(),
                    ind.rhs
                );
            }
        }

        out.push_str("Bounds\n");
        for (pos, var) in self.variables.iter().enumerate() {
            if var.var_type == VarType::Binary {
                continue;
            }
            let label = self.variable_label(VariableId::new(pos as u32));
            let line = match (var.lower.is_finite(), var.upper.is_finite()) {
                (false, false) => format!("{label} free"),
                (true, false) => format!("{label} >= {}", var.lower),
                (false, true) => format!("-inf <= {label} <= {}", var.upper),
                (true, true) if var.lower == var.upper => format!("{label} = {}", var.lower),
                (true, true) => format!("{} <= {label} <= {}", var.lower, var.upper),
            };
            let _ = writeln!(out, " {line}");
        }

        for (heading, kind) in [("Binary", VarType::Binary), ("Integer", VarType::Integer)] {
            let labels: Vec<String> = self
                .variables
                .iter()
                .enumerate()
                .filter(|(_, var)| var.var_type == kind)
                .map(|(pos, _)| self.variable_label(VariableId::new(pos as u32)))
                .collect();
            if !labels.is_empty() {
                let _ = writeln!(out, "{heading}\n {}", labels.join(" "));
            }
        }

        out.push_str("End\n");
        out
    }

    /// Write [`render`](Self::render) output to `path`, replacing any
    /// existing file.
    pub fn write_model(&self, path: impl AsRef<Path>) -> Result<(), ModelWriteError> {
        let path = path.as_ref();
        let text = self.render();
        std::fs::write(path, &text).map_err(|err| ModelWriteError {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        tracing::debug!(
            component = "model",
            operation = "write_model",
            status = "success",
            path = %path.display(),
            bytes = text.len(),
            "Wrote model"
        );
        Ok(())
    }

    fn variable_label(&self, id: VariableId) -> String {
        self.get_variable_name(id)
            .map_or_else(|| id.to_string(), ToString::to_string)
    }

    fn constraint_label(&self, id: ConstraintId) -> String {
        self.get_constraint_name(id)
            .map_or_else(|| format!("c{}", id.inner()), ToString::to_string)
    }

    fn format_terms(&self, terms: &[(VariableId, f64)]) -> String {
        if terms.is_empty() {
            return "0".to_string();
        }
        let mut rendered = String::new();
        for (pos, &(var, coeff)) in terms.iter().enumerate() {
            let label = self.variable_label(var);
            if pos > 0 {
                rendered.push(' ');
            }
            match (pos, coeff) {
                (0, c) if c == 1.0 => rendered.push_str(&label),
                (0, c) if c == -1.0 => {
                    let _ = write!(rendered, "-{label}");
                }
                (0, c) => {
                    let _ = write!(rendered, "{c} {label}");
                }
                (_, c) if c == 1.0 => {
                    let _ = write!(rendered, "+ {label}");
                }
                (_, c) if c == -1.0 => {
                    let _ = write!(rendered, "- {label}");
                }
                (_, c) => {
                    let _ = write!(rendered, "{} {label}", signed(c));
                }
            }
        }
        rendered
    }
}

fn signed(value: f64) -> String {
    if value < 0.0 {
        format!("- {}", -value)
    } else {
        format!("+ {value}")
    }
}
