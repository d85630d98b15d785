//! Solver run options.

use serde::{Deserialize, Serialize};

/// Configuration options applied to a backend before `optimize`.
///
/// Every field is optional; `None` leaves the backend default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Time limit in seconds.
    pub time_limit: Option<f64>,
    /// Relative MIP gap tolerance.
    pub mip_gap: Option<f64>,
    /// Number of threads to use.
    pub threads: Option<u32>,
    /// Emit solver output.
    pub verbose: Option<bool>,
    /// Stop after this many feasible solutions.
    pub solution_limit: Option<u32>,
    /// Stop after exploring this many branch-and-bound nodes.
    pub node_limit: Option<f64>,
    /// Presolve aggressiveness level.
    pub presolve: Option<u32>,
    /// Backend-specific algorithm selector.
    pub method: Option<u32>,
    /// Feasibility tolerance.
    pub tolerance: Option<f64>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quick feasibility check: one minute, 10% gap, single thread, quiet.
    pub fn quick() -> Self {
        Self::new()
            .with_time_limit(60.0)
            .with_mip_gap(0.1)
            .with_threads(1)
            .with_verbose(false)
    }

    /// High-precision solve: one hour, tight gap, verbose.
    pub fn precise() -> Self {
        Self::new()
            .with_time_limit(3600.0)
            .with_mip_gap(1e-6)
            .with_verbose(true)
    }

    /// Performance runs: no limits, quiet, aggressive presolve.
    pub fn performance() -> Self {
        Self::new().with_verbose(false).with_presolve(1)
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Set the relative MIP gap tolerance.
    pub fn with_mip_gap(mut self, gap: f64) -> Self {
        self.mip_gap = Some(gap);
        self
    }

    /// Set the number of threads.
    pub fn with_threads(mut self, count: u32) -> Self {
        self.threads = Some(count);
        self
    }

    /// Enable or disable solver output.
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = Some(enabled);
        self
    }

    /// Set the solution-count limit.
    pub fn with_solution_limit(mut self, limit: u32) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    /// Set the node limit.
    pub fn with_node_limit(mut self, limit: f64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Set the presolve level.
    pub fn with_presolve(mut self, level: u32) -> Self {
        self.presolve = Some(level);
        self
    }

    /// Set the algorithm selector.
    pub fn with_method(mut self, method: u32) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the feasibility tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = Some(tol);
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
