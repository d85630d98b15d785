//! Per-stage timing and resident-memory tracking.
//!
//! A [`MemoryProbe`] wraps each model-building stage, recording how long it
//! took and how much the process RSS moved. RSS is best-effort: when the
//! process table cannot be read the sample still carries its duration.

use std::time::{Duration, Instant};
use sysinfo::System;

/// Resident set size of this process at one instant.
#[derive(Debug, Clone, Copy)]
pub struct MemorySnapshot {
    /// Resident set size in bytes
    pub rss_bytes: u64,
    pub taken_at: Instant,
}

/// Errors produced by memory instrumentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    ProcessNotFound { pid: u32 },
}

impl MemoryError {
    pub fn code(&self) -> &'static str {
        match self {
            MemoryError::ProcessNotFound { .. } => "MEMORY_PROCESS_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryError::ProcessNotFound { pid } => {
                write!(f, "[{}] Failed to locate process {}", self.code(), pid)
            }
        }
    }
}

impl std::error::Error for MemoryError {}

impl MemorySnapshot {
    /// Read the current RSS of this process.
    ///
    /// # Errors
    ///
    /// Returns an error if the current process cannot be located.
    pub fn capture() -> Result<Self, MemoryError> {
        let pid = sysinfo::Pid::from(std::process::id() as usize);

        // Refresh only this process's memory counters
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            sysinfo::ProcessesToUpdate::Some(&[pid]),
            true,
            sysinfo::ProcessRefreshKind::nothing().with_memory(),
        );

        let process = sys.process(pid).ok_or(MemoryError::ProcessNotFound {
            pid: std::process::id(),
        })?;

        Ok(MemorySnapshot {
            rss_bytes: process.memory(),
            taken_at: Instant::now(),
        })
    }

    /// RSS growth since `earlier`, negative when memory was released.
    pub fn delta_since(&self, earlier: &Self) -> i64 {
        self.rss_bytes as i64 - earlier.rss_bytes as i64
    }
}

/// Measurement of one completed stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSample {
    pub stage: &'static str,
    pub duration: Duration,
    pub rss_before: Option<u64>,
    pub rss_after: Option<u64>,
}

impl StageSample {
    /// RSS change across the stage, when both ends were captured.
    pub fn rss_delta(&self) -> Option<i64> {
        match (self.rss_before, self.rss_after) {
            (Some(before), Some(after)) => Some(after as i64 - before as i64),
            _ => None,
        }
    }
}

fn rss_now(stage: &'static str) -> Option<u64> {
    match MemorySnapshot::capture() {
        Ok(snapshot) => Some(snapshot.rss_bytes),
        Err(err) => {
            tracing::debug!(
                component = "memory",
                operation = "capture",
                status = "error",
                stage,
                error_code = err.code(),
                "RSS unavailable"
            );
            None
        }
    }
}

/// Collects a [`StageSample`] per measured stage, in order.
#[derive(Debug, Default)]
pub struct MemoryProbe {
    samples: Vec<StageSample>,
    track_rss: bool,
}

impl MemoryProbe {
    /// Probe that records durations and RSS.
    pub fn new() -> Self {
        MemoryProbe {
            samples: Vec::new(),
            track_rss: true,
        }
    }

    /// Probe that records durations only.
    pub fn timing_only() -> Self {
        MemoryProbe::default()
    }

    /// Run `f` as stage `stage` and record its sample.
    pub fn measure<T>(&mut self, stage: &'static str, f: impl FnOnce() -> T) -> T {
        let rss_before = if self.track_rss { rss_now(stage) } else { None };
        let started = Instant::now();
        let out = f();
        let duration = started.elapsed();
        let rss_after = if self.track_rss { rss_now(stage) } else { None };

        let sample = StageSample {
            stage,
            duration,
            rss_before,
            rss_after,
        };
        tracing::debug!(
            component = "memory",
            operation = "measure",
            status = "success",
            stage,
            duration_ms = duration.as_secs_f64() * 1000.0,
            rss_delta = ?sample.rss_delta(),
            "Stage measured"
        );
        self.samples.push(sample);
        out
    }

    /// All recorded samples in stage order.
    pub fn samples(&self) -> &[StageSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<StageSample> {
        self.samples
    }

    /// Sum of all stage durations.
    pub fn total_duration(&self) -> Duration {
        self.samples.iter().map(|sample| sample.duration).sum()
    }

    /// Highest RSS seen at any stage boundary.
    pub fn peak_rss(&self) -> Option<u64> {
        self.samples
            .iter()
            .flat_map(|sample| [sample.rss_before, sample.rss_after])
            .flatten()
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_snapshot_capture() {
        let snapshot = MemorySnapshot::capture().unwrap_or_else(|err| panic!("{}", err));
        assert!(snapshot.rss_bytes > 0);
    }

    #[test]
    fn test_snapshot_delta() {
        let now = Instant::now();
        let before = MemorySnapshot {
            rss_bytes: 1000,
            taken_at: now,
        };
        let after = MemorySnapshot {
            rss_bytes: 1500,
            taken_at: now,
        };
        assert_eq!(after.delta_since(&before), 500);
        assert_eq!(before.delta_since(&after), -500);
    }

    #[test]
    fn test_sample_delta_requires_both_ends() {
        let mut sample = StageSample {
            stage: "build",
            duration: Duration::from_millis(3),
            rss_before: Some(10),
            rss_after: Some(4),
        };
        assert_eq!(sample.rss_delta(), Some(-6));
        sample.rss_after = None;
        assert_eq!(sample.rss_delta(), None);
    }

    #[test]
    fn test_probe_records_stages_in_order() {
        let mut probe = MemoryProbe::new();
        let value = probe.measure("first", || 41 + 1);
        probe.measure("second", || ());

        assert_eq!(value, 42);
        let stages: Vec<_> = probe.samples().iter().map(|s| s.stage).collect();
        assert_eq!(stages, vec!["first", "second"]);
        assert!(probe.peak_rss().is_some());
        assert!(probe.samples()[0].rss_delta().is_some());
    }

    #[test]
    fn test_timing_only_probe_skips_rss() {
        let mut probe = MemoryProbe::timing_only();
        probe.measure("stage", || std::thread::sleep(Duration::from_millis(1)));
        assert_eq!(probe.samples()[0].rss_before, None);
        assert!(probe.total_duration() >= Duration::from_millis(1));
        assert_eq!(probe.peak_rss(), None);
    }
}
