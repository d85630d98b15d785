//! Development tools and instrumentation for vargrid.
//!
//! - [`logging`]: installs a `tracing` subscriber configured from the environment
//! - [`memory`]: wall-clock and resident-memory probes for model-building stages

pub mod logging;
pub mod memory;

pub use logging::{LoggingError, enable_logging};
pub use memory::{MemoryError, MemoryProbe, MemorySnapshot, StageSample};
