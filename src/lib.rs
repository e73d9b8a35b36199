/*!
 * Round-Robin Scheduling Simulator Library
 * Simulates CPU, I/O, CPU process batches under quantum preemption
 */

pub mod core;
pub mod loader;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::{LoadError, ProcessId, SchedulerError, SimError, Time};
pub use loader::{load_batch, parse_batch, LoaderConfig};
pub use monitoring::init_tracing;
pub use process::{Completion, Phase, ProcessRecord};
pub use report::Summary;
pub use scheduler::{
    simulate, IoCompletion, ReadyOrder, SimulationConfig, SimulationOutcome, Simulator, Slice,
    TimeQuantum,
};
