/*!
 * Core Module
 * Shared types, identity strings and error handling
 */

pub mod data_structures;
pub mod errors;
pub mod types;

pub use data_structures::InlineString;
pub use errors::{LoadError, SchedulerError, SimError};
pub use types::{LoadResult, Priority, ProcessId, SchedulerResult, Time};
