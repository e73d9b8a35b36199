/*!
 * Core Types
 * Common types used across the simulator
 */

pub use super::data_structures::InlineString;

/// Process identity, compared lexically (byte order)
pub type ProcessId = InlineString;

/// Simulated clock value in whole time units
pub type Time = u64;

/// Priority level (smaller is more urgent)
pub type Priority = i32;

/// Common result type for scheduler operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;

/// Common result type for batch loading
pub type LoadResult<T> = Result<T, super::errors::LoadError>;
