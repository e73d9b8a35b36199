/*!
 * Process Module
 * Process records and their execution phases
 */

pub mod types;

// Re-export for convenience
pub use types::{Completion, Phase, ProcessRecord};
