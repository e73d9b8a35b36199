/*!
 * Data Structures
 *
 * Specialized data structures shared by the simulator:
 * - Inline strings for short process identities
 */

mod inline_string;

pub use inline_string::InlineString;
