/*!
 * Dispatch Ordering
 * Total order used to sort the ready queue before each dispatch
 */

use super::policy::ReadyOrder;
use crate::core::types::{Priority, ProcessId, Time};
use crate::process::ProcessRecord;

/// Sort key for a ready process; smaller keys run first
///
/// Field order is the comparison order: priority, arrival, rotation, id.
/// Ids are unique within a batch, so no two keys compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct DispatchKey<'a> {
    pub priority: Priority,
    pub arrival_time: Time,
    pub rotation: u32,
    pub id: &'a ProcessId,
}

impl<'a> DispatchKey<'a> {
    pub fn of(record: &'a ProcessRecord, order: ReadyOrder) -> Self {
        let rotation = match order {
            ReadyOrder::Rotating => record.dispatches(),
            ReadyOrder::Strict => 0,
        };
        Self {
            priority: record.priority,
            arrival_time: record.arrival_time,
            rotation,
            id: &record.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_dominates() {
        let urgent = ProcessRecord::new("Z", 9, 1, 0, 1, 0);
        let lazy = ProcessRecord::new("A", 0, 1, 0, 1, 3);
        assert!(DispatchKey::of(&urgent, ReadyOrder::Strict) < DispatchKey::of(&lazy, ReadyOrder::Strict));
    }

    #[test]
    fn test_arrival_then_id() {
        let early = ProcessRecord::new("B", 1, 1, 0, 1, 2);
        let late = ProcessRecord::new("A", 2, 1, 0, 1, 2);
        let twin = ProcessRecord::new("C", 1, 1, 0, 1, 2);
        let order = ReadyOrder::Strict;
        assert!(DispatchKey::of(&early, order) < DispatchKey::of(&late, order));
        assert!(DispatchKey::of(&early, order) < DispatchKey::of(&twin, order));
    }

    #[test]
    fn test_rotation_only_under_rotating_order() {
        let mut ran = ProcessRecord::new("A", 0, 4, 0, 1, 1);
        ran.run_for(2);
        let fresh = ProcessRecord::new("B", 0, 4, 0, 1, 1);

        assert!(DispatchKey::of(&fresh, ReadyOrder::Rotating) < DispatchKey::of(&ran, ReadyOrder::Rotating));
        assert!(DispatchKey::of(&ran, ReadyOrder::Strict) < DispatchKey::of(&fresh, ReadyOrder::Strict));
    }
}
