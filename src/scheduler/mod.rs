/*!
 * CPU Scheduler
 * Round-robin simulation with priority ordering and quantum preemption
 */

use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use crate::monitoring::simulation_span;
use crate::process::ProcessRecord;
use ahash::AHashSet;
use tracing::info;

mod config;
mod entry;
mod operations;
mod policy;
mod stats;
mod types;

pub use config::{SimulationConfig, ENV_IO_COMPLETION, ENV_QUANTUM, ENV_READY_ORDER};
pub use policy::{IoCompletion, ReadyOrder};
pub use stats::{cpu_utilization, SimulationOutcome};
pub use types::{Slice, TimeQuantum, DEFAULT_QUANTUM};

use operations::Run;

/// Location of a process during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueLocation {
    NotArrived,
    Ready,
    Running,
    Blocked,
    Done,
}

impl QueueLocation {
    const fn can_move_to(self, to: QueueLocation) -> bool {
        matches!(
            (self, to),
            (Self::NotArrived, Self::Ready)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Blocked)
                | (Self::Running, Self::Done)
                | (Self::Blocked, Self::Ready)
        )
    }
}

/// CPU scheduling simulator
///
/// Each call to [`Simulator::run`] owns its queues; a simulator can be shared
/// and reused across batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate a batch to completion
    ///
    /// Records are rewound to their initial state first, so the outcome
    /// depends only on their static attributes.
    pub fn run(&self, processes: Vec<ProcessRecord>) -> SchedulerResult<SimulationOutcome> {
        validate(&processes)?;

        let SimulationConfig {
            quantum,
            io_completion,
            ready_order,
        } = self.config;

        let span = simulation_span(processes.len(), quantum.units());
        let _entered = span.enter();

        info!(
            processes = processes.len(),
            quantum = quantum.units(),
            io_completion = io_completion.as_str(),
            ready_order = ready_order.as_str(),
            "Starting simulation"
        );

        let mut run = Run::new(processes);
        while !run.is_drained() {
            run.step(quantum, ready_order, io_completion);
        }
        let outcome = run.into_outcome();

        span.record("total_time", outcome.total_time);
        span.record("idle_time", outcome.idle_time);
        info!(
            total_time = outcome.total_time,
            idle_time = outcome.idle_time,
            dispatches = outcome.timeline.len(),
            preemptions = outcome.preemptions,
            "Simulation complete"
        );

        Ok(outcome)
    }
}

/// Simulate `processes` with the default policies and the given quantum
pub fn simulate(processes: Vec<ProcessRecord>, quantum: u64) -> SchedulerResult<SimulationOutcome> {
    let quantum = TimeQuantum::new(quantum)?;
    Simulator::new(SimulationConfig::with_quantum(quantum)).run(processes)
}

/// Check the preconditions the engine relies on: positive CPU bursts, unique ids
pub fn validate(processes: &[ProcessRecord]) -> SchedulerResult<()> {
    let mut seen = AHashSet::with_capacity(processes.len());
    for process in processes {
        if process.cpu_burst_1 == 0 {
            return Err(SchedulerError::InvalidBurst {
                id: process.id.clone(),
                burst: 1,
            });
        }
        if process.cpu_burst_2 == 0 {
            return Err(SchedulerError::InvalidBurst {
                id: process.id.clone(),
                burst: 2,
            });
        }
        if !seen.insert(process.id.as_str()) {
            return Err(SchedulerError::DuplicateIdentity(process.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Phase;

    fn proc(id: &str, arrival: u64, cpu1: u64, io: u64, cpu2: u64, priority: i32) -> ProcessRecord {
        ProcessRecord::new(id, arrival, cpu1, io, cpu2, priority)
    }

    #[test]
    fn test_single_process() {
        let outcome = simulate(vec![proc("P1", 0, 4, 2, 2, 1)], 4).unwrap();

        assert_eq!(outcome.total_time, 8);
        assert_eq!(outcome.idle_time, 2);
        let p = &outcome.finished[0];
        assert_eq!(p.phase(), Phase::Done);
        assert_eq!(p.finish_time(), Some(8));
        assert_eq!(p.turnaround_time(), Some(8));
        assert_eq!(p.waiting_time(), Some(2));
        assert_eq!(p.ready_wait_time(), Some(0));
    }

    #[test]
    fn test_empty_batch() {
        let outcome = simulate(Vec::new(), 4).unwrap();
        assert!(outcome.finished.is_empty());
        assert_eq!(outcome.total_time, 0);
        assert_eq!(outcome.idle_time, 0);
        assert_eq!(outcome.cpu_utilization(), 0.0);
    }

    #[test]
    fn test_rotating_alternates_equal_peers() {
        let outcome = simulate(
            vec![proc("A", 0, 4, 3, 1, 1), proc("B", 0, 4, 3, 1, 1)],
            2,
        )
        .unwrap();

        assert_eq!(&outcome.dispatch_order()[..4], &["A", "B", "A", "B"]);
        assert!(outcome.timeline[..4].iter().all(|s| s.phase == Phase::FirstCpu));
    }

    #[test]
    fn test_strict_keeps_lowest_id() {
        let config = SimulationConfig::with_quantum(TimeQuantum::new(2).unwrap())
            .ready_order(ReadyOrder::Strict);
        let outcome = Simulator::new(config)
            .run(vec![proc("A", 0, 4, 3, 1, 1), proc("B", 0, 4, 3, 1, 1)])
            .unwrap();

        assert_eq!(&outcome.dispatch_order()[..4], &["A", "A", "B", "B"]);
    }

    #[test]
    fn test_priority_beats_arrival() {
        let outcome = simulate(
            vec![proc("slow", 0, 2, 0, 2, 5), proc("fast", 0, 2, 0, 2, 1)],
            4,
        )
        .unwrap();
        assert_eq!(outcome.dispatch_order(), vec!["fast", "fast", "slow", "slow"]);
    }

    #[test]
    fn test_idle_until_late_arrival() {
        let outcome = simulate(vec![proc("P1", 3, 1, 0, 1, 0)], 4).unwrap();
        assert_eq!(outcome.idle_time, 3);
        assert_eq!(outcome.total_time, 5);
        assert_eq!(outcome.finished[0].turnaround_time(), Some(2));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            simulate(vec![proc("P1", 0, 0, 1, 1, 0)], 4),
            Err(SchedulerError::InvalidBurst { burst: 1, .. })
        ));
        assert!(matches!(
            simulate(vec![proc("P1", 0, 1, 1, 0, 0)], 4),
            Err(SchedulerError::InvalidBurst { burst: 2, .. })
        ));
        assert!(matches!(
            simulate(vec![proc("P1", 0, 1, 1, 1, 0), proc("P1", 2, 1, 1, 1, 0)], 4),
            Err(SchedulerError::DuplicateIdentity(_))
        ));
        assert!(matches!(
            simulate(vec![proc("P1", 0, 1, 1, 1, 0)], 0),
            Err(SchedulerError::InvalidQuantum(0))
        ));
    }

    #[test]
    fn test_rerun_finished_batch() {
        let first = simulate(vec![proc("P1", 0, 3, 1, 2, 0), proc("P2", 1, 2, 2, 2, 0)], 2).unwrap();
        let second = simulate(first.finished.clone(), 2).unwrap();
        assert_eq!(first.total_time, second.total_time);
        assert_eq!(first.timeline, second.timeline);
    }

    #[test]
    fn test_location_transitions() {
        assert!(QueueLocation::NotArrived.can_move_to(QueueLocation::Ready));
        assert!(QueueLocation::Running.can_move_to(QueueLocation::Blocked));
        assert!(!QueueLocation::Blocked.can_move_to(QueueLocation::Running));
        assert!(!QueueLocation::Done.can_move_to(QueueLocation::Ready));
    }
}
