/*!
 * Simulation Statistics
 * Outcome of a run and the aggregate metrics derived from it
 */

use super::types::Slice;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use serde::{Deserialize, Serialize};

/// Result of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Completed processes, in completion order
    pub finished: Vec<ProcessRecord>,
    /// Final clock value
    pub total_time: Time,
    /// Time units in which nothing was ready to run
    pub idle_time: Time,
    /// Every dispatch, in chronological order
    pub timeline: Vec<Slice>,
    /// Dispatches that ended with the quantum exhausted
    pub preemptions: u64,
}

impl SimulationOutcome {
    /// Time units the CPU spent running a process
    #[inline]
    pub fn busy_time(&self) -> Time {
        self.total_time - self.idle_time
    }

    /// `(total - idle) / total * 100`, or 0 when no time elapsed
    pub fn cpu_utilization(&self) -> f64 {
        cpu_utilization(self.total_time, self.idle_time)
    }

    /// Mean turnaround time over finished processes (0 for an empty batch)
    pub fn average_turnaround(&self) -> f64 {
        self.mean(|p| p.turnaround_time())
    }

    /// Mean waiting time over finished processes (0 for an empty batch)
    pub fn average_waiting(&self) -> f64 {
        self.mean(|p| p.waiting_time())
    }

    /// Ids in the order they were dispatched, one entry per slice
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.timeline.iter().map(|s| s.id.as_str()).collect()
    }

    /// Finished record for `id`, if it was part of the batch
    pub fn process(&self, id: &str) -> Option<&ProcessRecord> {
        self.finished.iter().find(|p| p.id.as_str() == id)
    }

    fn mean<F>(&self, metric: F) -> f64
    where
        F: Fn(&ProcessRecord) -> Option<Time>,
    {
        if self.finished.is_empty() {
            return 0.0;
        }
        let sum: Time = self.finished.iter().filter_map(metric).sum();
        sum as f64 / self.finished.len() as f64
    }
}

/// CPU utilization percentage for a run of `total_time` units with `idle_time` idle
pub fn cpu_utilization(total_time: Time, idle_time: Time) -> f64 {
    if total_time == 0 {
        return 0.0;
    }
    (total_time - idle_time) as f64 / total_time as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization() {
        assert_eq!(cpu_utilization(0, 0), 0.0);
        assert_eq!(cpu_utilization(10, 0), 100.0);
        assert_eq!(cpu_utilization(8, 2), 75.0);
    }

    #[test]
    fn test_empty_outcome_averages() {
        let outcome = SimulationOutcome {
            finished: Vec::new(),
            total_time: 0,
            idle_time: 0,
            timeline: Vec::new(),
            preemptions: 0,
        };
        assert_eq!(outcome.average_turnaround(), 0.0);
        assert_eq!(outcome.average_waiting(), 0.0);
        assert_eq!(outcome.cpu_utilization(), 0.0);
        assert!(outcome.dispatch_order().is_empty());
    }
}
