/*!
 * Process Types
 * Process records, execution phases and completion metrics
 */

use crate::core::types::{Priority, ProcessId, Time};
use serde::{Deserialize, Serialize};

/// Execution phase of a process
///
/// Transitions are monotonic: `FirstCpu -> Io -> SecondCpu -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    FirstCpu,
    Io,
    SecondCpu,
    Done,
}

impl Phase {
    /// Whether the phase is spent on the CPU
    #[inline]
    pub const fn is_cpu(&self) -> bool {
        matches!(self, Self::FirstCpu | Self::SecondCpu)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstCpu => "first_cpu",
            Self::Io => "io",
            Self::SecondCpu => "second_cpu",
            Self::Done => "done",
        }
    }
}

/// Metrics fixed when a process finishes its second CPU burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub finish_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
}

/// One simulated process
///
/// Static attributes are public. Dynamic state (phase, remaining time, I/O
/// deadline, completion) is only advanced by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub arrival_time: Time,
    pub cpu_burst_1: Time,
    pub io_burst: Time,
    pub cpu_burst_2: Time,
    pub priority: Priority,

    phase: Phase,
    remaining: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    io_ready_at: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion: Option<Completion>,
    dispatches: u32,
}

impl ProcessRecord {
    /// Create a record in its initial state (`FirstCpu`, full first burst remaining)
    pub fn new(
        id: impl Into<ProcessId>,
        arrival_time: Time,
        cpu_burst_1: Time,
        io_burst: Time,
        cpu_burst_2: Time,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            cpu_burst_1,
            io_burst,
            cpu_burst_2,
            priority,
            phase: Phase::FirstCpu,
            remaining: cpu_burst_1,
            io_ready_at: None,
            completion: None,
            dispatches: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time left in the current phase (the second burst is preloaded during I/O)
    #[inline]
    pub fn remaining(&self) -> Time {
        self.remaining
    }

    /// Absolute time the I/O burst completes, only while in `Io`
    #[inline]
    pub fn io_ready_at(&self) -> Option<Time> {
        self.io_ready_at
    }

    /// Number of CPU slices this process has received
    #[inline]
    pub fn dispatches(&self) -> u32 {
        self.dispatches
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    #[inline]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    pub fn finish_time(&self) -> Option<Time> {
        self.completion.map(|c| c.finish_time)
    }

    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion.map(|c| c.turnaround_time)
    }

    /// Turnaround minus both CPU bursts (I/O time counts as waiting)
    pub fn waiting_time(&self) -> Option<Time> {
        self.completion.map(|c| c.waiting_time)
    }

    /// Waiting time not explained by the nominal I/O burst
    pub fn ready_wait_time(&self) -> Option<Time> {
        self.completion
            .map(|c| c.waiting_time.saturating_sub(self.io_burst))
    }

    /// Total CPU service demand across both bursts
    #[inline]
    pub fn total_cpu(&self) -> Time {
        self.cpu_burst_1 + self.cpu_burst_2
    }

    /// Rewind dynamic state to the start of the first CPU burst
    pub(crate) fn reset(&mut self) {
        self.phase = Phase::FirstCpu;
        self.remaining = self.cpu_burst_1;
        self.io_ready_at = None;
        self.completion = None;
        self.dispatches = 0;
    }

    /// Run for `slice` units of the current CPU phase, returning what is left
    pub(crate) fn run_for(&mut self, slice: Time) -> Time {
        debug_assert!(self.phase.is_cpu(), "process {} is not on a CPU phase", self.id);
        debug_assert!(slice <= self.remaining);
        self.remaining -= slice;
        self.dispatches += 1;
        self.remaining
    }

    /// Finish the first CPU burst and block for I/O until `now + io_burst`
    pub(crate) fn begin_io(&mut self, now: Time) -> Time {
        debug_assert_eq!(self.phase, Phase::FirstCpu);
        debug_assert_eq!(self.remaining, 0);
        let ready_at = now + self.io_burst;
        self.phase = Phase::Io;
        self.remaining = self.cpu_burst_2;
        self.io_ready_at = Some(ready_at);
        ready_at
    }

    /// Leave I/O and become eligible for the second CPU burst
    pub(crate) fn end_io(&mut self) {
        debug_assert_eq!(self.phase, Phase::Io);
        self.phase = Phase::SecondCpu;
        self.io_ready_at = None;
    }

    /// Finish the second CPU burst at `now` and derive the metrics
    pub(crate) fn complete(&mut self, now: Time) -> Completion {
        debug_assert_eq!(self.phase, Phase::SecondCpu);
        debug_assert_eq!(self.remaining, 0);
        let turnaround_time = now - self.arrival_time;
        let completion = Completion {
            finish_time: now,
            turnaround_time,
            waiting_time: turnaround_time - self.total_cpu(),
        };
        self.phase = Phase::Done;
        self.completion = Some(completion);
        completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_on_first_burst() {
        let p = ProcessRecord::new("P1", 3, 5, 2, 4, 1);
        assert_eq!(p.phase(), Phase::FirstCpu);
        assert_eq!(p.remaining(), 5);
        assert_eq!(p.io_ready_at(), None);
        assert_eq!(p.completion(), None);
        assert_eq!(p.total_cpu(), 9);
    }

    #[test]
    fn test_phase_progression() {
        let mut p = ProcessRecord::new("P1", 1, 3, 4, 2, 0);

        assert_eq!(p.run_for(2), 1);
        assert_eq!(p.run_for(1), 0);
        assert_eq!(p.begin_io(4), 8);
        assert_eq!(p.phase(), Phase::Io);
        assert_eq!(p.remaining(), 2);
        assert_eq!(p.io_ready_at(), Some(8));

        p.end_io();
        assert_eq!(p.phase(), Phase::SecondCpu);
        assert_eq!(p.io_ready_at(), None);

        assert_eq!(p.run_for(2), 0);
        let done = p.complete(12);
        assert_eq!(done.finish_time, 12);
        assert_eq!(done.turnaround_time, 11);
        assert_eq!(done.waiting_time, 6);
        assert_eq!(p.ready_wait_time(), Some(2));
        assert_eq!(p.dispatches(), 3);
        assert!(p.is_done());
    }

    #[test]
    fn test_phase_serialization() {
        assert_eq!(serde_json::to_string(&Phase::SecondCpu).unwrap(), "\"second_cpu\"");
        assert!(Phase::FirstCpu < Phase::Io && Phase::Io < Phase::Done);
    }
}
