/*!
 * Scheduler Core Operations
 * Arrival admission, dispatch, idle steps and I/O completion
 */

use super::entry::DispatchKey;
use super::policy::{IoCompletion, ReadyOrder};
use super::stats::SimulationOutcome;
use super::types::{Slice, TimeQuantum};
use super::QueueLocation;
use crate::core::types::Time;
use crate::process::{Phase, ProcessRecord};
use std::collections::VecDeque;
use std::mem;
use tracing::{debug, trace};

/// State of one simulation run
///
/// Records live in `arena`; every queue holds arena slots. `locations`
/// tags each slot with the single collection that currently owns it.
pub(super) struct Run {
    arena: Vec<ProcessRecord>,
    locations: Vec<QueueLocation>,
    pending: Vec<usize>,
    ready: VecDeque<usize>,
    blocked: VecDeque<usize>,
    finished: Vec<usize>,
    time: Time,
    idle_time: Time,
    timeline: Vec<Slice>,
    preemptions: u64,
}

impl Run {
    pub fn new(mut processes: Vec<ProcessRecord>) -> Self {
        processes.iter_mut().for_each(ProcessRecord::reset);
        let count = processes.len();
        Self {
            arena: processes,
            locations: vec![QueueLocation::NotArrived; count],
            pending: (0..count).collect(),
            ready: VecDeque::with_capacity(count),
            blocked: VecDeque::with_capacity(count),
            finished: Vec::with_capacity(count),
            time: 0,
            idle_time: 0,
            timeline: Vec::new(),
            preemptions: 0,
        }
    }

    /// Nothing left to arrive, run or wait on
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty() && self.blocked.is_empty()
    }

    /// One step: admit arrivals, dispatch or idle, then release completed I/O
    pub fn step(&mut self, quantum: TimeQuantum, order: ReadyOrder, io: IoCompletion) {
        self.admit_arrivals();
        if !self.dispatch(quantum, order) {
            self.idle();
        }
        match io {
            IoCompletion::FullScan => self.release_completed_io(),
            IoCompletion::HeadOnly => self.release_io_head(),
        }
    }

    /// Move every process with `arrival_time <= time` from the pool to the ready queue
    fn admit_arrivals(&mut self) {
        let now = self.time;
        let arena = &self.arena;
        let (arrived, waiting): (Vec<usize>, Vec<usize>) = mem::take(&mut self.pending)
            .into_iter()
            .partition(|&slot| arena[slot].arrival_time <= now);
        self.pending = waiting;

        for slot in arrived {
            trace!(pid = %self.arena[slot].id, time = now, "admitted");
            self.relocate(slot, QueueLocation::Ready);
            self.ready.push_back(slot);
        }
    }

    /// Run the best ready process for one slice; false if nothing was ready
    fn dispatch(&mut self, quantum: TimeQuantum, order: ReadyOrder) -> bool {
        if self.ready.is_empty() {
            return false;
        }

        let arena = &self.arena;
        self.ready
            .make_contiguous()
            .sort_by_key(|&slot| DispatchKey::of(&arena[slot], order));

        let Some(slot) = self.ready.pop_front() else {
            return false;
        };
        self.relocate(slot, QueueLocation::Running);

        let start = self.time;
        let record = &mut self.arena[slot];
        let phase = record.phase();
        let slice = quantum.slice(record.remaining());
        let left = record.run_for(slice);
        self.time += slice;

        debug!(
            pid = %record.id,
            phase = phase.as_str(),
            start,
            end = self.time,
            left,
            "dispatched"
        );
        self.timeline.push(Slice {
            id: record.id.clone(),
            start,
            end: self.time,
            phase,
        });

        if left > 0 {
            self.preemptions += 1;
            self.relocate(slot, QueueLocation::Ready);
            self.ready.push_back(slot);
        } else if phase == Phase::FirstCpu {
            let ready_at = record.begin_io(self.time);
            debug!(pid = %record.id, ready_at, "blocked on I/O");
            self.relocate(slot, QueueLocation::Blocked);
            self.blocked.push_back(slot);
        } else {
            let done = record.complete(self.time);
            debug!(
                pid = %record.id,
                finish = done.finish_time,
                turnaround = done.turnaround_time,
                waiting = done.waiting_time,
                "finished"
            );
            self.relocate(slot, QueueLocation::Done);
            self.finished.push(slot);
        }

        true
    }

    /// Advance the clock one unit with the CPU idle
    fn idle(&mut self) {
        self.time += 1;
        self.idle_time += 1;
        trace!(time = self.time, "cpu idle");
    }

    /// Release every blocked process whose I/O is done, keeping the order of the rest
    fn release_completed_io(&mut self) {
        let now = self.time;
        let arena = &self.arena;
        let (completed, waiting): (VecDeque<usize>, VecDeque<usize>) = mem::take(&mut self.blocked)
            .into_iter()
            .partition(|&slot| arena[slot].io_ready_at().is_some_and(|t| t <= now));
        self.blocked = waiting;

        for slot in completed {
            self.wake(slot);
        }
    }

    /// Release from the head of the blocked queue while the head's I/O is done
    fn release_io_head(&mut self) {
        while let Some(&slot) = self.blocked.front() {
            if !self.arena[slot].io_ready_at().is_some_and(|t| t <= self.time) {
                break;
            }
            self.blocked.pop_front();
            self.wake(slot);
        }
    }

    fn wake(&mut self, slot: usize) {
        let record = &mut self.arena[slot];
        record.end_io();
        debug!(pid = %record.id, time = self.time, "I/O complete");
        self.relocate(slot, QueueLocation::Ready);
        self.ready.push_back(slot);
    }

    fn relocate(&mut self, slot: usize, to: QueueLocation) {
        let from = self.locations[slot];
        debug_assert!(
            from.can_move_to(to),
            "illegal transition {:?} -> {:?} for slot {}",
            from,
            to,
            slot
        );
        self.locations[slot] = to;
    }

    /// Move finished records out of the arena in completion order
    pub fn into_outcome(self) -> SimulationOutcome {
        let mut slots: Vec<Option<ProcessRecord>> = self.arena.into_iter().map(Some).collect();
        let finished = self
            .finished
            .iter()
            .filter_map(|&slot| slots[slot].take())
            .collect();

        SimulationOutcome {
            finished,
            total_time: self.time,
            idle_time: self.idle_time,
            timeline: self.timeline,
            preemptions: self.preemptions,
        }
    }
}
