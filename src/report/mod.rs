/*!
 * Simulation Report
 * Per-process results sorted by id, averages and CPU utilization
 */

use crate::core::types::{ProcessId, Time};
use crate::process::ProcessRecord;
use crate::scheduler::SimulationOutcome;
use serde::Serialize;
use std::fmt::Write;

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: ProcessId,
    pub arrival_time: Time,
    pub finish_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
}

/// Summary of a completed simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: Vec<ResultRow>,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub total_time: Time,
    pub idle_time: Time,
    pub cpu_utilization: f64,
}

impl Summary {
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        let mut rows: Vec<ResultRow> = outcome
            .finished
            .iter()
            .filter_map(|p| {
                let done = p.completion()?;
                Some(ResultRow {
                    id: p.id.clone(),
                    arrival_time: p.arrival_time,
                    finish_time: done.finish_time,
                    turnaround_time: done.turnaround_time,
                    waiting_time: done.waiting_time,
                })
            })
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            rows,
            average_turnaround: outcome.average_turnaround(),
            average_waiting: outcome.average_waiting(),
            total_time: outcome.total_time,
            idle_time: outcome.idle_time,
            cpu_utilization: outcome.cpu_utilization(),
        }
    }

    /// Fixed-width results table followed by the aggregate lines
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<8} {:>8} {:>8} {:>8} {:>8}",
            "PID", "AT", "FT", "TAT", "WT"
        );
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:<8} {:>8} {:>8} {:>8} {:>8}",
                row.id, row.arrival_time, row.finish_time, row.turnaround_time, row.waiting_time
            );
        }
        let _ = writeln!(out, "Average waiting time: {:.2}", self.average_waiting);
        let _ = writeln!(out, "Average turnaround time: {:.2}", self.average_turnaround);
        let _ = writeln!(out, "CPU utilization: {:.2}%", self.cpu_utilization);
        out
    }
}

/// Table of the input batch, in input order
pub fn render_input_table(processes: &[ProcessRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>6} {:>6} {:>6} {:>6} {:>8}",
        "PID", "AT", "CPU1", "IO", "CPU2", "Priority"
    );
    for p in processes {
        let _ = writeln!(
            out,
            "{:<8} {:>6} {:>6} {:>6} {:>6} {:>8}",
            p.id, p.arrival_time, p.cpu_burst_1, p.io_burst, p.cpu_burst_2, p.priority
        );
    }
    out
}
