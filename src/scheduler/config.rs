/*!
 * Simulation Configuration
 *
 * Quantum and policy selection for a simulation run
 */

use super::policy::{IoCompletion, ReadyOrder};
use super::types::TimeQuantum;
use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use serde::{Deserialize, Serialize};

/// Environment variable holding the quantum
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";
/// Environment variable selecting the I/O completion policy
pub const ENV_IO_COMPLETION: &str = "SCHED_IO_COMPLETION";
/// Environment variable selecting the ready-queue order
pub const ENV_READY_ORDER: &str = "SCHED_READY_ORDER";

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Longest slice before preemption
    pub quantum: TimeQuantum,
    /// Blocked-queue release policy
    pub io_completion: IoCompletion,
    /// Ready-queue ordering among processes
    pub ready_order: ReadyOrder,
}

impl SimulationConfig {
    /// Default policies with a custom quantum
    pub fn with_quantum(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            ..Self::default()
        }
    }

    /// Reproduces the reference exercise exactly: head-only I/O release and
    /// strict id tie-breaking
    pub fn reference(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            io_completion: IoCompletion::HeadOnly,
            ready_order: ReadyOrder::Strict,
        }
    }

    pub const fn io_completion(mut self, io_completion: IoCompletion) -> Self {
        self.io_completion = io_completion;
        self
    }

    pub const fn ready_order(mut self, ready_order: ReadyOrder) -> Self {
        self.ready_order = ready_order;
        self
    }

    /// Read overrides from the process environment
    ///
    /// Environment variables:
    /// - SCHED_QUANTUM: positive integer (default: 4)
    /// - SCHED_IO_COMPLETION: full_scan | head_only (default: full_scan)
    /// - SCHED_READY_ORDER: rotating | strict (default: rotating)
    pub fn from_env() -> SchedulerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> SchedulerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_QUANTUM) {
            let units = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| SchedulerError::InvalidSetting {
                    setting: ENV_QUANTUM.into(),
                    value: raw.as_str().into(),
                })?;
            config.quantum = TimeQuantum::new(units)?;
        }
        if let Some(raw) = lookup(ENV_IO_COMPLETION) {
            config.io_completion = IoCompletion::from_str(&raw)?;
        }
        if let Some(raw) = lookup(ENV_READY_ORDER) {
            config.ready_order = ReadyOrder::from_str(&raw)?;
        }

        Ok(config)
    }
}
