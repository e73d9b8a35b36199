/*!
 * Scheduler Types
 * Domain types for the simulation engine
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{ProcessId, Time};
use crate::process::Phase;
use serde::{Deserialize, Deserializer, Serialize};

/// Quantum used by the reference exercise
pub const DEFAULT_QUANTUM: Time = 4;

/// Time quantum configuration
///
/// Longest slice a process may hold the CPU before it is preempted.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum {
    pub units: Time,
}

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(units: Time) -> Result<Self, SchedulerError> {
        if units == 0 {
            return Err(SchedulerError::InvalidQuantum(units));
        }
        Ok(Self { units })
    }

    #[inline(always)]
    pub const fn units(&self) -> Time {
        self.units
    }

    /// Length of the next slice for a phase with `remaining` units left
    #[inline(always)]
    pub fn slice(&self, remaining: Time) -> Time {
        self.units.min(remaining)
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self {
            units: DEFAULT_QUANTUM,
        }
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            units: Time,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.units).map_err(serde::de::Error::custom)
    }
}

/// One contiguous run of a process on the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub id: ProcessId,
    pub start: Time,
    pub end: Time,
    pub phase: Phase,
}

impl Slice {
    #[inline]
    pub fn len(&self) -> Time {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
