/*!
 * Scheduler Policies
 * I/O completion and ready-queue ordering policies
 */

use crate::core::errors::SchedulerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How blocked processes are released once their I/O completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoCompletion {
    /// Release every blocked process whose I/O has completed, keeping the
    /// relative order of the rest
    #[default]
    FullScan,
    /// Release only from the head of the blocked queue, stopping at the
    /// first process still in I/O
    HeadOnly,
}

impl IoCompletion {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, SchedulerError> {
        match s.trim().to_lowercase().as_str() {
            "full_scan" | "fullscan" | "full" | "scan" => Ok(Self::FullScan),
            "head_only" | "headonly" | "head" => Ok(Self::HeadOnly),
            _ => Err(SchedulerError::InvalidSetting {
                setting: "io_completion".into(),
                value: s.into(),
            }),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullScan => "full_scan",
            Self::HeadOnly => "head_only",
        }
    }
}

/// How equal-priority, equal-arrival processes share the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyOrder {
    /// Priority, arrival, slices received, id. A preempted process sorts
    /// behind peers that have had fewer slices, so equals take turns.
    #[default]
    Rotating,
    /// Priority, arrival, id. The lowest id keeps the CPU among equals.
    Strict,
}

impl ReadyOrder {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, SchedulerError> {
        match s.trim().to_lowercase().as_str() {
            "rotating" | "rotate" | "round_robin" | "rr" => Ok(Self::Rotating),
            "strict" | "priority" | "prio" => Ok(Self::Strict),
            _ => Err(SchedulerError::InvalidSetting {
                setting: "ready_order".into(),
                value: s.into(),
            }),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rotating => "rotating",
            Self::Strict => "strict",
        }
    }
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(IoCompletion);
string_serde!(ReadyOrder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_completion_parsing() {
        assert_eq!(IoCompletion::from_str("full_scan").unwrap(), IoCompletion::FullScan);
        assert_eq!(IoCompletion::from_str("HEAD_ONLY").unwrap(), IoCompletion::HeadOnly);
        assert!(IoCompletion::from_str("sometimes").is_err());
    }

    #[test]
    fn test_ready_order_parsing() {
        assert_eq!(ReadyOrder::from_str("rotating").unwrap(), ReadyOrder::Rotating);
        assert_eq!(ReadyOrder::from_str(" strict ").unwrap(), ReadyOrder::Strict);
        assert!(matches!(
            ReadyOrder::from_str("fifo"),
            Err(SchedulerError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&IoCompletion::HeadOnly).unwrap();
        assert_eq!(json, "\"head_only\"");
        let order: ReadyOrder = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(order, ReadyOrder::Strict);
        assert!(serde_json::from_str::<ReadyOrder>("\"lifo\"").is_err());
    }
}
