/*!
 * Batch Loader
 * Parses comma-separated process records into a batch
 *
 * Record layout: `id, arrival, cpu_burst_1, io_burst, cpu_burst_2, priority`.
 * A single header line is tolerated before the first record.
 */

use crate::core::errors::LoadError;
use crate::core::types::{LoadResult, Time};
use crate::process::ProcessRecord;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Number of fields per record
pub const FIELD_COUNT: usize = 6;

/// Batch size used by the reference exercise
pub const REFERENCE_BATCH_SIZE: usize = 5;

/// Environment variable holding the expected batch size (0 disables the check)
pub const ENV_BATCH_SIZE: &str = "SCHED_BATCH_SIZE";

/// Loader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Exact number of records required, if any
    pub expected_count: Option<usize>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            expected_count: Some(REFERENCE_BATCH_SIZE),
        }
    }
}

impl LoaderConfig {
    /// Accept any number of records
    pub const fn unchecked() -> Self {
        Self {
            expected_count: None,
        }
    }

    pub const fn exactly(count: usize) -> Self {
        Self {
            expected_count: Some(count),
        }
    }

    /// Read `SCHED_BATCH_SIZE` from the environment
    pub fn from_env() -> LoadResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LoadResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENV_BATCH_SIZE) {
            None => Ok(Self::default()),
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => Ok(Self::unchecked()),
                Ok(count) => Ok(Self::exactly(count)),
                Err(_) => Err(LoadError::InvalidNumber {
                    line: 0,
                    field: ENV_BATCH_SIZE,
                    value: raw.as_str().into(),
                }),
            },
        }
    }
}

/// Read and parse a batch file
pub fn load_batch(path: impl AsRef<Path>, config: &LoaderConfig) -> LoadResult<Vec<ProcessRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    info!(path = %path.display(), bytes = text.len(), "Loaded batch file");
    parse_batch(&text, config)
}

/// Parse batch text into process records
pub fn parse_batch(text: &str, config: &LoaderConfig) -> LoadResult<Vec<ProcessRecord>> {
    let mut processes = Vec::new();
    let mut header_skipped = false;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() == FIELD_COUNT
            && processes.is_empty()
            && !header_skipped
            && fields[1].parse::<i64>().is_err()
        {
            debug!(line = line_no, "skipping header");
            header_skipped = true;
            continue;
        }
        if fields.len() != FIELD_COUNT {
            return Err(LoadError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        processes.push(parse_record(&fields, line_no)?);
    }

    if let Some(expected) = config.expected_count {
        if processes.len() != expected {
            return Err(LoadError::BatchSize {
                expected,
                found: processes.len(),
            });
        }
    }

    debug!(count = processes.len(), "Parsed batch");
    Ok(processes)
}

fn parse_record(fields: &[&str], line: usize) -> LoadResult<ProcessRecord> {
    let id = fields[0];
    if id.is_empty() {
        return Err(LoadError::InvalidNumber {
            line,
            field: "id",
            value: id.into(),
        });
    }

    Ok(ProcessRecord::new(
        id,
        parse_field::<Time>(fields[1], "arrival", line)?,
        parse_field::<Time>(fields[2], "cpu_burst_1", line)?,
        parse_field::<Time>(fields[3], "io_burst", line)?,
        parse_field::<Time>(fields[4], "cpu_burst_2", line)?,
        parse_field(fields[5], "priority", line)?,
    ))
}

fn parse_field<T: FromStr>(raw: &str, field: &'static str, line: usize) -> LoadResult<T> {
    raw.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: raw.into(),
    })
}
