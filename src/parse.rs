use std::path::Path;

use crate::error::{BenchError, Result};

// 0-based field positions inside a space separated log line
const DURATION_FIELD: usize = 4;
const THREADS_FIELD: usize = 0;
const TIME_FIELD: usize = 3;

/// First line of a thread-scaling trial log plus the free text line after it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSample {
    pub threads: u32,
    pub time: f64,
    pub aux: Option<String>,
}

/// Pull one duration per non-empty line out of a variant-comparison log.
/// Lines look like `<a> <b> <c> <d> <seconds>s`.
pub fn parse_durations(path: &Path, content: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let field = line.split(' ').nth(DURATION_FIELD).ok_or_else(|| {
            BenchError::parse(path, i + 1, format!("expected at least {} fields in \"{}\"", DURATION_FIELD + 1, line))
        })?;
        let raw = field.strip_suffix('s').unwrap_or(field);
        let secs = raw
            .parse::<f64>()
            .map_err(|e| BenchError::parse(path, i + 1, format!("duration \"{}\" is not a number: {}", field, e)))?;
        samples.push(secs);
    }
    Ok(samples)
}

/// Parse the first line of a thread-scaling log: `<threads> <a> <b> <time> ...`.
/// The second line is kept verbatim and never interpreted.
pub fn parse_trial(path: &Path, content: &str) -> Result<TrialSample> {
    let mut lines = content.lines();
    let first = lines.next().ok_or_else(|| BenchError::parse(path, 1, "file is empty"))?;
    let fields: Vec<&str> = first.split(' ').collect();

    let raw_threads = fields[THREADS_FIELD];
    let threads = raw_threads
        .parse::<u32>()
        .map_err(|e| BenchError::parse(path, 1, format!("thread count \"{}\" is not an integer: {}", raw_threads, e)))?;
    let raw_time = fields
        .get(TIME_FIELD)
        .ok_or_else(|| BenchError::parse(path, 1, format!("expected at least {} fields in \"{}\"", TIME_FIELD + 1, first)))?;
    let time = raw_time
        .parse::<f64>()
        .map_err(|e| BenchError::parse(path, 1, format!("time \"{}\" is not a number: {}", raw_time, e)))?;

    let aux = lines.next().map(str::to_string);
    Ok(TrialSample { threads, time, aux })
}
