use std::path::Path;

use crate::classify::Algorithm;
use crate::error::{BenchError, Result};

/// Thread counts a scaling run is bucketed into, in plot order.
pub const BUCKET_KEYS: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// Trials each bucket is expected to hold.
pub const DEFAULT_TRIALS: usize = 10;

/// Arithmetic mean, `None` for an empty sample set.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

// Aggregation record per (algorithm, element count) input file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateRow {
    pub elements: u64,
    pub time: f64,
}

/// One row table per algorithm variant, indexed by `Algorithm::index`.
#[derive(Debug, Default)]
pub struct VariantTables {
    tables: [Vec<AggregateRow>; 3],
}

impl VariantTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alg: Algorithm, elements: u64, time: f64) {
        self.tables[alg.index()].push(AggregateRow { elements, time });
    }

    /// Stable ascending sort by element count within every variant.
    pub fn sort(&mut self) {
        for t in self.tables.iter_mut() {
            sort_rows(t);
        }
    }

    pub fn rows(&self, alg: Algorithm) -> &[AggregateRow] {
        &self.tables[alg.index()]
    }

    pub fn len(&self) -> usize {
        self.tables.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn sort_rows(rows: &mut [AggregateRow]) {
    rows.sort_by_key(|r| r.elements);
}

/// What the bucket sums are divided by once every trial has been added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialDivisor {
    /// Same constant for every bucket, regardless of how many trials landed there.
    Fixed(usize),
    /// Number of trials actually added to each bucket.
    Observed,
}

impl Default for TrialDivisor {
    fn default() -> Self {
        TrialDivisor::Fixed(DEFAULT_TRIALS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketMean {
    pub threads: u32,
    pub trials: usize,
    pub time: f64,
}

/// Running time totals for the fixed thread-count buckets, slot = log2(threads).
#[derive(Debug, Default, Clone)]
pub struct BucketSums {
    sums: [f64; BUCKET_KEYS.len()],
    counts: [usize; BUCKET_KEYS.len()],
}

pub fn bucket_index(threads: u32) -> Option<usize> {
    if !threads.is_power_of_two() {
        return None;
    }
    let idx = threads.trailing_zeros() as usize;
    if idx < BUCKET_KEYS.len() { Some(idx) } else { None }
}

impl BucketSums {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trial's time to its bucket; `path` only labels the error.
    pub fn add(&mut self, path: &Path, threads: u32, time: f64) -> Result<()> {
        let idx = bucket_index(threads).ok_or_else(|| BenchError::key(path, threads.to_string()))?;
        self.sums[idx] += time;
        self.counts[idx] += 1;
        Ok(())
    }

    pub fn counts(&self) -> &[usize; BUCKET_KEYS.len()] {
        &self.counts
    }

    /// Buckets whose observed trial count differs from `trials`, as (threads, observed).
    pub fn mismatches(&self, trials: usize) -> Vec<(u32, usize)> {
        BUCKET_KEYS
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &c)| c != trials)
            .map(|(&k, &c)| (k, c))
            .collect()
    }

    pub fn means(&self, divisor: TrialDivisor) -> [BucketMean; BUCKET_KEYS.len()] {
        let mut out = [BucketMean { threads: 0, trials: 0, time: 0.0 }; BUCKET_KEYS.len()];
        for (i, slot) in out.iter_mut().enumerate() {
            let div = match divisor {
                TrialDivisor::Fixed(n) => n,
                TrialDivisor::Observed => self.counts[i],
            };
            // an empty bucket keeps its zero seed instead of becoming NaN
            let time = if div == 0 { 0.0 } else { self.sums[i] / div as f64 };
            *slot = BucketMean { threads: BUCKET_KEYS[i], trials: self.counts[i], time };
        }
        out
    }
}
