use std::path::{Path, PathBuf};

use crate::classify::classify_path;
use crate::error::{BenchError, Result};
use crate::gen::{list_files, read_log};
use crate::keysum::{mean, BucketSums, VariantTables};
use crate::parse::{parse_durations, parse_trial};

/// Classify, parse and average every variant-comparison log.
/// Rows come back sorted by element count within each variant.
pub fn aggregate_files<P: AsRef<Path>>(files: &[P], verbosity: usize) -> Result<VariantTables> {
    let mut tables = VariantTables::new();
    for path in files {
        let path = path.as_ref();
        let (alg, elements) = classify_path(path)?;
        let content = read_log(path, verbosity)?;
        let samples = parse_durations(path, &content)?;
        let avg = mean(&samples).ok_or_else(|| BenchError::parse(path, 0, "no duration samples to average"))?;
        if verbosity > 1 {
            eprintln!("{}: {} n={} samples={} mean={}", path.display(), alg, elements, samples.len(), avg);
        }
        tables.push(alg, elements, avg);
    }
    tables.sort();
    Ok(tables)
}

/// Bucket totals of a thread-scaling run plus the unparsed second lines.
#[derive(Debug, Default)]
pub struct Collected {
    pub sums: BucketSums,
    pub aux: Vec<String>,
    pub files: usize,
}

pub fn collect_files(files: &[PathBuf], verbosity: usize) -> Result<Collected> {
    let mut out = Collected::default();
    for path in files {
        let content = read_log(path, verbosity)?;
        let trial = parse_trial(path, &content)?;
        out.sums.add(path, trial.threads, trial.time)?;
        if verbosity > 1 {
            eprintln!("{}: threads={} time={}", path.display(), trial.threads, trial.time);
        }
        if let Some(aux) = trial.aux {
            out.aux.push(aux);
        }
        out.files += 1;
    }
    Ok(out)
}

/// Every regular file in `dir` is one trial.
pub fn collect_dir(dir: &Path, verbosity: usize) -> Result<Collected> {
    let files = list_files(dir, verbosity)?;
    if verbosity > 0 {
        eprintln!("found {} trial files in {}", files.len(), dir.display());
    }
    collect_files(&files, verbosity)
}
