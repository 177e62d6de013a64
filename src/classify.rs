use std::fmt;
use std::path::Path;

use crate::error::{BenchError, Result};
use crate::gen::strip_compress_ext;

/// Implementation variant a log file was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Plain,
    Auto,
    Avx,
}

impl Algorithm {
    /// Output order of the per-variant tables.
    pub const ALL: [Algorithm; 3] = [Algorithm::Plain, Algorithm::Auto, Algorithm::Avx];

    pub fn from_tag(tag: &str) -> Option<Algorithm> {
        match tag {
            "plain" => Some(Algorithm::Plain),
            "auto" => Some(Algorithm::Auto),
            "avx" => Some(Algorithm::Avx),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Plain => "plain",
            Algorithm::Auto => "auto",
            Algorithm::Avx => "avx",
        }
    }

    /// Slot of this variant in fixed-size per-variant arrays.
    pub fn index(self) -> usize {
        match self {
            Algorithm::Plain => 0,
            Algorithm::Auto => 1,
            Algorithm::Avx => 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Split `<algorithm>_<ignored>_<elements>.txt` into its variant and element count.
/// Only the file name is looked at, the directory part may contain anything.
pub fn classify_path(path: &Path) -> Result<(Algorithm, u64)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BenchError::parse(path, 0, "file name is missing or not UTF8"))?;
    let name = strip_compress_ext(name);
    let tokens: Vec<&str> = name.split('_').collect();

    let alg = Algorithm::from_tag(tokens[0]).ok_or_else(|| BenchError::key(path, tokens[0]))?;

    let raw_count = tokens
        .get(2)
        .ok_or_else(|| BenchError::parse(path, 0, format!("expected <algorithm>_<name>_<elements>.txt but found \"{}\"", name)))?;
    let raw_count = raw_count.strip_suffix(".txt").unwrap_or(raw_count);
    let elements = raw_count
        .parse::<u64>()
        .map_err(|e| BenchError::parse(path, 0, format!("element count \"{}\" is not an integer: {}", raw_count, e)))?;
    Ok((alg, elements))
}
