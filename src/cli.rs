use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lazy_static::lazy_static;

use crate::keysum::{TrialDivisor, DEFAULT_TRIALS};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

lazy_static! {
    pub static ref BUILD_INFO: String = format!("  ver: {}  rev: {}",
        env!("CARGO_PKG_VERSION"), env!("BUILD_GIT_HASH"));
}

#[derive(Parser, Debug)]
#[command(name = "aggregate", version = BUILD_INFO.as_str(), rename_all = "kebab-case")]
/// Average per-line durations of plain/auto/avx benchmark logs into one CSV per variant.
///
/// File names must look like <algorithm>_<anything>_<elements>.txt where algorithm is
/// one of plain, auto or avx.  Every non-empty line must carry the duration in field 5
/// with a trailing "s".
pub struct AggregateCli {
    /// benchmark log files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    #[arg(short = 'o', long = "out_dir", default_value = "results")]
    /// directory receiving plain.csv, auto.csv and avx.csv - must already exist
    pub out_dir: PathBuf,
    #[arg(short = 't', long = "table")]
    /// print the aggregated rows as a table on stdout
    pub table: bool,
    #[arg(short = 'v', action = ArgAction::Count)]
    /// Verbosity - use more than one v for greater detail
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(name = "collect_output", version = BUILD_INFO.as_str(), rename_all = "kebab-case")]
/// Average OpenMP thread-scaling trials per thread count and plot them as SVG.
///
/// Every file in DIR is one trial whose first line reads
/// "<threads> <anything> <anything> <time> ...".  Thread counts must be one of
/// 1, 2, 4, 8, 16 or 32.
pub struct CollectCli {
    /// directory holding one log file per trial
    pub dir: PathBuf,
    #[arg(short = 'o', long = "output", default_value = "times.svg")]
    /// plot file to write
    pub output: PathBuf,
    #[arg(long = "trials", default_value_t = DEFAULT_TRIALS)]
    /// number every bucket total is divided by
    pub trials: usize,
    #[arg(long = "observed", conflicts_with = "trials")]
    /// divide each bucket by the number of trials actually found for it
    pub observed: bool,
    #[arg(short = 't', long = "table")]
    /// print the bucket means as a table on stdout
    pub table: bool,
    #[arg(short = 'v', action = ArgAction::Count)]
    /// Verbosity - use more than one v for greater detail
    pub verbose: u8,
}

impl CollectCli {
    pub fn divisor(&self) -> TrialDivisor {
        if self.observed {
            TrialDivisor::Observed
        } else {
            TrialDivisor::Fixed(self.trials)
        }
    }
}

pub fn get_aggregate_cli() -> Result<AggregateCli> {
    let cfg = AggregateCli::parse();
    if cfg.verbose == 1 {
        eprintln!("CLI options: {:?}", cfg);
    } else if cfg.verbose > 1 {
        eprintln!("CLI options: {:#?}", cfg);
    }
    Ok(cfg)
}

pub fn get_collect_cli() -> Result<CollectCli> {
    let cfg = CollectCli::parse();
    validate_collect(&cfg)?;
    if cfg.verbose == 1 {
        eprintln!("CLI options: {:?}", cfg);
    } else if cfg.verbose > 1 {
        eprintln!("CLI options: {:#?}", cfg);
    }
    Ok(cfg)
}

fn validate_collect(cfg: &CollectCli) -> Result<()> {
    if cfg.trials == 0 {
        Err("--trials must be 1 or greater")?;
    }
    if cfg.dir.as_os_str().is_empty() {
        Err("input directory must not be empty")?;
    }
    Ok(())
}
