//! Post-processing of benchmark logs.
//!
//! `aggregate` turns plain/auto/avx variant logs into one sorted CSV per variant;
//! `collect_output` averages OpenMP thread-scaling trials into fixed power-of-two
//! buckets and plots them.

pub mod classify;
pub mod cli;
pub mod error;
pub mod gen;
pub mod keysum;
pub mod output;
pub mod parse;
pub mod pipeline;

pub use error::{BenchError, Result};
