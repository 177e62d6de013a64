use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{BenchError, Result};

// significant digits used by C's "%g"
const G_PRECISION: usize = 6;

const COMPRESSED_EXT: [&str; 4] = [".gz", ".tgz", ".zst", ".zstd"];

// Unified decompression/open helper.
// Handles plain files and the compression extensions benchmark runners tend to leave behind.
pub fn open_decompress(path: &Path, verbosity: usize) -> Result<Box<dyn Read>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    match ext.as_str() {
        "gz" | "tgz" => {
            if verbosity > 2 { eprintln!("opening gzip file {}", path.display()); }
            Ok(Box::new(GzDecoder::new(BufReader::new(file))))
        }
        "zst" | "zstd" => {
            if verbosity > 2 { eprintln!("opening zstd file {}", path.display()); }
            let dec = zstd::stream::read::Decoder::new(file).map_err(|e| BenchError::io(path, e))?;
            Ok(Box::new(dec))
        }
        _ => {
            if verbosity > 3 { eprintln!("opening plain file {}", path.display()); }
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Read a whole log file into memory, decompressing on the way if needed.
pub fn read_log(path: &Path, verbosity: usize) -> Result<String> {
    let mut rdr = open_decompress(path, verbosity)?;
    let mut content = String::with_capacity(1024);
    rdr.read_to_string(&mut content).map_err(|e| BenchError::io(path, e))?;
    Ok(content)
}

/// Drop one trailing compression suffix so `plain_x_10.txt.gz` classifies like `plain_x_10.txt`.
pub fn strip_compress_ext(name: &str) -> &str {
    for ext in COMPRESSED_EXT {
        if let Some(stripped) = name.strip_suffix(ext) {
            return stripped;
        }
    }
    name
}

/// Regular files directly inside `dir`, sorted by path.
pub fn list_files(dir: &Path, verbosity: usize) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir).map_err(|e| BenchError::io(dir, e))? {
        let entry = entry.map_err(|e| BenchError::io(dir, e))?;
        let path = entry.path();
        let ft = entry.file_type().map_err(|e| BenchError::io(&path, e))?;
        if ft.is_dir() {
            if verbosity > 0 { eprintln!("skipping directory {}", path.display()); }
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Format a float the way C's `%g` does: 6 significant digits, trailing zeros
/// removed, exponent form when the exponent is below -4 or at least 6.
pub fn fmt_g(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }
    // rounding to the precision first decides the exponent, e.g. 999999.7 -> 1e+06
    let sci = format!("{:.*e}", G_PRECISION - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= G_PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (G_PRECISION as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
