use std::error::Error;
use std::io::Write;
use std::time::Instant;

use benchagg::cli::get_aggregate_cli;
use benchagg::output::{variant_table, write_variant_csvs};
use benchagg::pipeline::aggregate_files;

fn main() {
    if let Err(err) = _main() {
        eprintln!("error: {}", &err);
        std::process::exit(1);
    }
}

fn _main() -> Result<(), Box<dyn Error>> {
    let cfg = get_aggregate_cli()?;
    let verbose = cfg.verbose as usize;
    let start_f = Instant::now();

    let tables = aggregate_files(&cfg.files, verbose)?;
    write_variant_csvs(&cfg.out_dir, &tables, verbose)?;

    if cfg.table {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        variant_table(&tables).print(&mut writer)?;
        writer.flush()?;
    }
    if verbose > 0 {
        eprintln!("files: {}  rows: {}  time: {:.3}", cfg.files.len(), tables.len(), start_f.elapsed().as_secs_f64());
    }
    Ok(())
}
