use std::error::Error;
use std::io::Write;
use std::time::Instant;

use benchagg::cli::get_collect_cli;
use benchagg::keysum::TrialDivisor;
use benchagg::output::{bucket_table, write_plot};
use benchagg::pipeline::collect_dir;

fn main() {
    if let Err(err) = _main() {
        eprintln!("error: {}", &err);
        std::process::exit(1);
    }
}

fn _main() -> Result<(), Box<dyn Error>> {
    let cfg = get_collect_cli()?;
    let verbose = cfg.verbose as usize;
    let start_f = Instant::now();

    let collected = collect_dir(&cfg.dir, verbose)?;

    let divisor = cfg.divisor();
    if let TrialDivisor::Fixed(trials) = divisor {
        for (threads, seen) in collected.sums.mismatches(trials) {
            eprintln!("warning: bucket {} threads has {} trials but its total is divided by {}", threads, seen, trials);
        }
    }
    let means = collected.sums.means(divisor);
    write_plot(&cfg.output, &means)?;

    if verbose > 0 {
        eprintln!("captured {} auxiliary lines", collected.aux.len());
    }
    if verbose > 1 {
        for line in &collected.aux {
            eprintln!("  {}", line);
        }
    }
    if cfg.table {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        bucket_table(&means).print(&mut writer)?;
        writer.flush()?;
    }
    if verbose > 0 {
        eprintln!("files: {}  plot: {}  time: {:.3}", collected.files, cfg.output.display(), start_f.elapsed().as_secs_f64());
    }
    Ok(())
}
