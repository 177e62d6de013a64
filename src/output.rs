use std::fs::{self, File};
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use prettytable::{format, Cell, Row, Table};

use crate::classify::Algorithm;
use crate::error::{BenchError, Result};
use crate::gen::fmt_g;
use crate::keysum::{AggregateRow, BucketMean, VariantTables};

pub const CSV_HEADER: [&str; 2] = ["elements", "time"];

pub const PLOT_SIZE: (u32, u32) = (1200, 900);

/// Write `elements,time` rows to `path`, replacing whatever was there.
/// The parent directory must already exist.
pub fn write_csv(path: &Path, rows: &[AggregateRow]) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(CSV_HEADER)?;
    for r in rows {
        wtr.write_record([r.elements.to_string(), fmt_g(r.time)])?;
    }
    wtr.flush().map_err(|e| BenchError::io(path, e))?;
    Ok(())
}

/// One `<out_dir>/<variant>.csv` per variant, empty variants included.
pub fn write_variant_csvs(out_dir: &Path, tables: &VariantTables, verbosity: usize) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(Algorithm::ALL.len());
    for alg in Algorithm::ALL {
        let path = out_dir.join(format!("{}.csv", alg));
        write_csv(&path, tables.rows(alg))?;
        if verbosity > 0 {
            eprintln!("wrote {} rows to {}", tables.rows(alg).len(), path.display());
        }
        written.push(path);
    }
    Ok(written)
}

fn plot_err<E: std::fmt::Display>(e: E) -> BenchError {
    BenchError::Plot(e.to_string())
}

/// Line plot of threads (x) against mean time (y) with mesh grid lines, as SVG text.
pub fn render_svg(means: &[BucketMean], size: (u32, u32)) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let x_max = means.iter().map(|m| m.threads).max().unwrap_or(1) as f64;
        let y_max = means.iter().map(|m| m.time).fold(0.0f64, f64::max);
        let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..x_max + 1.0, 0f64..y_top)
            .map_err(plot_err)?;
        chart
            .configure_mesh()
            .x_desc("threads")
            .y_desc("time (s)")
            .draw()
            .map_err(plot_err)?;
        chart
            .draw_series(LineSeries::new(means.iter().map(|m| (m.threads as f64, m.time)), BLUE.stroke_width(2)))
            .map_err(plot_err)?;
        root.present().map_err(plot_err)?;
    }
    Ok(svg)
}

pub fn write_plot(path: &Path, means: &[BucketMean]) -> Result<()> {
    let svg = render_svg(means, PLOT_SIZE)?;
    fs::write(path, svg).map_err(|e| BenchError::io(path, e))
}

fn plain_table(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t)).collect()));
    table
}

pub fn variant_table(tables: &VariantTables) -> Table {
    let mut table = plain_table(&["algorithm", "elements", "time"]);
    for alg in Algorithm::ALL {
        for r in tables.rows(alg) {
            table.add_row(Row::new(vec![
                Cell::new(alg.tag()),
                Cell::new(&r.elements.to_string()),
                Cell::new(&fmt_g(r.time)),
            ]));
        }
    }
    table
}

pub fn bucket_table(means: &[BucketMean]) -> Table {
    let mut table = plain_table(&["threads", "trials", "time"]);
    for m in means {
        table.add_row(Row::new(vec![
            Cell::new(&m.threads.to_string()),
            Cell::new(&m.trials.to_string()),
            Cell::new(&fmt_g(m.time)),
        ]));
    }
    table
}
