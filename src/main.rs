//! Command-line renderer for reactance charts.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use reactance_chart::circuits::Network;
use reactance_chart::io::{write_curve_csv, ChartDocument};
use reactance_chart::render::SvgSink;

/// Renders a log-log reactance chart to SVG.
#[derive(Parser, Debug)]
#[command(name = "reactance-chart")]
#[command(version)]
#[command(about = "Draws a reactance chart with an optional RLC impedance overlay")]
struct Args {
    /// TOML chart document with optional [chart], [page] and overlay sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// SVG output path
    #[arg(short, long, default_value = "reactance_chart.svg")]
    output: PathBuf,

    /// Frequency decades across (overrides the document)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    columns: Option<u32>,

    /// Resistance decades up (overrides the document)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,

    /// Draw the grid only
    #[arg(long)]
    no_overlay: bool,

    /// Also write the sampled overlay curve as CSV
    #[arg(long)]
    curve_csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = "info";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    // Defaults, then the document, then command-line overrides.
    let mut document = match &args.config {
        Some(path) => ChartDocument::load(path)?,
        None => ChartDocument {
            overlay: Some(Network::reference_overlay()),
            ..ChartDocument::default()
        },
    };
    if let Some(columns) = args.columns {
        document.chart.major_columns = columns;
    }
    if let Some(rows) = args.rows {
        document.chart.major_rows = rows;
    }
    if args.no_overlay {
        document.overlay = None;
    }

    let chart = document.chart()?;
    let file = BufWriter::new(File::create(&args.output)?);
    let sink = SvgSink::new(file, document.page.clone(), &chart.viewport())?;
    chart.render(sink)?;
    info!(path = %args.output.display(), "wrote svg");

    if let Some(path) = &args.curve_csv {
        match chart.overlay_curves()? {
            Some(curves) => {
                write_curve_csv(BufWriter::new(File::create(path)?), &curves.samples)?;
                info!(path = %path.display(), samples = curves.len(), "wrote curve csv");
            }
            None => warn!("no overlay to export; skipping curve csv"),
        }
    }
    Ok(())
}
