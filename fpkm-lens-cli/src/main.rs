use anyhow::Context;
use clap::Parser;
use fpkm_lens_common::{Config, FpkmLensError};
use fpkm_lens_core::{
    analyze, build_histogram, plot_histogram, print_analysis, print_column_summary,
    print_preview, summarize_column, GeneTable, DEFAULT_NUMBERS, DEFAULT_OUTPUT,
    DEFAULT_THRESHOLD,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fpkm-lens",
    version,
    about = "Analyze gene expression data from a CSV file"
)]
struct Cli {
    /// Path to the input CSV file (e.g. brca_head500_genes.csv)
    #[arg(short, long)]
    input: String,
    /// Output image file; .svg renders vector, anything else raster
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,
}

fn init_tracing() {
    // RUST_LOG overrides; stdout stays reserved for results
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    println!("\n Part 1:");
    print_analysis(&analyze(&DEFAULT_NUMBERS, DEFAULT_THRESHOLD));

    println!("\n Part 2:");
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring config {}: {e}", Config::config_path().display());
        Config::default()
    });

    match run(&cli, &config) {
        Ok(()) => {
            println!("\n End of fpkm-lens run\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            if let Some(
                FpkmLensError::InputNotFound(_)
                | FpkmLensError::InputUnreadable { .. }
                | FpkmLensError::InputMalformed { .. }
                | FpkmLensError::TooManyFields { .. },
            ) = e.downcast_ref::<FpkmLensError>()
            {
                eprintln!("Skipping histogram: no table was loaded.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let table = GeneTable::load(Path::new(&cli.input))?;
    print_preview(&table, config.display.preview_rows);

    let column = &config.plot.column;
    let values = table
        .numeric_column(column)
        .with_context(|| format!("plotting column '{column}'"))?;
    let output = Path::new(&cli.output);
    let bins = build_histogram(&values, config.plot.bins);
    plot_histogram(&bins, output, &config.plot)
        .with_context(|| format!("plotting column '{column}'"))?;
    print_column_summary(&summarize_column(column, &values, table.row_count()));
    println!("{:<10} {}", "Bins:", bins.len());
    println!("\n✅ Histogram saved as '{}'", output.display());
    Ok(())
}
