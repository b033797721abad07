//! tplot: terminal scatter plots from whitespace-delimited columns.
//!
//! Run: `seq 1 50 | awk '{print $1, sin($1/5)}' | tplot -k 2`

// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tplot::config::{parse_columns, FileConfig, PlotConfig};
use tplot::data::{ColumnSelection, InputSource};
use tplot::output::{ColorMode, TerminalEncoder};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "tplot")]
#[command(version)]
#[command(about = "Plot numeric columns as a colored ASCII scatter plot", long_about = None)]
struct Cli {
    /// Comma-separated 1-based columns to plot, one series each
    #[arg(short = 'k', value_name = "COLS")]
    columns: String,

    /// 1-based column holding per-point labels
    #[arg(short = 'b', value_name = "COL")]
    label_column: Option<usize>,

    /// Grid size as H or H,W [default: 13,100]
    #[arg(short = 's', value_name = "H[,W]")]
    size: Option<String>,

    /// Fixed y-axis bounds as MIN,MAX
    #[arg(short = 'y', value_name = "MIN,MAX", allow_hyphen_values = true)]
    y_range: Option<String>,

    /// Comma-separated legend text, one per series
    #[arg(short = 'l', value_name = "NAMES")]
    legends: Option<String>,

    /// YAML file with default size, range and color settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (also honored via NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Input file; omit or use '-' for stdin
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let mut selection = ColumnSelection::new(parse_columns(&cli.columns)?)?;
    if let Some(col) = cli.label_column {
        selection = selection.with_labels(col)?;
    }

    let source = InputSource::from_arg(cli.file.as_deref());
    debug!(?source, columns = ?selection.columns(), "reading input");
    let data = source.load(&selection).with_context(|| match &source {
        InputSource::Stdin => "failed to read standard input".to_string(),
        InputSource::File(path) => format!("failed to read {}", path.display()),
    })?;

    if let Some(labels) = &data.labels {
        info!(count = labels.len(), "loaded point labels");
    }

    let frame = config.scatter(&data.matrix).build()?.render()?;
    TerminalEncoder::new()
        .mode(config.color)
        .print(&frame)
        .context("failed to write plot")?;
    Ok(())
}

/// Defaults, then the config file, then CLI flags.
fn resolve_config(cli: &Cli) -> Result<PlotConfig> {
    let mut config = PlotConfig::default();

    if let Some(path) = &cli.config {
        let file = FileConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        config = config.with_file(&file)?;
    }
    if let Some(spec) = &cli.size {
        config = config.with_size_spec(spec)?;
    }
    if let Some(spec) = &cli.y_range {
        config = config.with_range_spec(spec)?;
    }
    if let Some(spec) = &cli.legends {
        config = config.with_legend_spec(spec);
    }
    if cli.no_color || no_color_env() {
        config = config.with_color(ColorMode::Plain);
    }

    debug!(?config, "resolved configuration");
    Ok(config)
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
