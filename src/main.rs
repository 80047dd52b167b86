use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use termlot::input::{add_columns, parse_columns};
use termlot::{load_config, load_config_from, Encoding, Size};

/// Plot numeric columns on the terminal
#[derive(Parser, Debug)]
#[command(name = "termlot", version, about)]
struct Cli {
    /// Input file with one or more numeric columns (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Glyph encoding: ascii, braille, dot or density
    #[arg(short, long)]
    encoding: Option<Encoding>,

    /// Plot width: auto, full or a number of cells
    #[arg(short = 'W', long)]
    width: Option<Size>,

    /// Plot height: auto, full or a number of cells
    #[arg(short = 'H', long)]
    height: Option<Size>,

    /// Title shown above the plot
    #[arg(short, long)]
    title: Option<String>,

    /// Label shown below the x axis
    #[arg(short, long)]
    xlabel: Option<String>,

    /// Series options, once per series in column order, e.g. "r-" or "c:"
    #[arg(short, long)]
    style: Vec<String>,

    /// Legend label, once per series
    #[arg(short, long)]
    legend: Vec<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting termlot version {}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    let mut config = config.with_env()?;
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.no_color || !io::stdout().is_terminal() {
        config.color = false;
    }
    config.apply_color();
    tracing::debug!("Effective config: {:?}", config);

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let columns = parse_columns(&input)?;
    let mut plot = config.plot();
    add_columns(&mut plot, &columns, &cli.style)?;
    if !cli.legend.is_empty() {
        plot.set_legend(cli.legend.into_iter().map(Some).collect());
    }
    if let Some(title) = cli.title {
        plot.set_title(title);
    }
    if let Some(xlabel) = cli.xlabel {
        plot.set_xlabel(xlabel);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    plot.draw(&mut out)?;
    out.flush()?;
    Ok(())
}
