//! Bowing posture analysis over a recorded or piped landmark stream.
//!
//! Reads one JSON object per line:
//! `{"shoulder":{"x":0.5,"y":0.3},"elbow":{...},"wrist":null,"set_reference":false}`
//! and writes one JSON frame report per line to stdout.

use anyhow::{Context, Result};
use bowing_posture::{
    config::{Config, EXAMPLE_CONFIG},
    pipeline::PostureAnalyzer,
    stream::process_stream,
};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark stream (JSON lines), "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log per-approach accuracy when the stream ends
    #[arg(short, long)]
    summary: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            Config::from_file(path).with_context(|| format!("Failed to load config {path}"))?
        }
        None => Config::default(),
    };

    let mut analyzer = PostureAnalyzer::new(&config).context("Invalid configuration")?;

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input).with_context(|| format!("Failed to open {}", args.input))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stream = process_stream(&mut analyzer, reader, &mut out).context("Failed to process landmark stream")?;

    if args.summary {
        info!(
            "Processed {} frames ({} lines skipped, {} calibrations)",
            stream.frames, stream.skipped_lines, stream.calibrations
        );
        for entry in analyzer.accuracy().summary() {
            info!(
                "Accuracy ({}): {:.1}% over {} frames",
                entry.approach,
                entry.accuracy * 100.0,
                entry.frames
            );
        }
        if let Some(stats) = analyzer.trajectory().stats() {
            info!(
                "Wrist spread {:.4}, path length {:.4} over last {} points",
                stats.spread,
                stats.path_length,
                analyzer.trajectory().len()
            );
        }
    }

    Ok(())
}
