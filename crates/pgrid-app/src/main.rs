// ABOUTME: Main application entry point.
// ABOUTME: Replays a script of grid commands and prints the resulting layout.

mod app;
mod commands;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pgrid_core::GridConfig;

use app::App;
use commands::parse_line;

#[derive(Debug, Parser)]
#[command(name = "pane-grid", version, about = "Drive a split-pane grid from a command script")]
struct Args {
    /// Config file to use instead of ~/.config/pane-grid/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot per command instead of the text layout
    #[arg(long)]
    json: bool,

    /// Script to replay; reads standard input when omitted
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GridConfig::load_or_default(),
    };
    tracing::info!(
        "Starting pane-grid: extent={}, handle_size={}",
        config.extent,
        config.handle_size
    );

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut app = App::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let Some(command) = parse_line(&line).with_context(|| format!("line {}", number + 1))?
        else {
            continue;
        };

        tracing::debug!("Executing {:?}", command);
        app.execute(command)
            .with_context(|| format!("line {}: {}", number + 1, line.trim()))?;

        if args.json {
            serde_json::to_writer(&mut out, &app.snapshot())?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", line.trim())?;
            write!(out, "{}", app.render())?;
        }
    }

    Ok(())
}
