use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use paint_cover::bench::{compress, verify};
use paint_cover::core::CompressorConfig;
use paint_cover::perception::load_picture;

/// Cover a `#`/`.` picture with squares and lines and print how many
/// commands it took.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Picture file: `<height> <width>` header, then one row per line
    input: PathBuf,
    /// Also print every command in PAINT_SQUARE / PAINT_LINE form
    #[arg(long, conflicts_with = "json")]
    emit: bool,
    /// Print the command list as JSON instead of the count
    #[arg(long)]
    json: bool,
    /// Re-render the commands and check they match the picture exactly
    #[arg(long)]
    verify: bool,
    /// JSON file with compressor settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CompressorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CompressorConfig::default(),
    };

    let picture = load_picture(&cli.input)
        .with_context(|| format!("reading picture {}", cli.input.display()))?;

    let out = compress(&picture.grid, &config);
    out.report.log_summary();

    if cli.verify {
        verify(&picture.grid, &out.commands).context("command list does not reproduce the picture")?;
        tracing::info!("verified");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&out.commands)?);
        return Ok(());
    }

    println!("{}", out.commands.len());
    if cli.emit {
        for cmd in &out.commands {
            println!("{}", cmd);
        }
    }

    Ok(())
}
