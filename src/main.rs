use anyhow::{Context, Result};
use clap::Parser;
use lineflow::{segment_with, SegmentPolicy};
use std::io::Read;
use std::path::PathBuf;

/// Segment post text into balanced display chunks
#[derive(Parser, Debug)]
#[command(name = "lineflow", version, about)]
struct Args {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// JSON policy file overriding the default thresholds
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Emit chunks as a JSON array instead of indexed lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let policy = match &args.policy {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid policy file {}", path.display()))?
        }
        None => SegmentPolicy::default(),
    };

    let chunks = segment_with(&text, &policy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        // Indices match what a reader UI keys per-chunk state by
        for (i, chunk) in chunks.iter().enumerate() {
            println!("[{}] {}", i, chunk);
        }
    }

    Ok(())
}
