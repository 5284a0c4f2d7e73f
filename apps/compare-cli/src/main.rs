//! Compare two plain-text documents and print the JSON report.
//!
//! Usage: compare <file-a> <file-b> [label-a] [label-b]
//!
//! Labels default to the file paths. Text extraction from binary formats is
//! out of scope; inputs must already be plain text.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use comparison_engine::ComparisonEngine;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comparison_engine=info,compare=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 4 {
        bail!("usage: compare <file-a> <file-b> [label-a] [label-b]");
    }

    let path_a = Path::new(&args[0]);
    let path_b = Path::new(&args[1]);
    let label_a = args.get(2).cloned().unwrap_or_else(|| args[0].clone());
    let label_b = args.get(3).cloned().unwrap_or_else(|| args[1].clone());

    let text_a = fs::read_to_string(path_a)
        .with_context(|| format!("failed to read {}", path_a.display()))?;
    let text_b = fs::read_to_string(path_b)
        .with_context(|| format!("failed to read {}", path_b.display()))?;

    info!(%label_a, %label_b, "comparing documents");
    let engine = ComparisonEngine::new();
    let report = engine.compare(&text_a, &text_b, &label_a, &label_b)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
