//! Check command - dry-run the conversion and report a summary.

use std::io;
use std::path::PathBuf;

use colored::Colorize;

use chipgen::{Generator, GeneratorConfig};

pub fn run(
    matrix: PathBuf,
    deps_root: PathBuf,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !matrix.exists() {
        return Err(format!("File not found: {}", matrix.display()).into());
    }

    let generator = Generator::with_config(GeneratorConfig {
        deps_root,
        ..Default::default()
    });

    // Full pipeline, records discarded: this surfaces every fatal
    // condition (malformed cells, unknown families) a generate run would.
    let summary = generator.generate(&matrix, &mut io::sink())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} parts convert cleanly ({} skipped)",
        "OK".green().bold(),
        summary.emitted.to_string().white().bold(),
        summary.skipped
    );

    println!();
    println!("{}", "Families:".yellow().bold());
    for (family, count) in &summary.families {
        println!("  {:12} {}", family, count);
    }

    if verbose {
        println!();
        println!("Source: {}", summary.source.path.display());
        println!("  size  {} bytes", summary.source.size_bytes);
        println!("  hash  {}", summary.source.hash);
        println!("  rows  {}", summary.source.row_count);
        println!("  cols  {}", summary.source.column_count);
    }

    Ok(())
}
