//! Generate command - convert a matrix and emit info records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;

use chipgen::{GenerateSummary, Generator, GeneratorConfig};

pub fn run(
    matrix: PathBuf,
    output: Option<PathBuf>,
    deps_root: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !matrix.exists() {
        return Err(format!("File not found: {}", matrix.display()).into());
    }

    let generator = Generator::with_config(GeneratorConfig {
        deps_root,
        ..Default::default()
    });

    let summary = match &output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            let summary = generator.generate(&matrix, &mut writer)?;
            writer.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            generator.generate(&matrix, &mut lock)?
        }
    };

    // Status goes to stderr so piped record output stays clean.
    eprintln!(
        "{} {} parts ({} skipped)",
        "Generated".green().bold(),
        summary.emitted.to_string().white().bold(),
        summary.skipped
    );

    if let Some(path) = output {
        eprintln!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    if verbose {
        print_details(&summary);
    }

    Ok(())
}

fn print_details(summary: &GenerateSummary) {
    eprintln!();
    eprintln!("{}", "Families:".yellow().bold());
    for (family, count) in &summary.families {
        eprintln!("  {:12} {}", family, count);
    }
    eprintln!();
    eprintln!(
        "Source: {} ({} bytes, {})",
        summary.source.file, summary.source.size_bytes, summary.source.hash
    );
}
