use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tracing::{info, warn};

use jsx_element_type::cli;
use jsx_element_type::discovery::discover_files;
use jsx_element_type::logging::{self, Verbosity};
use jsx_element_type::output::OutputFormatter;
use jsx_element_type::{ElementScanner, ElementTypeResolver};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let settings = args.resolve_settings()?;
    let scanner = ElementScanner::new(ElementTypeResolver::new(settings));

    let files = discover_files(&args.path, args.include_node_modules)
        .with_context(|| format!("Cannot discover files in {}", args.path.display()))?;
    info!(count = files.len(), path = %args.path.display(), "scanning files");

    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        match scanner.scan_file(file, args.language) {
            Ok(result) => results.push(result),
            Err(e) if args.path.is_dir() => {
                warn!(file = %file.display(), error = %e, "skipping file");
            }
            Err(e) => return Err(e).with_context(|| format!("Cannot scan {}", file.display())),
        }
    }

    let output = OutputFormatter::format(&results, args.format)?;
    match &args.output_file {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Cannot write output file: {}", path.display()))?,
        None => println!("{}", output.trim_end()),
    }

    Ok(())
}
