use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use template_index::{ValidatorConfig, default_index_path, validate_index_file};

#[derive(Parser, Debug)]
#[command(name = "validate-index", version)]
/// Validate a template index and the image files it references.
struct Cli {
    /// Index JSON. Defaults to `index.json` next to this executable.
    #[arg(long = "index")]
    index_path: Option<PathBuf>,

    /// Keep checking after an invalid template and report every failing one.
    #[arg(long)]
    collect_all: bool,

    /// Accept integer literals for mask_aspect_ratio, brightness and contrast.
    #[arg(long)]
    allow_integer_floats: bool,

    /// Log debug events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let index_path = match cli.index_path {
        Some(path) => path,
        None => default_index_path().context("locate index next to executable")?,
    };
    let cfg = ValidatorConfig::for_index(&index_path)
        .with_strict_floats(!cli.allow_integer_floats)
        .with_fail_fast(!cli.collect_all);

    // Diagnostics are part of the tool's output contract and go to stdout; logs go to stderr.
    let report = match validate_index_file(&index_path, &cfg) {
        Ok(report) => report,
        Err(err) => {
            println!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if !report.is_valid() {
        for failure in &report.failures {
            println!("{failure}");
        }
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!(
        templates = report.templates.len(),
        index = %index_path.display(),
        "index validated"
    );
    println!("Index validated successfully");
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
