use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use declscan::analyze::{analyze_files, discover_java_files};
use declscan::config::load_from_path;
use declscan::logging::init_logging;
use declscan::report::{write_header, write_report};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "declscan")]
#[command(about = "List Java declarations with their line ranges", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of categories to report (class, function, field, comment)
    declarations: PathBuf,

    /// Java files, or directories to search for .java files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Number of files to analyze in parallel
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let kinds = match load_from_path(&cli.declarations) {
        Ok(kinds) => kinds,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return Ok(ExitCode::FAILURE);
        }
    };
    if kinds.is_disjoint_from_categories() {
        tracing::warn!("no requested declaration kind matches a known category");
    }

    let files = match discover_java_files(&cli.paths) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::debug!(files = files.len(), jobs = cli.jobs, "starting analysis");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for result in analyze_files(&files, &kinds, cli.jobs) {
        match result {
            Ok(report) => write_report(&mut out, &report)?,
            Err(e) => {
                write_header(&mut out, e.path())?;
                out.flush()?;
                eprintln!("{} {}", "Error:".red(), e);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
