use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use go_extractor::ExtractorManager;

#[derive(Parser, Debug)]
#[command(name = "go-extractor")]
#[command(about = "Export Go source trees as attributed XML, one document per package")]
struct Cli {
    /// Root directory of the Go sources
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Directory receiving the package documents (created if missing)
    #[arg(short, long)]
    target: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let (Some(source), Some(target)) = (cli.source, cli.target) else {
        // Without both directories there is nothing to do
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    };

    match run(&source, &target) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(source: &Path, target: &Path) -> Result<ExitCode> {
    let manager = ExtractorManager::new();
    let summary = manager.extract(source, target).with_context(|| {
        format!(
            "failed to extract {} into {}",
            source.display(),
            target.display()
        )
    })?;

    // failed packages are already logged by the manager
    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
