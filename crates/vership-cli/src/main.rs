//! Vership - versioned release deployment
//!
//! Usage:
//!   vership deploy --version 3

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vership_core::config::ConfigStore;
use vership_core::deploy::{DeployEvent, Deployer};
use vership_core::error::DeployError;

#[derive(Parser)]
#[command(name = "vership")]
#[command(about = "Versioned release deployment", long_about = None)]
struct Cli {
    /// Working directory holding vership.toml and the release tree
    /// (defaults to the current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a specific version of the configured project
    Deploy {
        /// Release version to deploy (must be at least 1)
        #[arg(long)]
        version: u32,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vership=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                // usage problems share the validation exit code
                _ => ExitCode::from(1),
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("could not determine working directory")?,
    };
    tracing::debug!(root = %root.display(), "resolved working directory");

    match cli.command {
        Commands::Deploy { version } => run_deploy(&root, version),
    }
}

fn run_deploy(root: &Path, version: u32) -> anyhow::Result<()> {
    println!("Starting deploy of version {version}");

    let config = ConfigStore::new(root).load().map_err(DeployError::from)?;
    let deployer = Deployer::new(root, config.settings);

    let outcome = deployer.deploy_with_progress(version, &mut render_event)?;

    println!(
        "{} version {} is now current ({})",
        style("Deployed").green().bold(),
        outcome.version,
        outcome.dir_name
    );
    Ok(())
}

fn render_event(event: &DeployEvent) {
    match event {
        DeployEvent::AlreadyPresent { dir_name } => {
            println!("Release already present: {dir_name}");
        }
        DeployEvent::Downloading { url } => {
            println!("Starting download: {}", style(url).cyan());
        }
        DeployEvent::Downloaded => println!("Download finished"),
        DeployEvent::Extracting { archive_name } => {
            println!("Extracting archive: {archive_name}");
        }
        DeployEvent::Activating { dir_name } => {
            println!("Setting {dir_name} to current");
        }
    }
}

/// One exit code per failure stage: 1 validation, 2 config, 3 fetch,
/// 4 extract, 5 activate, 6 lock.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let Some(err) = err.downcast_ref::<DeployError>() else {
        return ExitCode::from(2);
    };
    let code = match err {
        DeployError::InvalidVersion(_) => 1,
        DeployError::Config(_) => 2,
        DeployError::Fetch(_) => 3,
        DeployError::Extract(_) => 4,
        DeployError::Activate(_) => 5,
        DeployError::Lock(_) => 6,
    };
    ExitCode::from(code)
}
