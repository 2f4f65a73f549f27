//! Squad Report
//!
//! Finds the newest squad export in a folder, scores every player for every
//! role and writes a self-contained HTML report next to it.
//!
//! Usage: squad-report [--folder <path>] [--debug] [--config <file>]

use anyhow::{Context, Result};
use clap::Parser;
use squad_role_toolkit::config::AppConfig;
use squad_role_toolkit::logging::init_logging;
use squad_role_toolkit::pipeline::{self, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squad-report")]
#[command(about = "Score a squad export against every tactical role")]
struct Cli {
    /// Folder to scan for the newest export
    #[arg(short, long, env = "SQUAD_EXPORT_FOLDER")]
    folder: Option<PathBuf>,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file (default: squad_report.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report path (default: <folder>/fm_analysis_<timestamp>.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the score matrix as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Formation templates file (default: built-in formations)
    #[arg(long)]
    formations: Option<PathBuf>,

    /// Number of formations to suggest
    #[arg(long)]
    top: Option<usize>,

    /// Only fill formation slots with players listed for that position
    #[arg(long)]
    position_eligibility: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(folder) = cli.folder {
        config.export_folder = folder;
    }
    if cli.debug {
        config.debug_logging = true;
    }
    if let Some(top) = cli.top {
        config.top_formations = top;
    }
    if let Some(formations) = cli.formations {
        config.formations_file = Some(formations);
    }
    if cli.position_eligibility {
        config.position_eligibility = true;
    }
    config.validate().context("Invalid configuration")?;

    init_logging(&config.log_settings());
    log::debug!("Configuration: {:?}", config);

    let options = RunOptions {
        output: cli.output,
        csv: cli.csv,
    };
    let summary = pipeline::run(&config, &options)?;
    print!("{}", summary);
    Ok(())
}
