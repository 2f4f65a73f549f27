//! Best Formations
//!
//! Prints the highest-scoring formations for the newest squad export, with
//! the selected XI for each.
//!
//! Usage: best-formations [--folder <path>] [--top <n>] [--formations <file>]

use anyhow::{Context, Result};
use clap::Parser;
use squad_role_toolkit::config::AppConfig;
use squad_role_toolkit::formation::FormationSuggestion;
use squad_role_toolkit::logging::init_logging;
use squad_role_toolkit::pipeline;
use squad_role_toolkit::report::format_score;
use squad_role_toolkit::RoleCatalog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "best-formations")]
#[command(about = "Rank formation templates against the newest squad export")]
struct Cli {
    /// Folder to scan for the newest export
    #[arg(short, long, env = "SQUAD_EXPORT_FOLDER")]
    folder: Option<PathBuf>,

    /// Configuration file (default: squad_report.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Formation templates file (default: built-in formations)
    #[arg(long)]
    formations: Option<PathBuf>,

    /// Number of formations to show
    #[arg(short = 'n', long, default_value = "5")]
    top: usize,

    /// Only fill slots with players listed for that position
    #[arg(long)]
    position_eligibility: bool,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    debug: bool,
}

fn print_formation(rank: usize, f: &FormationSuggestion, decimals: u32) {
    println!("\n#{}. {}", rank, f.name);
    println!(
        "Total: {}   Average: {}   Filled: {}/{}",
        format_score(f.total, decimals),
        format_score(f.average, decimals),
        f.filled(),
        f.assignments.len()
    );
    println!("{}", "-".repeat(56));
    println!("{:<10} {:<8} {:<28} {:>6}", "Position", "Role", "Player", "Score");
    println!("{}", "-".repeat(56));
    for a in &f.assignments {
        match (&a.player, a.score) {
            (Some(player), Some(score)) => println!(
                "{:<10} {:<8} {:<28} {:>6}",
                a.position,
                a.role,
                player,
                format_score(score, decimals)
            ),
            _ => println!("{:<10} {:<8} {:<28} {:>6}", a.position, a.role, "(unfilled)", "-"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(folder) = cli.folder {
        config.export_folder = folder;
    }
    if let Some(formations) = cli.formations {
        config.formations_file = Some(formations);
    }
    config.top_formations = cli.top;
    config.position_eligibility |= cli.position_eligibility;
    config.debug_logging |= cli.debug;
    config.validate().context("Invalid configuration")?;
    init_logging(&config.log_settings());

    let (export, analysis) = pipeline::load_and_analyze(&config, RoleCatalog::builtin())?;
    println!("Using export: {}", export.path.display());
    println!("Players: {} ({} skipped)", analysis.players.len(), analysis.rejected.len());

    if analysis.formations.is_empty() {
        println!("No formations to rank.");
        return Ok(());
    }
    println!("\nTOP {} FORMATIONS BY TOTAL SCORE", analysis.formations.len());
    println!("{}", "=".repeat(56));
    for (i, f) in analysis.formations.iter().enumerate() {
        print_formation(i + 1, f, config.score_decimals);
    }
    Ok(())
}
