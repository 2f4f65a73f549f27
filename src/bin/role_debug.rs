//! Role Debug Utility
//!
//! Shows how one player's role scores are built up, tier by tier, for
//! spot-checking role weights against the game.
//!
//! Usage: role-debug --player "<name>" [--role CDD,BPDD] [--folder <path>]

use anyhow::{bail, Context, Result};
use clap::Parser;
use squad_role_toolkit::config::AppConfig;
use squad_role_toolkit::logging::init_logging;
use squad_role_toolkit::normalize::{self, NormalizedPlayer};
use squad_role_toolkit::report::{display_category, format_score};
use squad_role_toolkit::roles::{RoleDefinition, KEY_WEIGHT};
use squad_role_toolkit::scoring::{self, RoleScore};
use squad_role_toolkit::{loader, RoleCatalog, Thresholds};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "role-debug")]
#[command(about = "Per-tier breakdown of a player's role scores")]
struct Cli {
    /// Player name as it appears in the export
    #[arg(short, long)]
    player: String,

    /// Role codes to show (default: the player's best roles)
    #[arg(short, long, value_delimiter = ',')]
    role: Vec<String>,

    /// Number of best roles shown when no --role is given
    #[arg(long, default_value = "5")]
    best: usize,

    /// Folder to scan for the newest export
    #[arg(short, long, env = "SQUAD_EXPORT_FOLDER")]
    folder: Option<PathBuf>,

    /// Configuration file (default: squad_report.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    debug: bool,
}

fn print_tier(label: &str, attrs: &[&str], player: &NormalizedPlayer) {
    if attrs.is_empty() {
        return;
    }
    let cells: Vec<String> = attrs
        .iter()
        .map(|a| {
            let value = player.value(a).map(|v| format!("{:.1}", v)).unwrap_or_else(|| "?".into());
            let mark = if player.is_observed(a) { "" } else { "*" };
            format!("{}={}{}", a, value, mark)
        })
        .collect();
    println!("  {:<10} {}", label, cells.join("  "));
}

fn print_role(
    role: &RoleDefinition,
    player: &NormalizedPlayer,
    thresholds: &Thresholds,
    decimals: u32,
) {
    let b = scoring::breakdown(player, role);
    let score = b.score();
    println!("\n{} - {}", role.code, role.name);
    print_tier("key x5", role.key, player);
    print_tier("imp x3", role.important, player);
    print_tier("useful x1", role.useful, player);
    println!(
        "  sums: key {:.1}  important {:.1}  useful {:.1}  weighted {:.1} / {}",
        b.key_sum,
        b.important_sum,
        b.useful_sum,
        b.weighted_total(),
        b.applied_weight
    );
    println!(
        "  observed {} of {} attributes (role weight {})",
        b.observed,
        b.referenced,
        role.total_weight()
    );
    match score {
        RoleScore::Scored(v) => println!(
            "  score {} ({})",
            format_score(v, decimals),
            display_category(score, thresholds, decimals).label()
        ),
        RoleScore::Undefined => println!(
            "  score undefined: {}",
            b.undefined_reason().unwrap_or("insufficient data")
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(folder) = cli.folder {
        config.export_folder = folder;
    }
    config.debug_logging |= cli.debug;
    config.validate().context("Invalid configuration")?;
    init_logging(&config.log_settings());

    let catalog = RoleCatalog::builtin();
    let thresholds = config.classifier_thresholds()?;
    let export = loader::load_latest(&config.export_folder, &config.output_prefix)?;
    let batch = normalize::normalize_batch(&export.table.records, &config.normalizer_config())?;

    let wanted = cli.player.trim();
    let Some(player) = batch
        .players
        .iter()
        .find(|p| p.name == wanted)
        .or_else(|| batch.players.iter().find(|p| p.name.eq_ignore_ascii_case(wanted)))
    else {
        bail!("Player '{}' not found in {}", wanted, export.path.display());
    };

    println!("=== {} ===", player.name);
    println!("Export:    {}", export.path.display());
    println!("Position:  {}", player.position);
    println!(
        "Missing:   {} attributes{} (shown with *, imputed as {})",
        player.missing,
        if player.degraded { ", degraded" } else { "" },
        config.missing_default
    );
    println!("Weights:   key x{}, then x3 and x1", KEY_WEIGHT);

    let roles: Vec<&RoleDefinition> = if cli.role.is_empty() {
        let mut scored: Vec<(&RoleDefinition, f64)> = catalog
            .roles()
            .iter()
            .filter_map(|r| scoring::score(player, r).value().map(|v| (r, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().take(cli.best).map(|(r, _)| r).collect()
    } else {
        cli.role
            .iter()
            .map(|code| {
                catalog
                    .get(code)
                    .with_context(|| format!("Unknown role '{}'", code))
            })
            .collect::<Result<_>>()?
    };

    for role in roles {
        print_role(role, player, &thresholds, config.score_decimals);
    }
    Ok(())
}
