//! Report rendering
//!
//! Produces a single self-contained HTML document (inline CSS and JS, no
//! external resources) and an optional CSV of the score matrix. The document
//! is `templates/report.html`; the structs below are its flattened view of
//! the analysis, with every score already formatted and classified.

use crate::classify::{classify, Category, Thresholds};
use crate::error::{AnalysisError, Result, ValidationError};
use crate::formation::FormationSuggestion;
use crate::normalize::NormalizedPlayer;
use crate::positions;
use crate::roles::RoleCatalog;
use crate::scoring::{round_score, RoleScore, ScoreMatrix, ScoreRow};
use askama::Template;
use std::fs;
use std::path::Path;

/// Everything the renderer needs for one document
pub struct ReportContext<'a> {
    /// Export the scores came from
    pub source: &'a Path,
    /// Generation timestamp, already formatted
    pub generated_at: &'a str,
    /// Display-only export columns (Age, Club, ...)
    pub info_columns: &'a [String],
    /// Accepted players; rows of `matrix` follow the same order
    pub players: &'a [NormalizedPlayer],
    pub matrix: &'a ScoreMatrix,
    pub catalog: &'a RoleCatalog,
    pub thresholds: &'a Thresholds,
    pub score_decimals: u32,
    pub formations: &'a [FormationSuggestion],
    pub rejected: &'a [ValidationError],
}

/// Fixed-precision text for a score
pub fn format_score(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_score(value, decimals))
}

/// Category of a score as displayed, so colour and text never disagree
pub fn display_category(score: RoleScore, thresholds: &Thresholds, decimals: u32) -> Category {
    match score {
        RoleScore::Scored(v) => classify(RoleScore::Scored(round_score(v, decimals)), thresholds),
        RoleScore::Undefined => Category::InsufficientData,
    }
}

struct FilterButton {
    code: &'static str,
    label: &'static str,
}

struct LegendEntry {
    code: &'static str,
    name: &'static str,
}

/// A coloured score cell; `role` is empty outside the role columns.
struct ScoreCell {
    role: &'static str,
    class: &'static str,
    text: String,
}

struct PlayerRow {
    name: String,
    groups: String,
    degraded: bool,
    info: Vec<String>,
    position: String,
    best: ScoreCell,
    best_role: &'static str,
    derived: Vec<String>,
    scores: Vec<ScoreCell>,
}

struct AssignmentRow {
    position: String,
    role: String,
    player: String,
    score: ScoreCell,
}

struct FormationPanel {
    rank: usize,
    name: String,
    total: String,
    average: String,
    filled: usize,
    slots: usize,
    assignments: Vec<AssignmentRow>,
    unfilled: String,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    source: String,
    generated_at: String,
    player_count: usize,
    role_count: usize,
    groups: Vec<FilterButton>,
    bands: String,
    legend_columns: Vec<Vec<LegendEntry>>,
    info_columns: Vec<String>,
    role_codes: Vec<&'static str>,
    rows: Vec<PlayerRow>,
    formations: Vec<FormationPanel>,
    rejected: Vec<String>,
    warnings: Vec<String>,
}

fn score_cell(role: &'static str, score: RoleScore, ctx: &ReportContext) -> ScoreCell {
    let category = display_category(score, ctx.thresholds, ctx.score_decimals);
    let text = match score {
        RoleScore::Scored(v) => format_score(v, ctx.score_decimals),
        RoleScore::Undefined => "insufficient data".to_string(),
    };
    ScoreCell {
        role,
        class: category.css_class(),
        text,
    }
}

fn legend_columns(catalog: &RoleCatalog) -> Vec<Vec<LegendEntry>> {
    let roles = catalog.roles();
    let half = (roles.len() + 1) / 2;
    [&roles[..half], &roles[half..]]
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|r| LegendEntry {
                    code: r.code,
                    name: r.name,
                })
                .collect()
        })
        .collect()
}

fn player_row(player: &NormalizedPlayer, row: &ScoreRow, ctx: &ReportContext) -> PlayerRow {
    let roles = ctx.catalog.roles();
    let groups: Vec<&str> = positions::groups_of(&player.positions)
        .iter()
        .map(|g| g.code())
        .collect();
    let info = ctx
        .info_columns
        .iter()
        .map(|column| {
            player
                .info
                .iter()
                .find(|(k, _)| k == column)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        })
        .collect();

    let (best, best_role) = match row.best_role {
        Some(idx) => (
            score_cell("", row.scores[idx], ctx),
            roles.get(idx).map(|r| r.code).unwrap_or(""),
        ),
        None => (score_cell("", RoleScore::Undefined, ctx), ""),
    };

    let d = &row.derived;
    PlayerRow {
        name: player.name.clone(),
        groups: groups.join(" "),
        degraded: player.degraded,
        info,
        position: player.position.clone(),
        best,
        best_role,
        derived: [d.speed, d.work, d.jumping, d.strength]
            .iter()
            .map(|v| format_score(*v, ctx.score_decimals))
            .collect(),
        scores: row
            .scores
            .iter()
            .enumerate()
            .map(|(idx, score)| {
                let code = roles.get(idx).map(|r| r.code).unwrap_or("");
                score_cell(code, *score, ctx)
            })
            .collect(),
    }
}

fn formation_panel(rank: usize, f: &FormationSuggestion, ctx: &ReportContext) -> FormationPanel {
    FormationPanel {
        rank,
        name: f.name.clone(),
        total: format_score(f.total, ctx.score_decimals),
        average: format_score(f.average, ctx.score_decimals),
        filled: f.filled(),
        slots: f.assignments.len(),
        assignments: f
            .assignments
            .iter()
            .map(|a| {
                let value = a.score.map(RoleScore::Scored).unwrap_or(RoleScore::Undefined);
                let mut score = score_cell("", value, ctx);
                if a.score.is_none() {
                    score.text.clear();
                }
                AssignmentRow {
                    position: a.position.clone(),
                    role: a.role.clone(),
                    player: a.player.clone().unwrap_or_else(|| "unfilled".to_string()),
                    score,
                }
            })
            .collect(),
        unfilled: f.unfilled().join(", "),
    }
}

/// Render the full document.
pub fn render_report(ctx: &ReportContext) -> Result<String> {
    let template = ReportTemplate {
        source: ctx.source.display().to_string(),
        generated_at: ctx.generated_at.to_string(),
        player_count: ctx.players.len(),
        role_count: ctx.catalog.len(),
        groups: positions::PositionGroup::ALL
            .iter()
            .map(|g| FilterButton {
                code: g.code(),
                label: g.label(),
            })
            .collect(),
        bands: ctx
            .thresholds
            .bands()
            .iter()
            .map(|(cutoff, c)| format!("{} \u{2265} {}", c.label(), cutoff))
            .collect::<Vec<_>>()
            .join(", "),
        legend_columns: legend_columns(ctx.catalog),
        info_columns: ctx.info_columns.to_vec(),
        role_codes: ctx
            .matrix
            .role_ids
            .iter()
            .map(|id| ctx.catalog.get(id).map(|r| r.code).unwrap_or(*id))
            .collect(),
        rows: ctx
            .players
            .iter()
            .zip(&ctx.matrix.rows)
            .map(|(player, row)| player_row(player, row, ctx))
            .collect(),
        formations: ctx
            .formations
            .iter()
            .enumerate()
            .map(|(i, f)| formation_panel(i + 1, f, ctx))
            .collect(),
        rejected: ctx.rejected.iter().map(|r| r.to_string()).collect(),
        warnings: ctx.matrix.warnings.iter().map(|w| w.to_string()).collect(),
    };
    Ok(template.render()?)
}

/// Write a rendered document to disk.
pub fn write_report(html: &str, path: &Path) -> Result<()> {
    fs::write(path, html).map_err(|source| AnalysisError::Render {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}

/// Serialize the score matrix as CSV: one row per player, one column per
/// role code, undefined scores as empty cells.
pub fn score_csv(
    matrix: &ScoreMatrix,
    catalog: &RoleCatalog,
    decimals: u32,
) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut header = vec!["Player".to_string(), "Best Role".to_string(), "Best Score".to_string()];
    header.extend(
        matrix
            .role_ids
            .iter()
            .map(|id| catalog.get(id).map(|r| r.code).unwrap_or(*id).to_string()),
    );
    writer.write_record(&header)?;

    for row in &matrix.rows {
        let mut record = vec![row.player.clone()];
        match row.best_role {
            Some(idx) => {
                let code = catalog.roles().get(idx).map(|r| r.code).unwrap_or("");
                record.push(code.to_string());
                record.push(
                    row.best_score()
                        .map(|v| format_score(v, decimals))
                        .unwrap_or_default(),
                );
            }
            None => {
                record.push(String::new());
                record.push(String::new());
            }
        }
        for score in &row.scores {
            record.push(score.value().map(|v| format_score(v, decimals)).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }
    writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

/// Write the score matrix CSV to `path`.
pub fn write_score_csv(
    path: &Path,
    matrix: &ScoreMatrix,
    catalog: &RoleCatalog,
    decimals: u32,
) -> Result<()> {
    let render_error = |source: std::io::Error| AnalysisError::Render {
        path: path.to_path_buf(),
        source,
    };
    let bytes = score_csv(matrix, catalog, decimals).map_err(|e| render_error(e.into()))?;
    fs::write(path, bytes).map_err(render_error)?;
    log::info!("Wrote score matrix to {}", path.display());
    Ok(())
}
