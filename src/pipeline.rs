//! Pipeline functions shared by the binaries.
//!
//! `analyze_records` is the pure part (records in, scores and formations
//! out); `run` wraps it with export discovery and report output.

use crate::config::AppConfig;
use crate::error::{Result, ValidationError};
use crate::formation::{self, FormationSuggestion, FormationTemplate};
use crate::loader::{self, LoadedExport};
use crate::normalize::{self, NormalizedPlayer, PlayerRecord};
use crate::report::{self, ReportContext};
use crate::roles::RoleCatalog;
use crate::scoring::{self, ScoreMatrix};
use chrono::{DateTime, Local};
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// Analysis
// ============================================================================

/// Everything computed from one batch of records.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Accepted players, in squad order
    pub players: Vec<NormalizedPlayer>,
    /// Rows excluded by validation
    pub rejected: Vec<ValidationError>,
    pub matrix: ScoreMatrix,
    /// Best formations, highest total first
    pub formations: Vec<FormationSuggestion>,
}

impl Analysis {
    pub fn degraded_count(&self) -> usize {
        self.players.iter().filter(|p| p.degraded).count()
    }

    /// Accepted player by name
    pub fn player(&self, name: &str) -> Option<&NormalizedPlayer> {
        self.players.iter().find(|p| p.name == name)
    }
}

/// Templates for a run: the configured file, or the built-in set.
pub fn formation_templates(
    config: &AppConfig,
    catalog: &RoleCatalog,
) -> Result<Vec<FormationTemplate>> {
    match &config.formations_file {
        Some(path) => formation::load_formations(path, catalog),
        None => Ok(formation::builtin_formations()),
    }
}

/// Normalize, score and fit formations for in-memory records.
pub fn analyze_records(
    records: &[PlayerRecord],
    config: &AppConfig,
    catalog: &RoleCatalog,
    templates: &[FormationTemplate],
) -> Result<Analysis> {
    let batch = normalize::normalize_batch(records, &config.normalizer_config())?;
    let matrix = scoring::compute_matrix(&batch.players, catalog);
    let formations = formation::analyze(
        &matrix,
        &batch.players,
        templates,
        catalog,
        &config.formation_options(),
    );
    if let Some(best) = formations.first() {
        log::info!("Best formation: {} (total {:.2})", best.name, best.total);
    }
    Ok(Analysis {
        players: batch.players,
        rejected: batch.rejected,
        matrix,
        formations,
    })
}

/// Find the newest export in the configured folder, parse and analyze it.
pub fn load_and_analyze(
    config: &AppConfig,
    catalog: &RoleCatalog,
) -> Result<(LoadedExport, Analysis)> {
    let templates = formation_templates(config, catalog)?;
    let export = loader::load_latest(&config.export_folder, &config.output_prefix)?;
    let analysis = analyze_records(&export.table.records, config, catalog, &templates)?;
    Ok((export, analysis))
}

// ============================================================================
// Report run
// ============================================================================

/// Output overrides for [`run`]
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Report path; `<folder>/<prefix><timestamp>.html` when unset
    pub output: Option<PathBuf>,
    /// Also write the score matrix as CSV
    pub csv: Option<PathBuf>,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub export_path: PathBuf,
    pub report_path: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub players: usize,
    pub rejected: usize,
    pub degraded: usize,
    pub undefined_scores: usize,
    /// (name, total) of the reported formations
    pub formations: Vec<(String, f64)>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Export:  {}", self.export_path.display())?;
        writeln!(f, "Report:  {}", self.report_path.display())?;
        if let Some(csv) = &self.csv_path {
            writeln!(f, "CSV:     {}", csv.display())?;
        }
        writeln!(
            f,
            "Players: {} scored, {} skipped, {} with too little data",
            self.players, self.rejected, self.degraded
        )?;
        if self.undefined_scores > 0 {
            writeln!(f, "Undefined scores: {}", self.undefined_scores)?;
        }
        for (rank, (name, total)) in self.formations.iter().enumerate() {
            writeln!(f, "  #{} {:<28} {:>7.2}", rank + 1, name, total)?;
        }
        Ok(())
    }
}

/// Default report location for a run started at `now`.
pub fn default_report_path(folder: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    folder.join(format!("{}{}.html", prefix, now.format("%Y%m%d_%H%M%S")))
}

/// Full run: discover, parse, analyze, render.
pub fn run(config: &AppConfig, options: &RunOptions) -> Result<RunSummary> {
    let catalog = RoleCatalog::builtin();
    let (export, analysis) = load_and_analyze(config, catalog)?;

    let now = Local::now();
    let report_path = options
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&config.export_folder, &config.output_prefix, now));
    let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let thresholds = config.classifier_thresholds()?;

    let html = report::render_report(&ReportContext {
        source: &export.path,
        generated_at: &generated_at,
        info_columns: &export.table.info_columns,
        players: &analysis.players,
        matrix: &analysis.matrix,
        catalog,
        thresholds: &thresholds,
        score_decimals: config.score_decimals,
        formations: &analysis.formations,
        rejected: &analysis.rejected,
    })?;
    report::write_report(&html, &report_path)?;

    if let Some(csv_path) = &options.csv {
        report::write_score_csv(csv_path, &analysis.matrix, catalog, config.score_decimals)?;
    }

    Ok(RunSummary {
        export_path: export.path,
        report_path,
        csv_path: options.csv.clone(),
        players: analysis.players.len(),
        rejected: analysis.rejected.len(),
        degraded: analysis.degraded_count(),
        undefined_scores: analysis.matrix.undefined_count(),
        formations: analysis
            .formations
            .iter()
            .map(|f| (f.name.clone(), f.total))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_report_path() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let path = default_report_path(Path::new("exports"), "fm_analysis_", now);
        assert_eq!(path, Path::new("exports").join("fm_analysis_20240309_140507.html"));
    }

    #[test]
    fn test_run_summary_text() {
        let summary = RunSummary {
            export_path: PathBuf::from("squad.html"),
            report_path: PathBuf::from("fm_analysis_1.html"),
            csv_path: None,
            players: 20,
            rejected: 1,
            degraded: 2,
            undefined_scores: 0,
            formations: vec![("4-4-2".to_string(), 171.456)],
        };
        let text = summary.to_string();
        assert!(text.starts_with("Export:  squad.html\nReport:  fm_analysis_1.html\n"));
        assert!(text.contains("Players: 20 scored, 1 skipped, 2 with too little data"));
        assert!(!text.contains("CSV:") && !text.contains("Undefined"));
        assert!(text.ends_with("  171.46\n"));
    }

    #[test]
    fn test_analyze_records_in_memory() {
        let records = vec![
            PlayerRecord::new(1, "Keeper")
                .with_position("GK")
                .with_attribute("Ref", "17")
                .with_attribute("Han", "16"),
            PlayerRecord::new(2, ""),
            PlayerRecord::new(3, "Striker")
                .with_position("ST (C)")
                .with_attribute("Fin", "17")
                .with_attribute("Acc", "15"),
        ];
        let config = AppConfig::default();
        let catalog = RoleCatalog::builtin();
        let analysis =
            analyze_records(&records, &config, catalog, &formation::builtin_formations()).unwrap();
        assert_eq!(analysis.players.len(), 2);
        assert_eq!(analysis.rejected.len(), 1);
        assert_eq!(analysis.matrix.player_count(), 2);
        assert_eq!(analysis.formations.len(), 3);
        assert_eq!(analysis.degraded_count(), 2);
        assert!(analysis.player("Striker").is_some());
    }
}
