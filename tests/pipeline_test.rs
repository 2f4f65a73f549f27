//! End-to-end tests against a squad export fixture
//!
//! The fixture holds 14 rows: 11 complete players, one row without a name,
//! one repeated name and one player with only four attributes filled in.

use squad_role_toolkit::config::AppConfig;
use squad_role_toolkit::error::AnalysisError;
use squad_role_toolkit::formation;
use squad_role_toolkit::loader;
use squad_role_toolkit::pipeline::{self, RunOptions};
use squad_role_toolkit::report;
use squad_role_toolkit::{RoleCatalog, RoleScore, ValidationError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/input/squad-export.html";

fn export_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(FIXTURE, dir.path().join("squad-export.html")).unwrap();
    dir
}

fn config_for(folder: &Path) -> AppConfig {
    AppConfig {
        export_folder: folder.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_fixture_parses() {
    let html = fs::read_to_string(FIXTURE).unwrap();
    let table = loader::parse_export_table(&html, FIXTURE).unwrap();
    assert_eq!(table.records.len(), 14);
    assert_eq!(table.info_columns, vec!["Inf", "Age", "Club"]);
    assert_eq!(table.attribute_columns.len(), 47);
    assert_eq!(table.records[0].name, "Tomas Varga");
    assert_eq!(table.records[8].position, "AM (RL), ST (C)");
}

#[test]
fn test_analysis_of_fixture() {
    let dir = export_folder();
    let config = config_for(dir.path());
    let (export, analysis) = pipeline::load_and_analyze(&config, RoleCatalog::builtin()).unwrap();

    assert_eq!(export.path.file_name().unwrap(), "squad-export.html");
    assert_eq!(analysis.players.len(), 12);
    assert_eq!(
        analysis.rejected,
        vec![
            ValidationError::MissingIdentity { row: 12 },
            ValidationError::DuplicateIdentity {
                row: 13,
                name: "Marco Bellini".to_string(),
                first_row: 3
            },
        ]
    );

    let sparse = analysis.player("Sean Murphy").unwrap();
    assert!(sparse.degraded);
    assert_eq!(sparse.value("Pac"), Some(15.0));
    assert_eq!(analysis.degraded_count(), 1);

    // the sparse player has nothing a plain goalkeeper needs
    assert_eq!(analysis.matrix.undefined_count(), 1);
    assert_eq!(
        analysis.matrix.score_for("Sean Murphy", "GKD"),
        Some(RoleScore::Undefined)
    );
    assert!(analysis.matrix.score_for("Sean Murphy", "AFA").unwrap().is_defined());

    let keeper = &analysis.matrix.rows[0];
    assert_eq!(keeper.player, "Tomas Varga");
    let best = RoleCatalog::builtin().roles()[keeper.best_role.unwrap()].id;
    assert!(["gkd", "skd", "sks", "ska"].contains(&best), "keeper best role {}", best);

    assert_eq!(analysis.formations.len(), 3);
    for f in &analysis.formations {
        assert_eq!(f.filled(), 11, "{}", f.name);
        assert!(f.total > 0.0);
    }
    assert!(analysis.formations[0].total >= analysis.formations[1].total);
    assert!(analysis.formations[1].total >= analysis.formations[2].total);
}

#[test]
fn test_position_eligibility_leaves_slots_open() {
    let dir = export_folder();
    let mut config = config_for(dir.path());
    config.position_eligibility = true;
    config.top_formations = 6;
    let (_, analysis) = pipeline::load_and_analyze(&config, RoleCatalog::builtin()).unwrap();

    let four_four_two = analysis
        .formations
        .iter()
        .find(|f| f.name == "4-4-2")
        .unwrap();
    // nobody in the squad plays right midfield
    assert!(four_four_two.unfilled().contains(&"M R"));
    let keeper = four_four_two
        .assignments
        .iter()
        .find(|a| a.position == "GK")
        .unwrap();
    assert_eq!(keeper.player.as_deref(), Some("Tomas Varga"));
}

#[test]
fn test_run_writes_report_and_csv() {
    let dir = export_folder();
    let config = config_for(dir.path());
    let csv_path = dir.path().join("scores.csv");
    let summary = pipeline::run(
        &config,
        &RunOptions {
            output: None,
            csv: Some(csv_path.clone()),
        },
    )
    .unwrap();

    assert_eq!(summary.players, 12);
    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.degraded, 1);
    assert_eq!(summary.undefined_scores, 1);
    assert_eq!(summary.formations.len(), 3);

    let name = summary.report_path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("fm_analysis_") && name.ends_with(".html"));
    let html = fs::read_to_string(&summary.report_path).unwrap();
    assert!(html.contains("Tomas Varga"));
    assert!(html.contains("Suggested formations"));
    assert!(html.contains("row 13: duplicate player name"));
    assert!(html.contains("(first seen at row 3)"));
    assert!(!html.contains("'Marco Bellini'"));

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 13);

    // the report just written must not be picked up as the next export
    let again = pipeline::run(&config, &RunOptions::default()).unwrap();
    assert_eq!(again.export_path, summary.export_path);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = export_folder();
    let config = config_for(dir.path());
    let catalog = RoleCatalog::builtin();

    let (_, first) = pipeline::load_and_analyze(&config, catalog).unwrap();
    let (_, second) = pipeline::load_and_analyze(&config, catalog).unwrap();
    assert_eq!(first.matrix, second.matrix);

    let a = report::score_csv(&first.matrix, catalog, 2).unwrap();
    let b = report::score_csv(&second.matrix, catalog, 2).unwrap();
    assert_eq!(a, b);

    let out_a = dir.path().join("a.csv");
    let out_b = dir.path().join("b.csv");
    report::write_score_csv(&out_a, &first.matrix, catalog, 1).unwrap();
    report::write_score_csv(&out_b, &second.matrix, catalog, 1).unwrap();
    assert_eq!(fs::read(out_a).unwrap(), fs::read(out_b).unwrap());
}

#[test]
fn test_formations_file() {
    let dir = export_folder();
    let formations = dir.path().join("formations.txt");
    fs::write(
        &formations,
        "1. Back Three\nGK = GKD\nDC = CDD/BPDD\nDC – Central Def (D)\nDC = CDD\nST C – Poacher (A)\n",
    )
    .unwrap();
    let mut config = config_for(dir.path());
    config.formations_file = Some(formations);
    let (_, analysis) = pipeline::load_and_analyze(&config, RoleCatalog::builtin()).unwrap();
    assert_eq!(analysis.formations.len(), 1);
    assert_eq!(analysis.formations[0].name, "Back Three");
    assert_eq!(analysis.formations[0].assignments.len(), 5);
    assert_eq!(analysis.formations[0].filled(), 5);
}

#[test]
fn test_missing_export_is_discovery_error() {
    let dir = TempDir::new().unwrap();
    let err = pipeline::run(&config_for(dir.path()), &RunOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::FileDiscovery { .. }));
    assert!(err.to_string().starts_with("no export file found in"));
}

#[test]
fn test_header_only_export_writes_no_report() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("squad-export.html"),
        "<html><body><table><tr><th>Name</th><th>Acc</th><th>Pac</th></tr></table></body></html>",
    )
    .unwrap();
    let err = pipeline::run(&config_for(dir.path()), &RunOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Parse { .. }));
    assert!(err.to_string().ends_with("table has no data rows"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_builtin_templates_resolve_against_catalog() {
    let catalog = RoleCatalog::builtin();
    for f in formation::builtin_formations() {
        for slot in &f.slots {
            for role in &slot.roles {
                assert!(catalog.get(role).is_some(), "{} / {}", f.name, role);
            }
        }
    }
}
