//! Role suitability scoring
//!
//! A role score is the weighted average of the role's attributes:
//!
//! ```text
//! score = (5 * sum(key) + 3 * sum(important) + 1 * sum(useful))
//!         / (5 * |key| + 3 * |important| + 1 * |useful|)
//! ```
//!
//! which keeps the result on the 1-20 attribute scale. The denominator is
//! computed per role from the weights actually applied, never globally.

use crate::error::ComputationWarning;
use crate::normalize::NormalizedPlayer;
use crate::roles::{RoleCatalog, RoleDefinition, IMPORTANT_WEIGHT, KEY_WEIGHT, USEFUL_WEIGHT};
use rayon::prelude::*;

/// Score of one (player, role) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoleScore {
    /// Weighted average in [0,20]
    Scored(f64),
    /// Nothing the role depends on was known for this player
    Undefined,
}

impl RoleScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Scored(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Scored(_))
    }
}

/// Per-tier sums behind a score, for diagnostics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub key_sum: f64,
    pub important_sum: f64,
    pub useful_sum: f64,
    /// Sum of multipliers for attributes that contributed
    pub applied_weight: u32,
    /// Role attributes present in the vocabulary
    pub referenced: usize,
    /// Role attributes that came from the export rather than the default
    pub observed: usize,
}

impl ScoreBreakdown {
    pub fn weighted_total(&self) -> f64 {
        self.key_sum * KEY_WEIGHT as f64
            + self.important_sum * IMPORTANT_WEIGHT as f64
            + self.useful_sum * USEFUL_WEIGHT as f64
    }

    /// Why the pair has no score, if it has none
    pub fn undefined_reason(&self) -> Option<&'static str> {
        if self.applied_weight == 0 {
            Some("role references no known attributes")
        } else if self.observed == 0 {
            Some("none of the role's attributes were present in the export")
        } else {
            None
        }
    }

    pub fn score(&self) -> RoleScore {
        if self.undefined_reason().is_some() {
            return RoleScore::Undefined;
        }
        RoleScore::Scored(self.weighted_total() / self.applied_weight as f64)
    }
}

/// Compute the tier sums for one pair.
pub fn breakdown(player: &NormalizedPlayer, role: &RoleDefinition) -> ScoreBreakdown {
    let mut b = ScoreBreakdown::default();
    for (attr, weight) in role.weighted_attributes() {
        let Some(value) = player.value(attr) else {
            continue;
        };
        match weight {
            KEY_WEIGHT => b.key_sum += value,
            IMPORTANT_WEIGHT => b.important_sum += value,
            _ => b.useful_sum += value,
        }
        b.applied_weight += weight;
        b.referenced += 1;
        if player.is_observed(attr) {
            b.observed += 1;
        }
    }
    b
}

/// Score one player for one role.
pub fn score(player: &NormalizedPlayer, role: &RoleDefinition) -> RoleScore {
    breakdown(player, role).score()
}

/// Round for display: `decimals` places, half away from zero.
pub fn round_score(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Composite ratings shown next to the role columns
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedAttributes {
    /// (Pac + Acc) / 2
    pub speed: f64,
    /// (Wor + Sta) / 2
    pub work: f64,
    pub jumping: f64,
    pub strength: f64,
}

impl DerivedAttributes {
    pub fn from_player(player: &NormalizedPlayer) -> Self {
        let v = |code: &str| player.value(code).unwrap_or(0.0);
        Self {
            speed: (v("Pac") + v("Acc")) / 2.0,
            work: (v("Wor") + v("Sta")) / 2.0,
            jumping: v("Jum"),
            strength: v("Str"),
        }
    }
}

/// All role scores for one player, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub player: String,
    pub scores: Vec<RoleScore>,
    /// Catalog index of the highest defined score (first wins ties)
    pub best_role: Option<usize>,
    pub derived: DerivedAttributes,
}

impl ScoreRow {
    pub fn best_score(&self) -> Option<f64> {
        self.best_role.and_then(|i| self.scores[i].value())
    }
}

/// Scores for every (player, role) pair. Rows follow squad order, columns
/// follow catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    pub role_ids: Vec<&'static str>,
    pub rows: Vec<ScoreRow>,
    /// Undefined pairs, in (player, role) order
    pub warnings: Vec<ComputationWarning>,
}

impl ScoreMatrix {
    /// Look up by player name and role id/code.
    pub fn score_for(&self, player: &str, role: &str) -> Option<RoleScore> {
        let role = role.to_ascii_lowercase();
        let col = self.role_ids.iter().position(|r| *r == role)?;
        let row = self.rows.iter().find(|r| r.player == player)?;
        row.scores.get(col).copied()
    }

    pub fn player_count(&self) -> usize {
        self.rows.len()
    }

    pub fn role_count(&self) -> usize {
        self.role_ids.len()
    }

    pub fn undefined_count(&self) -> usize {
        self.warnings.len()
    }
}

fn score_row(
    player: &NormalizedPlayer,
    catalog: &RoleCatalog,
) -> (ScoreRow, Vec<ComputationWarning>) {
    let mut scores = Vec::with_capacity(catalog.len());
    let mut warnings = Vec::new();
    let mut best: Option<(usize, f64)> = None;

    for (idx, role) in catalog.roles().iter().enumerate() {
        let b = breakdown(player, role);
        let s = b.score();
        match (s, b.undefined_reason()) {
            (RoleScore::Scored(v), _) => {
                if best.map_or(true, |(_, bv)| v > bv) {
                    best = Some((idx, v));
                }
            }
            (RoleScore::Undefined, reason) => {
                warnings.push(ComputationWarning {
                    player: player.name.clone(),
                    role: role.code.to_string(),
                    reason: reason.unwrap_or("undefined").to_string(),
                });
            }
        }
        scores.push(s);
    }

    let row = ScoreRow {
        player: player.name.clone(),
        scores,
        best_role: best.map(|(i, _)| i),
        derived: DerivedAttributes::from_player(player),
    };
    (row, warnings)
}

/// Score every player against every role.
///
/// Rows are computed in parallel; each row only reads its own player and the
/// shared catalog, and results are collected back in squad order so the
/// matrix is identical from run to run.
pub fn compute_matrix(players: &[NormalizedPlayer], catalog: &RoleCatalog) -> ScoreMatrix {
    let results: Vec<(ScoreRow, Vec<ComputationWarning>)> = players
        .par_iter()
        .map(|p| score_row(p, catalog))
        .collect();

    let mut rows = Vec::with_capacity(results.len());
    let mut warnings = Vec::new();
    for (row, row_warnings) in results {
        rows.push(row);
        warnings.extend(row_warnings);
    }

    for w in &warnings {
        log::warn!("Undefined score for {}", w);
    }
    log::info!(
        "Scored {} players x {} roles ({} undefined)",
        rows.len(),
        catalog.len(),
        warnings.len()
    );

    ScoreMatrix {
        role_ids: catalog.roles().iter().map(|r| r.id).collect(),
        rows,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::VOCABULARY;
    use crate::normalize::{normalize_record, NormalizerConfig, PlayerRecord};

    fn player_with(name: &str, values: &[(&str, &str)]) -> NormalizedPlayer {
        let record = values
            .iter()
            .fold(PlayerRecord::new(1, name), |r, (c, v)| r.with_attribute(c, v));
        normalize_record(&record, &NormalizerConfig::default())
    }

    fn uniform_player(name: &str, value: &str) -> NormalizedPlayer {
        let values: Vec<(&str, &str)> = VOCABULARY.iter().map(|c| (*c, value)).collect();
        player_with(name, &values)
    }

    #[test]
    fn test_weighted_average() {
        let catalog = RoleCatalog::builtin();
        let cms = catalog.get("cms").unwrap();
        // key Acc Pac Sta Wor; important Dec Fir Pas Tck Tea; useful Ant Cnt Cmp OtB Tec Vis
        let mut values = vec![];
        for k in cms.key {
            values.push((*k, "20"));
        }
        for i in cms.important {
            values.push((*i, "10"));
        }
        for u in cms.useful {
            values.push((*u, "5"));
        }
        let player = player_with("A", &values);
        let expected = (4.0 * 20.0 * 5.0 + 5.0 * 10.0 * 3.0 + 6.0 * 5.0) / 41.0;
        let got = score(&player, cms).value().unwrap();
        assert!((got - expected).abs() < 1e-9, "{} vs {}", got, expected);
    }

    #[test]
    fn test_all_twenty_scores_twenty() {
        let player = uniform_player("A", "20");
        for role in RoleCatalog::builtin().roles() {
            assert_eq!(score(&player, role), RoleScore::Scored(20.0), "{}", role.id);
        }
    }

    #[test]
    fn test_applied_weight_is_role_local() {
        let player = uniform_player("A", "12");
        for role in RoleCatalog::builtin().roles() {
            let b = breakdown(&player, role);
            assert_eq!(b.applied_weight, role.total_weight(), "{}", role.id);
            assert_eq!(b.referenced, role.attribute_count());
        }
    }

    #[test]
    fn test_undefined_when_nothing_observed() {
        let catalog = RoleCatalog::builtin();
        // only goalkeeping attributes known
        let player = player_with("Keeper", &[("Ref", "16"), ("Han", "15")]);
        let afa = catalog.get("afa").unwrap();
        assert_eq!(score(&player, afa), RoleScore::Undefined);
        assert_eq!(
            breakdown(&player, afa).undefined_reason(),
            Some("none of the role's attributes were present in the export")
        );
        let gkd = catalog.get("gkd").unwrap();
        assert!(score(&player, gkd).is_defined());
    }

    #[test]
    fn test_undefined_when_role_has_no_known_attributes() {
        let ghost = RoleDefinition {
            id: "ghost",
            code: "GHOST",
            name: "Ghost",
            key: &["Xyz"],
            important: &[],
            useful: &[],
        };
        let player = uniform_player("A", "15");
        assert_eq!(score(&player, &ghost), RoleScore::Undefined);
        assert_eq!(
            breakdown(&player, &ghost).undefined_reason(),
            Some("role references no known attributes")
        );
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(14.96, 1), 15.0);
        assert_eq!(round_score(14.94, 1), 14.9);
        assert_eq!(round_score(12.345, 0), 12.0);
        assert_eq!(round_score(7.25, 2), 7.25);
    }

    #[test]
    fn test_matrix_order_and_best_role() {
        let catalog = RoleCatalog::builtin();
        let keeper = player_with(
            "Keeper",
            &[("Agi", "18"), ("Ref", "18"), ("Han", "16"), ("Acc", "5")],
        );
        let striker = player_with("Striker", &[("Acc", "17"), ("Fin", "18"), ("Pac", "16")]);
        let matrix = compute_matrix(&[keeper, striker], catalog);

        assert_eq!(matrix.player_count(), 2);
        assert_eq!(matrix.role_count(), catalog.len());
        assert_eq!(matrix.rows[0].player, "Keeper");
        assert_eq!(matrix.rows[1].player, "Striker");

        let best = matrix.rows[0].best_role.unwrap();
        let best_id = catalog.roles()[best].id;
        assert!(best_id.starts_with('g') || best_id.starts_with('s'));
        assert!(matrix.rows[1].best_score().unwrap() > 10.0);
        assert!(matrix.score_for("Striker", "AFA").unwrap().is_defined());
    }

    #[test]
    fn test_matrix_records_warnings_in_order() {
        let catalog = RoleCatalog::builtin();
        let empty = player_with("Blank", &[]);
        let matrix = compute_matrix(&[empty], catalog);
        assert_eq!(matrix.undefined_count(), catalog.len());
        assert_eq!(matrix.rows[0].best_role, None);
        assert_eq!(matrix.warnings[0].role, "GKD");
        assert_eq!(matrix.warnings[0].player, "Blank");
    }

    #[test]
    fn test_derived_attributes() {
        let player = player_with(
            "A",
            &[
                ("Pac", "14"),
                ("Acc", "16"),
                ("Wor", "10"),
                ("Sta", "12"),
                ("Jum", "9"),
                ("Str", "13"),
            ],
        );
        let d = DerivedAttributes::from_player(&player);
        assert_eq!(d.speed, 15.0);
        assert_eq!(d.work, 11.0);
        assert_eq!(d.jumping, 9.0);
        assert_eq!(d.strength, 13.0);
    }
}
