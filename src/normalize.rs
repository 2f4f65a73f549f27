//! Attribute normalization
//!
//! Turns raw exported cells into a complete numeric record: every vocabulary
//! attribute gets a value in [1,20], missing ones are filled with the
//! configured default, and records missing too much are flagged as degraded.
//! Records without a usable identity are rejected here.

use crate::attributes::{self, MAX_RATING, MIN_RATING, VOCABULARY};
use crate::error::{AnalysisError, Result, ValidationError};
use crate::positions::{self, PositionTag};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// A parsed table row, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    /// 1-based data row in the source table (header excluded)
    pub row: usize,
    /// Player identity; empty when the cell was blank
    pub name: String,
    /// Raw position description, e.g. "D (RLC), DM"
    pub position: String,
    /// Non-attribute columns kept for display, in source order
    pub info: Vec<(String, String)>,
    /// Canonical attribute code -> raw cell text
    pub attributes: BTreeMap<String, String>,
}

impl PlayerRecord {
    pub fn new(row: usize, name: &str) -> Self {
        Self {
            row,
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = position.to_string();
        self
    }

    pub fn with_info(mut self, column: &str, value: &str) -> Self {
        self.info.push((column.to_string(), value.to_string()));
        self
    }

    /// Set an attribute cell; unknown codes are ignored.
    pub fn with_attribute(mut self, code: &str, raw: &str) -> Self {
        if let Some(canonical) = attributes::canonical(code) {
            self.attributes.insert(canonical.to_string(), raw.to_string());
        }
        self
    }
}

/// Missing-data policy
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizerConfig {
    /// Value substituted for a missing attribute
    pub missing_default: f64,
    /// A record is degraded when MORE than this fraction of the vocabulary is missing
    pub degraded_fraction: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            missing_default: 10.0,
            degraded_fraction: 0.5,
        }
    }
}

/// A record with a value for every vocabulary attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPlayer {
    pub row: usize,
    pub name: String,
    pub position: String,
    pub positions: Vec<PositionTag>,
    pub info: Vec<(String, String)>,
    values: Vec<f64>,
    observed: Vec<bool>,
    /// Number of vocabulary attributes that had to be imputed
    pub missing: usize,
    /// Number of values pulled into [1,20]
    pub clamped: usize,
    /// Too many attributes were missing for the scores to be trusted
    pub degraded: bool,
}

impl NormalizedPlayer {
    /// Normalized value of an attribute; None only for codes outside the vocabulary.
    pub fn value(&self, code: &str) -> Option<f64> {
        attributes::attribute_index(code).map(|i| self.values[i])
    }

    /// Whether the attribute came from the export rather than the default.
    pub fn is_observed(&self, code: &str) -> bool {
        attributes::attribute_index(code)
            .map(|i| self.observed[i])
            .unwrap_or(false)
    }
}

/// Output of batch normalization: accepted players in load order plus the
/// rows that were excluded.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub players: Vec<NormalizedPlayer>,
    pub rejected: Vec<ValidationError>,
}

impl NormalizedBatch {
    pub fn degraded_count(&self) -> usize {
        self.players.iter().filter(|p| p.degraded).count()
    }
}

lazy_static::lazy_static! {
    // "13-16": scouting range
    static ref RANGE: Regex = Regex::new(r"^\s*(\d{1,3}(?:\.\d+)?)\s*-\s*(\d{1,3}(?:\.\d+)?)\s*$").unwrap();
    // "14 (13-16)": leading number wins
    // "-2" keeps its sign so clamping sees it
    static ref LEADING: Regex = Regex::new(r"^\s*(-?\d{1,3}(?:\.\d+)?)(?:[^\d.]|$)").unwrap();
    static ref ANY_NUMBER: Regex = Regex::new(r"-?\d{1,3}(?:\.\d+)?").unwrap();
}

/// Parse one exported attribute cell.
///
/// Handles plain numbers (`14`), scouting ranges (`13-16` gives the midpoint),
/// annotated values (`14 (13-16)` gives 14) and unicode dashes. Non-values
/// (`N/A`, `-`, `—`, blank) and text with no digits return None.
pub fn parse_attribute_value(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if matches!(
        s.to_ascii_uppercase().as_str(),
        "N/A" | "NA" | "NONE" | "-" | "\u{2014}" | "\u{2013}"
    ) {
        return None;
    }

    let s = s.replace(['\u{2013}', '\u{2014}', '\u{2212}'], "-");

    if let Some(caps) = RANGE.captures(&s) {
        let a: f64 = caps[1].parse().ok()?;
        let b: f64 = caps[2].parse().ok()?;
        return Some((a + b) / 2.0);
    }
    if let Some(caps) = LEADING.captures(&s) {
        return caps[1].parse().ok();
    }
    ANY_NUMBER.find(&s).and_then(|m| m.as_str().parse().ok())
}

/// Clamp into the valid rating range.
pub fn clamp_rating(value: f64) -> f64 {
    value.clamp(MIN_RATING, MAX_RATING)
}

/// Normalize one record. Identity is not checked here; see [`normalize_batch`].
pub fn normalize_record(record: &PlayerRecord, config: &NormalizerConfig) -> NormalizedPlayer {
    let n = VOCABULARY.len();
    let mut values = vec![config.missing_default; n];
    let mut observed = vec![false; n];
    let mut clamped = 0usize;

    for (code, raw) in &record.attributes {
        let Some(idx) = attributes::attribute_index(code) else {
            continue;
        };
        match parse_attribute_value(raw) {
            Some(v) => {
                let c = clamp_rating(v);
                if c != v {
                    clamped += 1;
                    log::debug!(
                        "Row {} ({}): attribute '{}' value {} clamped to {}",
                        record.row,
                        record.name,
                        code,
                        v,
                        c
                    );
                }
                values[idx] = c;
                observed[idx] = true;
            }
            None => {
                if !raw.trim().is_empty() {
                    log::debug!(
                        "Row {} ({}): attribute '{}' has no numeric value: '{}'",
                        record.row,
                        record.name,
                        code,
                        raw
                    );
                }
            }
        }
    }

    let missing = observed.iter().filter(|o| !**o).count();
    let degraded = (missing as f64 / n as f64) > config.degraded_fraction;

    NormalizedPlayer {
        row: record.row,
        name: record.name.trim().to_string(),
        position: record.position.trim().to_string(),
        positions: positions::parse_positions(&record.position),
        info: record.info.clone(),
        values,
        observed,
        missing,
        clamped,
        degraded,
    }
}

/// Normalize a whole batch, rejecting rows with a blank or repeated name.
///
/// Rejections are logged and returned; the batch fails only when every
/// record was rejected.
pub fn normalize_batch(
    records: &[PlayerRecord],
    config: &NormalizerConfig,
) -> Result<NormalizedBatch> {
    let mut batch = NormalizedBatch::default();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            let err = ValidationError::MissingIdentity { row: record.row };
            log::warn!("Skipping record: {}", err);
            batch.rejected.push(err);
            continue;
        }
        if let Some(&first_row) = first_seen.get(name) {
            let err = ValidationError::DuplicateIdentity {
                row: record.row,
                name: name.to_string(),
                first_row,
            };
            log::warn!("Skipping record: {}", err);
            batch.rejected.push(err);
            continue;
        }
        first_seen.insert(name.to_string(), record.row);

        let player = normalize_record(record, config);
        if player.degraded {
            log::warn!(
                "Row {} ({}): {} of {} attributes missing, scores marked as degraded",
                player.row,
                player.name,
                player.missing,
                VOCABULARY.len()
            );
        }
        batch.players.push(player);
    }

    if batch.players.is_empty() && !batch.rejected.is_empty() {
        return Err(AnalysisError::NoValidRecords {
            rejected: batch.rejected.len(),
        });
    }

    log::info!(
        "Normalized {} players ({} rejected, {} degraded)",
        batch.players.len(),
        batch.rejected.len(),
        batch.degraded_count()
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record(row: usize, name: &str, value: &str) -> PlayerRecord {
        VOCABULARY
            .iter()
            .fold(PlayerRecord::new(row, name), |r, code| r.with_attribute(code, value))
    }

    #[test]
    fn test_parse_attribute_value() {
        assert_eq!(parse_attribute_value("14"), Some(14.0));
        assert_eq!(parse_attribute_value(" 7 "), Some(7.0));
        assert_eq!(parse_attribute_value("13-16"), Some(14.5));
        assert_eq!(parse_attribute_value("13\u{2013}16"), Some(14.5));
        assert_eq!(parse_attribute_value("14 (13-16)"), Some(14.0));
        assert_eq!(parse_attribute_value("12.5"), Some(12.5));
        assert_eq!(parse_attribute_value("N/A"), None);
        assert_eq!(parse_attribute_value("-"), None);
        assert_eq!(parse_attribute_value("\u{2014}"), None);
        assert_eq!(parse_attribute_value(""), None);
        assert_eq!(parse_attribute_value("unknown"), None);
    }

    #[test]
    fn test_clamps_out_of_range() {
        let record = PlayerRecord::new(1, "A")
            .with_attribute("Acc", "25")
            .with_attribute("Pac", "0");
        let player = normalize_record(&record, &NormalizerConfig::default());
        assert_eq!(player.value("Acc"), Some(20.0));
        assert_eq!(player.value("Pac"), Some(1.0));
        assert_eq!(player.clamped, 2);
    }

    #[test]
    fn test_negative_cells_are_clamped_not_flipped() {
        assert_eq!(parse_attribute_value("-5"), Some(-5.0));
        assert_eq!(parse_attribute_value("\u{2212}3"), Some(-3.0));
        assert_eq!(parse_attribute_value("-2 (est.)"), Some(-2.0));

        let record = PlayerRecord::new(1, "A")
            .with_attribute("Acc", "-5")
            .with_attribute("Pac", "\u{2212}3");
        let player = normalize_record(&record, &NormalizerConfig::default());
        assert_eq!(player.value("Acc"), Some(1.0));
        assert_eq!(player.value("Pac"), Some(1.0));
        assert!(player.is_observed("Acc"));
        assert_eq!(player.clamped, 2);
    }

    #[test]
    fn test_missing_default_and_observed() {
        let config = NormalizerConfig {
            missing_default: 7.0,
            degraded_fraction: 0.5,
        };
        let record = PlayerRecord::new(1, "A").with_attribute("Acc", "15");
        let player = normalize_record(&record, &config);
        assert_eq!(player.value("Acc"), Some(15.0));
        assert!(player.is_observed("Acc"));
        assert_eq!(player.value("Fin"), Some(7.0));
        assert!(!player.is_observed("Fin"));
        assert_eq!(player.missing, VOCABULARY.len() - 1);
        assert!(player.degraded);
        assert!(player.value("Name").is_none());
    }

    #[test]
    fn test_degraded_threshold_is_strict() {
        let config = NormalizerConfig {
            missing_default: 10.0,
            degraded_fraction: 0.0,
        };
        let complete = normalize_record(&full_record(1, "A", "12"), &config);
        assert_eq!(complete.missing, 0);
        assert!(!complete.degraded);

        let config = NormalizerConfig {
            missing_default: 10.0,
            degraded_fraction: 1.0,
        };
        let empty = normalize_record(&PlayerRecord::new(1, "B"), &config);
        assert_eq!(empty.missing, VOCABULARY.len());
        assert!(!empty.degraded);
    }

    #[test]
    fn test_batch_rejects_missing_and_duplicate_identity() {
        let records = vec![
            full_record(1, "Alex Hunter", "12"),
            full_record(2, "  ", "12"),
            full_record(3, "Alex Hunter", "15"),
            full_record(4, "Sam Reed", "9"),
        ];
        let batch = normalize_batch(&records, &NormalizerConfig::default()).unwrap();
        let names: Vec<&str> = batch.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Hunter", "Sam Reed"]);
        assert_eq!(
            batch.rejected,
            vec![
                ValidationError::MissingIdentity { row: 2 },
                ValidationError::DuplicateIdentity {
                    row: 3,
                    name: "Alex Hunter".to_string(),
                    first_row: 1
                },
            ]
        );
    }

    #[test]
    fn test_batch_fails_when_all_rejected() {
        let records = vec![PlayerRecord::new(1, ""), PlayerRecord::new(2, " ")];
        let err = normalize_batch(&records, &NormalizerConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::NoValidRecords { rejected: 2 }));
    }

    #[test]
    fn test_positions_are_expanded() {
        let record = PlayerRecord::new(1, "A").with_position("D (LC)");
        let player = normalize_record(&record, &NormalizerConfig::default());
        assert_eq!(player.positions.len(), 2);
        assert_eq!(player.position, "D (LC)");
    }
}
