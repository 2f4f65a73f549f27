//! Run configuration
//!
//! Defaults, optionally overridden by a TOML file, then by command-line
//! flags. Validated once before anything is loaded.

use crate::classify::Thresholds;
use crate::error::{AnalysisError, Result};
use crate::formation::FormationOptions;
use crate::logging::LogSettings;
use crate::normalize::NormalizerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "squad_report.toml";

/// Largest supported `score_decimals`
pub const MAX_SCORE_DECIMALS: u32 = 4;

/// Category cutoffs (inclusive lower bounds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            excellent: 15.0,
            good: 12.0,
            average: 8.0,
            poor: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder scanned for the newest export
    pub export_folder: PathBuf,

    pub thresholds: ThresholdConfig,

    /// Value used for attributes missing from the export (0-20)
    pub missing_default: f64,

    /// Records missing more than this fraction of attributes are degraded
    pub degraded_fraction: f64,

    /// Decimal places shown in the report and CSV
    pub score_decimals: u32,

    pub debug_logging: bool,

    /// Also append log lines to `log_file`
    pub file_logging: bool,

    pub log_file: PathBuf,

    /// Number of formation suggestions to report
    pub top_formations: usize,

    /// Formation templates file; built-in templates when unset
    pub formations_file: Option<PathBuf>,

    /// Restrict formation slots to players listed for that position
    pub position_eligibility: bool,

    /// Prefix for generated report names
    pub output_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_folder: PathBuf::from("."),
            thresholds: ThresholdConfig::default(),
            missing_default: 10.0,
            degraded_fraction: 0.5,
            score_decimals: 1,
            debug_logging: false,
            file_logging: false,
            log_file: PathBuf::from("squad_report.log"),
            top_formations: 3,
            formations_file: None,
            position_eligibility: false,
            output_prefix: "fm_analysis_".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse TOML text. Unset keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AnalysisError::config(e.to_string()))
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| AnalysisError::config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the configuration for a run: an explicit path must exist,
    /// otherwise `squad_report.toml` in the working directory is used if
    /// present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.classifier_thresholds()?;
        if !(0.0..=20.0).contains(&self.missing_default) {
            return Err(AnalysisError::config(format!(
                "missing_default must be within 0-20, got {}",
                self.missing_default
            )));
        }
        if !(0.0..=1.0).contains(&self.degraded_fraction) {
            return Err(AnalysisError::config(format!(
                "degraded_fraction must be within 0-1, got {}",
                self.degraded_fraction
            )));
        }
        if self.score_decimals > MAX_SCORE_DECIMALS {
            return Err(AnalysisError::config(format!(
                "score_decimals must be at most {}, got {}",
                MAX_SCORE_DECIMALS, self.score_decimals
            )));
        }
        if self.top_formations == 0 {
            return Err(AnalysisError::config("top_formations must be at least 1"));
        }
        if self.output_prefix.trim().is_empty() {
            return Err(AnalysisError::config("output_prefix must not be empty"));
        }
        Ok(())
    }

    pub fn classifier_thresholds(&self) -> Result<Thresholds> {
        let t = &self.thresholds;
        Thresholds::standard(t.excellent, t.good, t.average, t.poor)
    }

    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig {
            missing_default: self.missing_default,
            degraded_fraction: self.degraded_fraction,
        }
    }

    pub fn formation_options(&self) -> FormationOptions {
        FormationOptions {
            top_n: self.top_formations,
            position_eligibility: self.position_eligibility,
        }
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            debug: self.debug_logging,
            log_file: self.file_logging.then(|| self.log_file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.normalizer_config(), NormalizerConfig::default());
        assert_eq!(config.classifier_thresholds().unwrap(), Thresholds::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
export_folder = "exports"
score_decimals = 2

[thresholds]
excellent = 16.0
"#,
        )
        .unwrap();
        assert_eq!(config.export_folder, PathBuf::from("exports"));
        assert_eq!(config.score_decimals, 2);
        assert_eq!(config.thresholds.excellent, 16.0);
        assert_eq!(config.thresholds.good, 12.0);
        assert_eq!(config.top_formations, 3);
        assert!(config.formations_file.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.thresholds.good = 15.0;
        assert!(config.validate().is_err());

        let config = AppConfig {
            missing_default: 25.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            top_formations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            score_decimals: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            degraded_fraction: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AppConfig::from_toml("score_decimals = \"two\"").unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_formations = 5\nfile_logging = true").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.top_formations, 5);
        assert_eq!(
            config.log_settings().log_file,
            Some(PathBuf::from("squad_report.log"))
        );

        let missing = file.path().with_extension("absent");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }
}
