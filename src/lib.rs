//! Squad Role Toolkit
//!
//! Scores a squad export from a football management game against a catalog
//! of tactical roles and renders the result as a static, filterable report.
//!
//! This library provides:
//! - `loader`: finds the newest HTML export and parses its player table
//! - `normalize`: cleans attribute values and validates player identity
//! - `roles`: the built-in role catalog (key/important/useful attribute tiers)
//! - `scoring`: weighted per-role scores for every player
//! - `classify`: maps scores onto colour-coded categories
//! - `formation`: fills formation templates from the score matrix
//! - `report`: HTML report and CSV export
//! - `pipeline`: the end-to-end run used by the binaries
//!
//! Binaries:
//! - `squad-report`: analyze the newest export and write the HTML report
//! - `best-formations`: print the ranked formations with their selected XI
//! - `role-debug`: per-tier breakdown of a player's role scores

pub mod attributes;
pub mod classify;
pub mod config;
pub mod error;
pub mod formation;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod positions;
pub mod report;
pub mod roles;
pub mod scoring;

pub use classify::{classify, Category, Thresholds};
pub use config::AppConfig;
pub use error::{AnalysisError, ComputationWarning, Result, ValidationError};
pub use normalize::{NormalizedPlayer, PlayerRecord};
pub use roles::{RoleCatalog, RoleDefinition};
pub use scoring::{score, RoleScore, ScoreMatrix};
