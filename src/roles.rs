//! Role catalog
//!
//! Static table of tactical roles, each weighting three disjoint tiers of
//! attributes: key (x5), important (x3) and useful (x1). The built-in
//! catalog is validated once on first use and never mutated.

use crate::attributes;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Multiplier for key attributes
pub const KEY_WEIGHT: u32 = 5;
/// Multiplier for important attributes
pub const IMPORTANT_WEIGHT: u32 = 3;
/// Multiplier for useful attributes
pub const USEFUL_WEIGHT: u32 = 1;

/// Weighting definition for a single role
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDefinition {
    /// Lowercase identifier (e.g. "cdd")
    pub id: &'static str,
    /// Display code used for report columns (e.g. "CDD")
    pub code: &'static str,
    /// Human-readable name for legends (e.g. "Central Defender Defend")
    pub name: &'static str,
    pub key: &'static [&'static str],
    pub important: &'static [&'static str],
    pub useful: &'static [&'static str],
}

impl RoleDefinition {
    /// Sum of tier weights: 5*|key| + 3*|important| + 1*|useful|
    pub fn total_weight(&self) -> u32 {
        self.key.len() as u32 * KEY_WEIGHT
            + self.important.len() as u32 * IMPORTANT_WEIGHT
            + self.useful.len() as u32 * USEFUL_WEIGHT
    }

    /// Every weighted attribute with its multiplier, key tier first
    pub fn weighted_attributes(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.key
            .iter()
            .map(|a| (*a, KEY_WEIGHT))
            .chain(self.important.iter().map(|a| (*a, IMPORTANT_WEIGHT)))
            .chain(self.useful.iter().map(|a| (*a, USEFUL_WEIGHT)))
    }

    /// Number of attributes across all tiers
    pub fn attribute_count(&self) -> usize {
        self.key.len() + self.important.len() + self.useful.len()
    }
}

/// Errors raised while assembling a catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("role '{role}' references unknown attribute '{attribute}'")]
    UnknownAttribute { role: String, attribute: String },

    #[error("role '{role}' lists attribute '{attribute}' in more than one tier")]
    OverlappingTiers { role: String, attribute: String },

    #[error("role '{0}' is defined more than once")]
    DuplicateRole(String),

    #[error("role '{0}' has no attributes")]
    EmptyRole(String),
}

/// Immutable lookup of role definitions, in display order
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
    by_id: HashMap<&'static str, usize>,
}

impl RoleCatalog {
    /// Build a catalog, checking tier disjointness and vocabulary membership.
    pub fn new(roles: Vec<RoleDefinition>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::new();
        for (idx, role) in roles.iter().enumerate() {
            if role.attribute_count() == 0 {
                return Err(CatalogError::EmptyRole(role.id.to_string()));
            }
            let mut seen = HashSet::new();
            for (attr, _) in role.weighted_attributes() {
                if !attributes::is_attribute(attr) {
                    return Err(CatalogError::UnknownAttribute {
                        role: role.id.to_string(),
                        attribute: attr.to_string(),
                    });
                }
                if !seen.insert(attr) {
                    return Err(CatalogError::OverlappingTiers {
                        role: role.id.to_string(),
                        attribute: attr.to_string(),
                    });
                }
            }
            if by_id.insert(role.id, idx).is_some() {
                return Err(CatalogError::DuplicateRole(role.id.to_string()));
            }
        }
        Ok(Self { roles, by_id })
    }

    /// The shared built-in catalog
    pub fn builtin() -> &'static RoleCatalog {
        &BUILTIN_CATALOG
    }

    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Look up by identifier or display code, case-insensitively.
    pub fn get(&self, id_or_code: &str) -> Option<&RoleDefinition> {
        let key = id_or_code.trim().to_ascii_lowercase();
        self.by_id.get(key.as_str()).map(|&i| &self.roles[i])
    }

    /// Find a role by its human-readable name. Case, hyphens and spacing
    /// are ignored.
    pub fn find_by_name(&self, name: &str) -> Option<&RoleDefinition> {
        let wanted = name_key(name);
        self.roles.iter().find(|r| name_key(r.name) == wanted)
    }
}

/// Lowercase, hyphens to spaces, single spaces.
pub(crate) fn name_key(name: &str) -> String {
    name.replace(['-', '\u{2013}'], " ")
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

lazy_static::lazy_static! {
    static ref BUILTIN_CATALOG: RoleCatalog =
        RoleCatalog::new(builtin_roles()).expect("built-in role catalog must be valid");
}

const fn role(
    id: &'static str,
    code: &'static str,
    name: &'static str,
    key: &'static [&'static str],
    important: &'static [&'static str],
    useful: &'static [&'static str],
) -> RoleDefinition {
    RoleDefinition {
        id,
        code,
        name,
        key,
        important,
        useful,
    }
}

/// All built-in roles in display order: goalkeepers, defenders,
/// midfielders, forwards.
pub fn builtin_roles() -> Vec<RoleDefinition> {
    vec![
        // Goalkeepers
        role(
            "gkd",
            "GKD",
            "Goalkeeper Defend",
            &["Agi", "Ref"],
            &["Aer", "Cmd", "Cnt", "Han", "Kic", "Pos"],
            &["1v1", "Ant", "Dec", "Thr"],
        ),
        role(
            "skd",
            "SKD",
            "Sweeper Keeper Defend",
            &["Agi", "Ref"],
            &["1v1", "Ant", "Cmd", "Cnt", "Kic", "Pos"],
            &["Acc", "Aer", "Dec", "Fir", "Han", "Pas", "TRO", "Vis"],
        ),
        role(
            "sks",
            "SKS",
            "Sweeper Keeper Support",
            &["Agi", "Ref"],
            &["1v1", "Ant", "Cmd", "Cnt", "Kic", "Pos"],
            &["Acc", "Aer", "Dec", "Fir", "Han", "Pas", "TRO", "Vis"],
        ),
        role(
            "ska",
            "SKA",
            "Sweeper Keeper Attack",
            &["Agi", "Ref"],
            &["1v1", "Ant", "Cmd", "Cnt", "Kic", "Pos"],
            &["Acc", "Aer", "Dec", "Fir", "Han", "Pas", "TRO", "Vis"],
        ),
        // Defenders
        role(
            "bpdd",
            "BPDD",
            "Ball Playing Defender Defend",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Hea", "Mar", "Pas", "Pos", "Str", "Tck"],
            &["Agg", "Ant", "Bra", "Cnt", "Dec", "Fir", "Tec", "Vis"],
        ),
        role(
            "bpds",
            "BPDS",
            "Ball Playing Defender Stopper",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Agg", "Bra", "Dec", "Hea", "Pas", "Pos", "Str", "Tck"],
            &["Ant", "Cnt", "Fir", "Mar", "Tec", "Vis"],
        ),
        role(
            "bpdc",
            "BPDC",
            "Ball Playing Defender Cover",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Ant", "Cnt", "Dec", "Mar", "Pas", "Pos", "Tck"],
            &["Bra", "Fir", "Hea", "Str", "Tec", "Vis"],
        ),
        role(
            "cdd",
            "CDD",
            "Central Defender Defend",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Hea", "Mar", "Pos", "Str", "Tck"],
            &["Agg", "Ant", "Bra", "Cnt", "Dec"],
        ),
        role(
            "cds",
            "CDS",
            "Central Defender Stopper",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Agg", "Bra", "Dec", "Hea", "Pos", "Str", "Tck"],
            &["Ant", "Cnt", "Mar"],
        ),
        role(
            "cdc",
            "CDC",
            "Central Defender Cover",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Ant", "Cnt", "Dec", "Mar", "Pos", "Tck"],
            &["Bra", "Hea", "Str"],
        ),
        role(
            "cwbs",
            "CWBS",
            "Complete Wing Back Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cro", "Dri", "OtB", "Tea", "Tec"],
            &["Agi", "Ant", "Bal", "Dec", "Fir", "Fla", "Mar", "Pas", "Pos", "Tck"],
        ),
        role(
            "cwba",
            "CWBA",
            "Complete Wing Back Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cro", "Dri", "Fla", "OtB", "Tea", "Tec"],
            &["Agi", "Ant", "Bal", "Dec", "Fir", "Mar", "Pas", "Pos", "Tck"],
        ),
        role(
            "fbd",
            "FBD",
            "Full Back Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cnt", "Mar", "Pos", "Tck"],
            &["Cro", "Dec", "Pas", "Tea"],
        ),
        role(
            "fbs",
            "FBS",
            "Full Back Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cnt", "Mar", "Pos", "Tck", "Tea"],
            &["Cro", "Dec", "Dri", "Pas", "Tec"],
        ),
        role(
            "fba",
            "FBA",
            "Full Back Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cro", "Mar", "Pos", "Tck", "Tea"],
            &["Agi", "Cnt", "Dec", "Dri", "Fir", "OtB", "Pas", "Tec"],
        ),
        role(
            "ifbd",
            "IFBD",
            "Inverted Full Back Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Hea", "Mar", "Pos", "Str", "Tck"],
            &["Agg", "Agi", "Ant", "Bra", "Cnt", "Cmp", "Dec", "Dri", "Fir", "Jum", "Pas", "Tec"],
        ),
        role(
            "iwbd",
            "IWBD",
            "Inverted Wing Back Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Dec", "Pas", "Pos", "Tck", "Tea"],
            &["Agi", "Cnt", "Cmp", "Fir", "Mar", "OtB", "Tec"],
        ),
        role(
            "iwbs",
            "IWBS",
            "Inverted Wing Back Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "Pas", "Tck", "Tea"],
            &["Agi", "Ant", "Cnt", "Mar", "OtB", "Pos", "Tec", "Vis"],
        ),
        role(
            "iwba",
            "IWBA",
            "Inverted Wing Back Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tck", "Tea", "Tec", "Vis"],
            &["Agi", "Ant", "Cnt", "Cro", "Dri", "Fla", "Lon", "Mar", "Pos"],
        ),
        role(
            "ld",
            "LD",
            "Libero Defend",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Dec", "Fir", "Hea", "Mar", "Pas", "Pos", "Str", "Tck", "Tea", "Tec"],
            &["Ant", "Bra", "Cnt", "Sta"],
        ),
        role(
            "ls",
            "LS",
            "Libero Support",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Dec", "Fir", "Hea", "Mar", "Pas", "Pos", "Str", "Tck", "Tea", "Tec"],
            &["Ant", "Bra", "Cnt", "Dri", "Sta", "Vis"],
        ),
        role(
            "ncbd",
            "NCBD",
            "No-nonsense Centre Back Defend",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Hea", "Mar", "Pos", "Str", "Tck"],
            &["Agg", "Ant", "Bra", "Cnt"],
        ),
        role(
            "ncbs",
            "NCBS",
            "No-nonsense Centre Back Support",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Agg", "Bra", "Hea", "Pos", "Str", "Tck"],
            &["Ant", "Cnt", "Mar"],
        ),
        role(
            "ncbc",
            "NCBC",
            "No-nonsense Centre Back Cover",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Ant", "Cnt", "Mar", "Pos", "Tck"],
            &["Bra", "Hea", "Str"],
        ),
        role(
            "nfbd",
            "NFBD",
            "No-nonsense Full Back Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Mar", "Pos", "Str", "Tck"],
            &["Agg", "Bra", "Cnt", "Hea", "Tea"],
        ),
        role(
            "wcbd",
            "WCBD",
            "Wide Centre Back Defend",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Hea", "Mar", "Pos", "Str", "Tck"],
            &["Agg", "Agi", "Ant", "Bra", "Cnt", "Dec", "Dri", "Fir", "Pas", "Tec", "Wor"],
        ),
        role(
            "wcbs",
            "WCBS",
            "Wide Centre Back Support",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Dri", "Hea", "Mar", "Pos", "Str", "Tck"],
            &[
                "Agg", "Agi", "Ant", "Bra", "Cnt", "Cro", "Dec", "Fir", "OtB", "Pas", "Sta", "Tec",
                "Wor",
            ],
        ),
        role(
            "wcba",
            "WCBA",
            "Wide Centre Back Attack",
            &["Acc", "Cmp", "Jum", "Pac"],
            &["Cro", "Dri", "Hea", "Mar", "OtB", "Sta", "Str", "Tck"],
            &["Agg", "Agi", "Ant", "Bra", "Cnt", "Dec", "Fir", "Pas", "Pos", "Tec", "Wor"],
        ),
        role(
            "wbd",
            "WBD",
            "Wing Back Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Mar", "Pos", "Tck", "Tea"],
            &["Agi", "Bal", "Cnt", "Cro", "Dec", "Dri", "Fir", "OtB", "Pas", "Tec"],
        ),
        role(
            "wbs",
            "WBS",
            "Wing Back Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cro", "Dri", "Mar", "OtB", "Tck", "Tea"],
            &["Agi", "Ant", "Bal", "Cnt", "Dec", "Fir", "Pas", "Pos", "Tec"],
        ),
        role(
            "wba",
            "WBA",
            "Wing Back Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cro", "Dri", "OtB", "Tck", "Tea", "Tec"],
            &["Agi", "Ant", "Bal", "Cnt", "Dec", "Fir", "Fla", "Mar", "Pas", "Pos"],
        ),
        // Midfielders
        role(
            "aps",
            "APS",
            "Advanced Playmaker Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"],
            &["Agi", "Ant", "Dri", "Fla"],
        ),
        role(
            "apa",
            "APA",
            "Advanced Playmaker Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"],
            &["Agi", "Ant", "Dri", "Fla"],
        ),
        role(
            "ad",
            "AD",
            "Anchor Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cnt", "Dec", "Mar", "Pos", "Tck"],
            &["Cmp", "Str", "Tea"],
        ),
        role(
            "ams",
            "AMS",
            "Attacking Midfielder Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Dec", "Fir", "Fla", "Lon", "OtB", "Pas", "Tec"],
            &["Agi", "Cmp", "Dri", "Vis"],
        ),
        role(
            "ama",
            "AMA",
            "Attacking Midfielder Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Dec", "Dri", "Fir", "Fla", "Lon", "OtB", "Pas", "Tec"],
            &["Agi", "Cmp", "Fin", "Vis"],
        ),
        role(
            "bwmd",
            "BWMD",
            "Ball Winning Midfielder Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agg", "Ant", "Tck", "Tea"],
            &["Agi", "Bra", "Cnt", "Mar", "Pos", "Str"],
        ),
        role(
            "bwms",
            "BWMS",
            "Ball Winning Midfielder Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agg", "Ant", "Tck", "Tea"],
            &["Agi", "Bra", "Cnt", "Mar", "Pas", "Str"],
        ),
        role(
            "b2bs",
            "B2BS",
            "Box to Box Midfielder Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["OtB", "Pas", "Tck", "Tea"],
            &["Agg", "Ant", "Bal", "Cmp", "Dec", "Dri", "Fin", "Fir", "Lon", "Pos", "Str", "Tec"],
        ),
        role(
            "cars",
            "CARS",
            "Carrilero Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Dec", "Fir", "Pas", "Pos", "Tck", "Tea"],
            &["Ant", "Cnt", "Cmp", "OtB", "Tec", "Vis"],
        ),
        role(
            "cmd",
            "CMD",
            "Central Midfielder Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cnt", "Dec", "Pos", "Tck", "Tea"],
            &["Agg", "Ant", "Cmp", "Fir", "Mar", "Pas", "Tec"],
        ),
        role(
            "cms",
            "CMS",
            "Central Midfielder Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Dec", "Fir", "Pas", "Tck", "Tea"],
            &["Ant", "Cnt", "Cmp", "OtB", "Tec", "Vis"],
        ),
        role(
            "cma",
            "CMA",
            "Central Midfielder Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Dec", "Fir", "OtB", "Pas"],
            &["Ant", "Cmp", "Lon", "Tck", "Tea", "Tec", "Vis"],
        ),
        role(
            "dlpd",
            "DLPD",
            "Deep Lying Playmaker Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "Pas", "Tea", "Tec", "Vis"],
            &["Ant", "Bal", "Pos", "Tck"],
        ),
        role(
            "dlps",
            "DLPS",
            "Deep Lying Playmaker Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "Pas", "Tea", "Tec", "Vis"],
            &["Ant", "Bal", "OtB", "Pos"],
        ),
        role(
            "dmd",
            "DMD",
            "Defensive Midfielder Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cnt", "Pos", "Tck", "Tea"],
            &["Agg", "Cmp", "Dec", "Mar", "Pas"],
        ),
        role(
            "dms",
            "DMS",
            "Defensive Midfielder Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cnt", "Pos", "Tck", "Tea"],
            &["Agg", "Cmp", "Dec", "Fir", "Mar", "Pas", "Str"],
        ),
        role(
            "dwd",
            "DWD",
            "Defensive Winger Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "OtB", "Pos", "Tea", "Tec"],
            &["Agg", "Cnt", "Cro", "Dec", "Dri", "Fir", "Mar", "Tck"],
        ),
        role(
            "dws",
            "DWS",
            "Defensive Winger Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cro", "OtB", "Tea", "Tec"],
            &["Agg", "Ant", "Cnt", "Cmp", "Dec", "Dri", "Fir", "Mar", "Pas", "Pos", "Tck"],
        ),
        role(
            "engs",
            "ENGS",
            "Enganche Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "Pas", "Tec", "Vis"],
            &["Agi", "Ant", "Dri", "Fla", "OtB", "Tea"],
        ),
        role(
            "hbd",
            "HBD",
            "Half Back Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cnt", "Cmp", "Dec", "Mar", "Pos", "Tck", "Tea"],
            &["Agg", "Bra", "Fir", "Jum", "Pas", "Str"],
        ),
        role(
            "ifs",
            "IFS",
            "Inside Forward Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agi", "Dri", "Fin", "Fir", "OtB", "Tec"],
            &["Ant", "Bal", "Cmp", "Fla", "Lon", "Pas", "Vis"],
        ),
        role(
            "ifa",
            "IFA",
            "Inside Forward Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agi", "Ant", "Dri", "Fin", "Fir", "OtB", "Tec"],
            &["Bal", "Cmp", "Fla", "Lon", "Pas"],
        ),
        role(
            "iws",
            "IWS",
            "Inverted Winger Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agi", "Cro", "Dri", "Pas", "Tec"],
            &["Bal", "Cmp", "Dec", "Fir", "Lon", "OtB", "Vis"],
        ),
        role(
            "iwa",
            "IWA",
            "Inverted Winger Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agi", "Cro", "Dri", "Pas", "Tec"],
            &["Ant", "Bal", "Cmp", "Dec", "Fir", "Fla", "Lon", "OtB", "Vis"],
        ),
        role(
            "mezs",
            "MEZS",
            "Mezzala Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Dec", "OtB", "Pas", "Tec"],
            &["Ant", "Bal", "Cmp", "Dri", "Fir", "Lon", "Tck", "Vis"],
        ),
        role(
            "meza",
            "MEZA",
            "Mezzala Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Dec", "Dri", "OtB", "Pas", "Tec", "Vis"],
            &["Ant", "Bal", "Cmp", "Fin", "Fir", "Fla", "Lon"],
        ),
        role(
            "raua",
            "RAUA",
            "Raumdeuter Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Bal", "Cnt", "Cmp", "Dec", "Fin", "OtB"],
            &["Fir", "Tec"],
        ),
        role(
            "regs",
            "REGS",
            "Regista Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "Fla", "OtB", "Pas", "Tea", "Tec", "Vis"],
            &["Ant", "Bal", "Dri", "Lon"],
        ),
        role(
            "rps",
            "RPS",
            "Roaming Playmaker Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"],
            &["Agi", "Bal", "Cnt", "Dri", "Lon", "Pos"],
        ),
        role(
            "svs",
            "SVS",
            "Segundo Volante Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Mar", "OtB", "Pas", "Pos", "Tck"],
            &["Ant", "Bal", "Cnt", "Cmp", "Dec", "Fin", "Fir", "Lon", "Str"],
        ),
        role(
            "sva",
            "SVA",
            "Segundo Volante Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Fin", "Lon", "OtB", "Pas", "Pos", "Tck"],
            &["Bal", "Cnt", "Cmp", "Dec", "Fir", "Mar"],
        ),
        role(
            "ssa",
            "SSA",
            "Shadow Striker Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Ant", "Cmp", "Dri", "Fin", "Fir", "OtB"],
            &["Agi", "Bal", "Cnt", "Dec", "Pas", "Tec"],
        ),
        role(
            "wmd",
            "WMD",
            "Wide Midfielder Defend",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cnt", "Dec", "Pas", "Pos", "Tck", "Tea"],
            &["Ant", "Cmp", "Cro", "Fir", "Mar", "Tec"],
        ),
        role(
            "wms",
            "WMS",
            "Wide Midfielder Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Dec", "Pas", "Tck", "Tea"],
            &["Ant", "Cnt", "Cmp", "Cro", "Fir", "OtB", "Pos", "Tec", "Vis"],
        ),
        role(
            "wma",
            "WMA",
            "Wide Midfielder Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cro", "Dec", "Fir", "Pas", "Tea"],
            &["Ant", "Cmp", "OtB", "Tck", "Tec", "Vis"],
        ),
        role(
            "wps",
            "WPS",
            "Wide Playmaker Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Fir", "Pas", "Tea", "Tec", "Vis"],
            &["Agi", "Dri", "OtB"],
        ),
        role(
            "wpa",
            "WPA",
            "Wide Playmaker Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Cmp", "Dec", "Dri", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"],
            &["Agi", "Ant", "Fla"],
        ),
        role(
            "wtfs",
            "WTFS",
            "Wide Target Forward Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Bra", "Hea", "Jum", "Str", "Tea"],
            &["Ant", "Bal", "Cro", "Fir", "OtB"],
        ),
        role(
            "wtfa",
            "WTFA",
            "Wide Target Forward Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Bra", "Hea", "Jum", "OtB", "Str"],
            &["Ant", "Bal", "Cro", "Fin", "Fir", "Tea"],
        ),
        role(
            "ws",
            "WS",
            "Winger Support",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agi", "Cro", "Dri", "Tec"],
            &["Bal", "Fir", "OtB", "Pas"],
        ),
        role(
            "wa",
            "WA",
            "Winger Attack",
            &["Acc", "Pac", "Sta", "Wor"],
            &["Agi", "Cro", "Dri", "Tec"],
            &["Ant", "Bal", "Fir", "Fla", "OtB", "Pas"],
        ),
        // Forwards
        role(
            "afa",
            "AFA",
            "Advanced Forward Attack",
            &["Acc", "Fin", "Pac"],
            &["Cmp", "Dri", "Fir", "OtB", "Tec"],
            &["Agi", "Ant", "Bal", "Dec", "Pas", "Sta", "Wor"],
        ),
        role(
            "cfs",
            "CFS",
            "Complete Forward Support",
            &["Acc", "Fin", "Pac"],
            &[
                "Agi", "Ant", "Cmp", "Dec", "Dri", "Fir", "Hea", "Lon", "OtB", "Pas", "Str", "Tec",
                "Vis",
            ],
            &["Bal", "Jum", "Sta", "Tea", "Wor"],
        ),
        role(
            "cfa",
            "CFA",
            "Complete Forward Attack",
            &["Acc", "Fin", "Pac"],
            &["Agi", "Ant", "Cmp", "Dri", "Fir", "Hea", "OtB", "Str", "Tec"],
            &["Bal", "Dec", "Jum", "Lon", "Pas", "Sta", "Tea", "Vis", "Wor"],
        ),
        role(
            "dlfs",
            "DLFS",
            "Deep Lying Forward Support",
            &["Acc", "Fin", "Pac"],
            &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec"],
            &["Ant", "Bal", "Fla", "Str", "Vis"],
        ),
        role(
            "dlfa",
            "DLFA",
            "Deep Lying Forward Attack",
            &["Acc", "Fin", "Pac"],
            &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec"],
            &["Ant", "Bal", "Dri", "Fla", "Str", "Vis"],
        ),
        role(
            "f9s",
            "F9S",
            "False Nine Support",
            &["Acc", "Fin", "Pac"],
            &["Agi", "Cmp", "Dec", "Dri", "Fir", "OtB", "Pas", "Tec", "Vis"],
            &["Ant", "Bal", "Fla", "Tea"],
        ),
        role(
            "pa",
            "PA",
            "Poacher Attack",
            &["Acc", "Fin", "Pac"],
            &["Ant", "Cmp", "OtB"],
            &["Dec", "Fir", "Hea", "Tec"],
        ),
        role(
            "pfd",
            "PFD",
            "Pressing Forward Defend",
            &["Acc", "Fin", "Pac"],
            &["Agg", "Ant", "Bra", "Dec", "Sta", "Tea", "Wor"],
            &["Agi", "Bal", "Cnt", "Cmp", "Fir", "Str"],
        ),
        role(
            "pfs",
            "PFS",
            "Pressing Forward Support",
            &["Acc", "Fin", "Pac"],
            &["Agg", "Ant", "Bra", "Dec", "Sta", "Tea", "Wor"],
            &["Agi", "Bal", "Cnt", "Cmp", "Fir", "OtB", "Pas", "Str"],
        ),
        role(
            "pfa",
            "PFA",
            "Pressing Forward Attack",
            &["Acc", "Fin", "Pac"],
            &["Agg", "Ant", "Bra", "OtB", "Sta", "Tea", "Wor"],
            &["Agi", "Bal", "Cnt", "Cmp", "Dec", "Fir", "Str"],
        ),
        role(
            "tfs",
            "TFS",
            "Target Forward Support",
            &["Acc", "Fin", "Pac"],
            &["Bal", "Bra", "Hea", "Jum", "Str", "Tea"],
            &["Agg", "Ant", "Cmp", "Dec", "Fir", "OtB"],
        ),
        role(
            "tfa",
            "TFA",
            "Target Forward Attack",
            &["Acc", "Fin", "Pac"],
            &["Bal", "Bra", "Cmp", "Hea", "Jum", "OtB", "Str"],
            &["Agg", "Ant", "Dec", "Fir", "Tea"],
        ),
        role(
            "trea",
            "TREA",
            "Trequartista Attack",
            &["Acc", "Fin", "Pac"],
            &["Cmp", "Dec", "Dri", "Fir", "Fla", "OtB", "Pas", "Tec", "Vis"],
            &["Agi", "Ant", "Bal"],
        ),
    ]
}
