//! Formation suggestions
//!
//! A formation template is a list of slots; each slot names a pitch position
//! and one or more compatible roles. Each template is filled greedily from
//! the score matrix and the templates are ranked by total fit.
//!
//! The assignment is a greedy approximation of bipartite matching: all
//! (slot, player) candidates are ranked by score and taken highest first.
//! It is not guaranteed to find the optimal total.

use crate::error::{AnalysisError, Result};
use crate::normalize::NormalizedPlayer;
use crate::positions::{self, PositionTag};
use crate::roles::{name_key, RoleCatalog};
use crate::scoring::ScoreMatrix;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Templates shipped with the tool, in the text format accepted by
/// [`parse_formations`].
pub const BUILTIN_FORMATIONS: &str = "\
1. 4-4-2
GK – Goalkeeper (D)
D R – Full Back (S)
DC – Central Defender (D)
DC – Central Defender (D)
D L – Full Back (S)
M R – Winger (S)
MC – Box-to-Box Mid (S)
MC – Ball-Winning Mid (D)
M L – Winger (A)
ST C – Advanced Forward (A)
ST C – Deep-Lying Forward (S)

2. 4-2-3-1 Wide
GK – Sweeper Keeper (S)
D/WB R – Wing Back (S)
DC – Ball-Playing Def (D)
DC – Central Def (D)
D/WB L – Wing Back (S)
DM – Deep-Lying Playmaker (S)
DM – Def Mid (D)
AM R – Inside Forward (A)
AMC – Att Mid (S)
AM L – Winger (A)
ST C – Pressing Forward (A)

3. 4-3-3 DM Wide
GK – Sweeper Keeper (S)
D/WB R – Wing Back (S)
DC – Central Def (D)
DC – Central Def (D)
D/WB L – Wing Back (S)
DM – Anchor Man (D)
MC – Box-to-Box Mid (S)
MC – Advanced Playmaker (S)
AM R – Inside Forward (A)
AM L – Winger (A)
ST C – Advanced Forward (A)

4. 4-1-2-1-2 Narrow (Diamond)
GK – Goalkeeper (D)
D R – Full Back (S)
DC – Central Def (D)
DC – Central Def (D)
D L – Full Back (S)
DM – Def Mid (D)
MC – Box-to-Box Mid (S)
MC – Mezzala (S)
AMC – Advanced Playmaker (A)
ST C – Poacher (A)
ST C – Deep-Lying Forward (S)

5. 3-5-2
GK – Sweeper Keeper (S)
DC – Wide Centre-Back (S)
DC – Central Def (D)
DC – Wide Centre-Back (S)
D/WB R – Wing Back (S)
D/WB L – Wing Back (S)
MC – Ball-Winning Mid (D)
MC – Deep-Lying Playmaker (S)
MC – Mezzala (S)
ST C – Pressing Forward (A)
ST C – Target Forward (S)

6. 5-3-2 WB
GK – Sweeper Keeper (S)
D/WB R – Wing Back (S)
DC – Central Def (D)
DC – Ball-Playing Def (D)
DC – Central Def (D)
D/WB L – Wing Back (S)
MC – Box-to-Box Mid (S)
MC – Deep-Lying Playmaker (S)
MC – Ball-Winning Mid (D)
ST C – Target Forward (S)
ST C – Poacher (A)
";

/// One position in a formation
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Position as written in the template, e.g. "D/WB R"
    pub position: String,
    pub tags: Vec<PositionTag>,
    /// Compatible role ids, in preference order
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormationTemplate {
    pub name: String,
    pub slots: Vec<Slot>,
}

lazy_static::lazy_static! {
    static ref HEADER: Regex = Regex::new(r"^(\d+)\.\s*(.+)$").unwrap();
    // "D/WB R – Wing Back (S)", "ST C = AFA/PFA"
    static ref SLOT_LINE: Regex = Regex::new(r"^([A-Za-z/ ]+?)\s*(=|–|—|-)\s*(.+)$").unwrap();
    static ref NAMED_ROLE: Regex = Regex::new(r"^(.+?)\s*\(\s*([A-Za-z])\s*\)$").unwrap();
    static ref BUILTIN_TEMPLATES: Vec<FormationTemplate> =
        parse_formations(BUILTIN_FORMATIONS, RoleCatalog::builtin(), "built-in formations")
            .expect("built-in formations must parse");
}

/// The six shipped templates
pub fn builtin_formations() -> Vec<FormationTemplate> {
    BUILTIN_TEMPLATES.clone()
}

/// Expand the shorthand used in hand-written templates.
fn expand_role_name(name: &str) -> String {
    let key = format!(" {} ", name_key(name));
    let key = key
        .replace(" def mid ", " defensive midfielder ")
        .replace(" att mid ", " attacking midfielder ")
        .replace(" anchor man ", " anchor ")
        .replace(" centre half ", " central defender ");
    key.split_whitespace()
        .map(|w| match w {
            "def" => "defender",
            "mid" => "midfielder",
            "att" => "attacking",
            "gk" => "goalkeeper",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn duty_words(duty: char) -> &'static [&'static str] {
    match duty.to_ascii_uppercase() {
        'D' => &["defend"],
        'S' => &["support", "stopper"],
        'A' => &["attack"],
        'C' => &["cover"],
        _ => &[],
    }
}

/// Resolve "Central Def (D)" style names against the catalog.
pub fn resolve_role_name(text: &str, catalog: &RoleCatalog) -> Option<&'static str> {
    let caps = NAMED_ROLE.captures(text.trim())?;
    let base = expand_role_name(&caps[1]);
    let duty = caps[2].chars().next()?;
    for word in duty_words(duty) {
        if let Some(role) = catalog.find_by_name(&format!("{} {}", base, word)) {
            return Some(role.id);
        }
    }
    None
}

fn resolve_roles(text: &str, catalog: &RoleCatalog) -> Option<Vec<&'static str>> {
    if text.contains('(') {
        return resolve_role_name(text, catalog).map(|id| vec![id]);
    }
    let mut ids = Vec::new();
    for code in text.split(['/', ',']).map(str::trim).filter(|c| !c.is_empty()) {
        ids.push(catalog.get(code)?.id);
    }
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

/// Parse formation templates from text.
///
/// ```text
/// 1. 4-4-2
/// GK – Goalkeeper (D)
/// D R = FBS/WBS
/// ```
///
/// Unknown roles and slot lines outside a formation are parse errors;
/// blank lines are ignored.
pub fn parse_formations(
    text: &str,
    catalog: &RoleCatalog,
    origin: &str,
) -> Result<Vec<FormationTemplate>> {
    let mut formations = Vec::new();
    let mut current: Option<FormationTemplate> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(caps) = HEADER.captures(line) {
            if let Some(done) = current.take() {
                formations.push(done);
            }
            current = Some(FormationTemplate {
                name: caps[2].trim().to_string(),
                slots: Vec::new(),
            });
            continue;
        }

        let caps = SLOT_LINE.captures(line).ok_or_else(|| {
            AnalysisError::parse_at(
                origin,
                line_no,
                format!("unrecognised formation line '{}'", line),
            )
        })?;
        let formation = current.as_mut().ok_or_else(|| {
            AnalysisError::parse_at(origin, line_no, "slot listed before any formation header")
        })?;

        let position = caps[1].trim().to_string();
        let roles = resolve_roles(&caps[3], catalog).ok_or_else(|| {
            AnalysisError::parse_at(origin, line_no, format!("unknown role '{}'", caps[3].trim()))
        })?;
        formation.slots.push(Slot {
            tags: positions::parse_positions(&position),
            position,
            roles,
        });
    }
    if let Some(done) = current.take() {
        formations.push(done);
    }

    if let Some(empty) = formations.iter().find(|f| f.slots.is_empty()) {
        return Err(AnalysisError::parse(
            origin,
            format!("formation '{}' has no slots", empty.name),
        ));
    }
    if formations.is_empty() {
        return Err(AnalysisError::parse(origin, "no formations found"));
    }
    Ok(formations)
}

/// Read templates from a text file.
pub fn load_formations(path: &Path, catalog: &RoleCatalog) -> Result<Vec<FormationTemplate>> {
    let text = fs::read_to_string(path)?;
    let formations = parse_formations(&text, catalog, &path.display().to_string())?;
    log::info!("Loaded {} formations from {}", formations.len(), path.display());
    Ok(formations)
}

/// Knobs for [`analyze`]
#[derive(Debug, Clone, PartialEq)]
pub struct FormationOptions {
    /// Number of formations to report
    pub top_n: usize,
    /// Only consider players whose positions match the slot
    pub position_eligibility: bool,
}

impl Default for FormationOptions {
    fn default() -> Self {
        Self {
            top_n: 3,
            position_eligibility: false,
        }
    }
}

/// The outcome for one slot
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub position: String,
    /// Role the player was scored for (display code); first compatible role when unfilled
    pub role: String,
    pub player: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormationSuggestion {
    pub name: String,
    /// Sum of assigned scores
    pub total: f64,
    /// Total divided by the number of filled slots
    pub average: f64,
    /// One entry per slot, in template order
    pub assignments: Vec<Assignment>,
}

impl FormationSuggestion {
    pub fn filled(&self) -> usize {
        self.assignments.iter().filter(|a| a.player.is_some()).count()
    }

    /// Positions nobody could be assigned to
    pub fn unfilled(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.player.is_none())
            .map(|a| a.position.as_str())
            .collect()
    }
}

struct Candidate {
    slot: usize,
    player: usize,
    role: usize,
    score: f64,
}

fn code_for(matrix: &ScoreMatrix, catalog: &RoleCatalog, role_idx: usize) -> String {
    let id = matrix.role_ids[role_idx];
    catalog
        .get(id)
        .map(|r| r.code.to_string())
        .unwrap_or_else(|| id.to_ascii_uppercase())
}

/// Fill one template from the score matrix.
pub fn assign(
    template: &FormationTemplate,
    matrix: &ScoreMatrix,
    players: &[NormalizedPlayer],
    catalog: &RoleCatalog,
    position_eligibility: bool,
) -> FormationSuggestion {
    let slot_roles: Vec<Vec<usize>> = template
        .slots
        .iter()
        .map(|slot| {
            slot.roles
                .iter()
                .filter_map(|id| matrix.role_ids.iter().position(|r| r == id))
                .collect()
        })
        .collect();

    let mut candidates = Vec::new();
    for (slot_idx, slot) in template.slots.iter().enumerate() {
        for (player_idx, row) in matrix.rows.iter().enumerate() {
            if position_eligibility {
                let tags = players.get(player_idx).map(|p| p.positions.as_slice()).unwrap_or(&[]);
                if !positions::eligible(&slot.tags, tags) {
                    continue;
                }
            }
            // best defined score over the slot's roles, first role wins ties
            let mut best: Option<(usize, f64)> = None;
            for &role_idx in &slot_roles[slot_idx] {
                if let Some(v) = row.scores[role_idx].value() {
                    if best.map_or(true, |(_, b)| v > b) {
                        best = Some((role_idx, v));
                    }
                }
            }
            if let Some((role, score)) = best {
                candidates.push(Candidate {
                    slot: slot_idx,
                    player: player_idx,
                    role,
                    score,
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.player.cmp(&b.player))
            .then(a.slot.cmp(&b.slot))
    });

    let mut slot_taken: Vec<Option<&Candidate>> = vec![None; template.slots.len()];
    let mut player_used = vec![false; matrix.rows.len()];
    for c in &candidates {
        if slot_taken[c.slot].is_none() && !player_used[c.player] {
            slot_taken[c.slot] = Some(c);
            player_used[c.player] = true;
        }
    }

    let assignments: Vec<Assignment> = template
        .slots
        .iter()
        .zip(&slot_taken)
        .enumerate()
        .map(|(slot_idx, (slot, taken))| match taken {
            Some(c) => Assignment {
                position: slot.position.clone(),
                role: code_for(matrix, catalog, c.role),
                player: Some(matrix.rows[c.player].player.clone()),
                score: Some(c.score),
            },
            None => Assignment {
                position: slot.position.clone(),
                role: slot_roles[slot_idx]
                    .first()
                    .map(|&r| code_for(matrix, catalog, r))
                    .unwrap_or_else(|| slot.roles.join("/").to_ascii_uppercase()),
                player: None,
                score: None,
            },
        })
        .collect();

    let total: f64 = assignments.iter().filter_map(|a| a.score).sum();
    let filled = assignments.iter().filter(|a| a.player.is_some()).count();
    let average = if filled > 0 { total / filled as f64 } else { 0.0 };

    FormationSuggestion {
        name: template.name.clone(),
        total,
        average,
        assignments,
    }
}

/// Fill every template and return the best `top_n`, highest total first.
/// Equal totals keep template order.
pub fn analyze(
    matrix: &ScoreMatrix,
    players: &[NormalizedPlayer],
    templates: &[FormationTemplate],
    catalog: &RoleCatalog,
    options: &FormationOptions,
) -> Vec<FormationSuggestion> {
    let mut suggestions: Vec<FormationSuggestion> = templates
        .iter()
        .map(|t| assign(t, matrix, players, catalog, options.position_eligibility))
        .collect();

    for s in &suggestions {
        let unfilled = s.unfilled();
        if !unfilled.is_empty() {
            log::debug!("{}: no player for {}", s.name, unfilled.join(", "));
        }
    }

    suggestions.sort_by(|a, b| b.total.total_cmp(&a.total));
    suggestions.truncate(options.top_n);
    suggestions
}
