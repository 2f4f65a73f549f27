//! Position tags
//!
//! Exports describe where a player can play with strings such as
//! `D (RLC), DM, M/AM (R), ST (C)`. Formation slots use a terser form
//! (`D R`, `DC`, `D/WB L`, `AMC`). Both expand into [`PositionTag`]s: a base
//! position plus an optional side.

use std::collections::BTreeSet;
use std::fmt;

/// Base positions that carry a side, longest first so `AMC` splits as `AM`+`C`.
const SIDED_BASES: &[&str] = &["WB", "AM", "ST", "D", "M"];

/// A single base position with an optional side (`R`, `L`, `C`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionTag {
    pub base: String,
    pub side: Option<char>,
}

impl PositionTag {
    pub fn new(base: &str, side: Option<char>) -> Self {
        Self {
            base: base.trim().to_ascii_uppercase(),
            side,
        }
    }

    /// Slot/player compatibility: same base, and sides agree unless either is open.
    pub fn matches(&self, other: &PositionTag) -> bool {
        if self.base != other.base {
            return false;
        }
        match (self.side, other.side) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }

    pub fn group(&self) -> Option<PositionGroup> {
        PositionGroup::for_base(&self.base)
    }
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Some(side) => write!(f, "{}{}", self.base, side),
            None => write!(f, "{}", self.base),
        }
    }
}

/// Coarse groups used by the report's quick filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 4] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defender,
        PositionGroup::Midfielder,
        PositionGroup::Forward,
    ];

    fn for_base(base: &str) -> Option<Self> {
        match base {
            "GK" => Some(Self::Goalkeeper),
            "D" | "WB" | "CB" | "FB" => Some(Self::Defender),
            "DM" | "M" | "AM" => Some(Self::Midfielder),
            "ST" | "F" | "CF" => Some(Self::Forward),
            _ => None,
        }
    }

    /// Short code used in filter attributes
    pub fn code(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "D",
            Self::Midfielder => "M",
            Self::Forward => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goalkeepers",
            Self::Defender => "Defenders",
            Self::Midfielder => "Midfielders",
            Self::Forward => "Forwards",
        }
    }
}

fn is_side(c: char) -> bool {
    matches!(c, 'R' | 'L' | 'C')
}

/// Split a compact token such as `DC`, `AMC` or `STR` into base and side.
fn split_compact(token: &str) -> PositionTag {
    let token = token.trim().to_ascii_uppercase();
    if let Some(last) = token.chars().last() {
        if is_side(last) && token.len() > 1 {
            let prefix = &token[..token.len() - 1];
            if SIDED_BASES.contains(&prefix) {
                return PositionTag::new(prefix, Some(last));
            }
        }
    }
    PositionTag::new(&token, None)
}

fn expand_part(part: &str) -> Vec<PositionTag> {
    let part = part.trim();
    if part.is_empty() {
        return Vec::new();
    }

    // "D/WB (RL)"
    if let (Some(open), Some(close)) = (part.find('('), part.rfind(')')) {
        if close > open {
            let sides: Vec<char> = part[open + 1..close]
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .filter(|c| is_side(*c))
                .collect();
            let mut tags = Vec::new();
            for base in part[..open].split('/').map(str::trim).filter(|b| !b.is_empty()) {
                if sides.is_empty() {
                    tags.push(PositionTag::new(base, None));
                }
                for side in &sides {
                    tags.push(PositionTag::new(base, Some(*side)));
                }
            }
            return tags;
        }
    }

    // "D/WB R", "ST C"
    if let Some((bases, side)) = part.rsplit_once(char::is_whitespace) {
        let side = side.trim().to_ascii_uppercase();
        if side.len() == 1 && side.chars().all(is_side) {
            let side = side.chars().next();
            return bases
                .split('/')
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(|b| PositionTag::new(b, side))
                .collect();
        }
    }

    // "DC", "AMC", "DM", "GK"
    part.split('/')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(split_compact)
        .collect()
}

/// Expand a comma-separated position description into unique tags, in
/// first-seen order.
pub fn parse_positions(text: &str) -> Vec<PositionTag> {
    let mut seen = BTreeSet::new();
    let mut tags = Vec::new();
    for part in text.split(',') {
        for tag in expand_part(part) {
            if seen.insert(tag.clone()) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Filter groups a set of tags belongs to, sorted and unique.
pub fn groups_of(tags: &[PositionTag]) -> Vec<PositionGroup> {
    let set: BTreeSet<PositionGroup> = tags.iter().filter_map(|t| t.group()).collect();
    set.into_iter().collect()
}

/// Whether any player tag satisfies any slot tag.
pub fn eligible(slot: &[PositionTag], player: &[PositionTag]) -> bool {
    slot.iter().any(|s| player.iter().any(|p| s.matches(p)))
}
