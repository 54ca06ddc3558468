//! Origins - ancestry percentage modifiers and the cheat-death exception

use crate::combatant::StatAccumulator;
use crate::source::StatSource;
use crate::types::{Attribute, BaseStats};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest magnitude any single origin modifier may have
pub const MAX_ORIGIN_MODIFIER: f64 = 0.08;

/// Character ancestry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Human,
    Elf,
    Dwarf,
    Orc,
    Demon,
    /// The only origin that can cheat death
    Undead,
}

impl Origin {
    pub fn all() -> &'static [Origin] {
        &[
            Origin::Human,
            Origin::Elf,
            Origin::Dwarf,
            Origin::Orc,
            Origin::Demon,
            Origin::Undead,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Origin::Human => "human",
            Origin::Elf => "elf",
            Origin::Dwarf => "dwarf",
            Origin::Orc => "orc",
            Origin::Demon => "demon",
            Origin::Undead => "undead",
        }
    }

    /// Look up an origin by id, ignoring case
    pub fn from_id(id: &str) -> Option<Origin> {
        let id = id.trim();
        Origin::all()
            .iter()
            .copied()
            .find(|origin| origin.id().eq_ignore_ascii_case(id))
    }

    /// Sparse attribute modifiers; unlisted attributes are untouched
    pub fn modifiers(&self) -> &'static [(Attribute, f64)] {
        match self {
            Origin::Human => &[(Attribute::Charisma, 0.05), (Attribute::Luck, 0.03)],
            Origin::Elf => &[
                (Attribute::Agility, 0.08),
                (Attribute::Intelligence, 0.05),
                (Attribute::Vitality, -0.05),
            ],
            Origin::Dwarf => &[
                (Attribute::Endurance, 0.08),
                (Attribute::Vitality, 0.05),
                (Attribute::Agility, -0.05),
            ],
            Origin::Orc => &[
                (Attribute::Strength, 0.08),
                (Attribute::Vitality, 0.04),
                (Attribute::Intelligence, -0.06),
            ],
            Origin::Demon => &[
                (Attribute::Intelligence, 0.06),
                (Attribute::Strength, 0.04),
                (Attribute::Charisma, -0.08),
            ],
            Origin::Undead => &[
                (Attribute::Endurance, 0.04),
                (Attribute::Wisdom, 0.04),
                (Attribute::Charisma, -0.08),
            ],
        }
    }

    pub fn modifier(&self, attr: Attribute) -> f64 {
        self.modifiers()
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, pct)| *pct)
            .unwrap_or(0.0)
    }

    /// Per-roll chance of surviving a lethal hit at 1 HP
    pub fn cheat_death_chance(&self) -> f64 {
        match self {
            Origin::Undead => 0.05,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Origin::from_id(s).ok_or_else(|| format!("unknown origin '{s}'"))
    }
}

/// Resolve an origin id from caller input; unknown ids behave like no origin
pub fn resolve_origin(id: Option<&str>) -> Option<Origin> {
    let id = id?;
    let origin = Origin::from_id(id);
    if origin.is_none() {
        tracing::warn!(origin = id, "unknown origin, no modifiers applied");
    }
    origin
}

/// `floor(base * (1 + modifier))`
pub(crate) fn scale_attribute(base: f64, modifier: f64) -> f64 {
    // Nudge up so products like 100 * 1.07 don't floor one short
    (base * (1.0 + modifier) + 1e-9).floor()
}

/// Apply an origin's percentage modifiers to raw attributes
pub fn apply_origin_bonuses(base: &BaseStats, origin: Option<Origin>) -> BaseStats {
    let Some(origin) = origin else {
        return *base;
    };
    let mut stats = *base;
    for (attr, pct) in origin.modifiers() {
        let scaled = scale_attribute(f64::from(base.get(*attr)), *pct);
        stats.set(*attr, scaled.max(0.0) as u32);
    }
    stats
}

pub fn has_cheat_death(origin: Option<Origin>) -> bool {
    cheat_death_chance(origin) > 0.0
}

pub fn cheat_death_chance(origin: Option<Origin>) -> f64 {
    origin.map_or(0.0, |o| o.cheat_death_chance())
}

/// Origin modifiers as a stat source
pub struct OriginSource {
    pub origin: Option<Origin>,
}

impl OriginSource {
    pub fn new(origin: Option<Origin>) -> Self {
        OriginSource { origin }
    }
}

impl StatSource for OriginSource {
    fn id(&self) -> &str {
        self.origin.map_or("no_origin", |o| o.id())
    }

    fn priority(&self) -> i32 {
        -50
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if let Some(origin) = self.origin {
            for (attr, pct) in origin.modifiers() {
                *stats.origin_percent.get_mut(*attr) += pct;
            }
        }
    }
}
