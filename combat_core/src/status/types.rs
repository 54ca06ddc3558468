//! Status kind definitions

use crate::config::{StatusConstants, StatusTuning};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A timed status effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Bleed,
    Poison,
    Burn,
    /// Heal over time
    Regeneration,
}

impl StatusKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Bleed => "bleed",
            StatusKind::Poison => "poison",
            StatusKind::Burn => "burn",
            StatusKind::Regeneration => "regeneration",
        }
    }

    /// Harmful statuses deal damage and can be resisted
    pub fn is_harmful(&self) -> bool {
        !matches!(self, StatusKind::Regeneration)
    }

    pub fn tuning(&self, constants: &StatusConstants) -> StatusTuning {
        match self {
            StatusKind::Bleed => constants.bleed,
            StatusKind::Poison => constants.poison,
            StatusKind::Burn => constants.burn,
            StatusKind::Regeneration => constants.regeneration,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
