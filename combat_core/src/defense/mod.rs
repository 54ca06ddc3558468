//! Defense system - Dodge, zone armour, magic resist

mod armour;
mod evasion;
mod resistance;

pub use armour::{armour_reduction_fraction, calculate_armour_reduction};
pub use evasion::{dodge_chance, roll_dodge};
pub use resistance::{calculate_resistance_mitigation, magic_resist};
