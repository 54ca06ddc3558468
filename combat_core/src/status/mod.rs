//! Status effects - timed percentage-of-max-HP ticks
//!
//! Statuses sit outside the hit pipeline: they are not dodged, blocked or
//! mitigated once applied. A new harmful status may be resisted outright.

mod active;
mod tick;
mod types;

pub use active::ActiveStatus;
pub use tick::{apply_status, tick_statuses, StatusTick};
pub use types::StatusKind;
