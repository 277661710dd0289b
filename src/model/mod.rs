pub mod config;
pub mod threat;
pub mod timestamp;
pub mod validity;

/// Host-assigned identifier for any combat participant.
pub type EntityId = u64;

pub use config::{MIN_TAUNT_DURATION_MS, RoleDecayMultipliers, ThreatConfig};
pub use threat::{ClearedBreadcrumb, SelectionRecord, ThreatState};
pub use timestamp::{MILLIS_PER_SECOND, Millis};
pub use validity::{InvalidReason, Role, Validity};
