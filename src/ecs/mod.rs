//! Bevy ECS integration: components, messages, resources, and a manually
//! driven `CombatTick` schedule wrapping the pure engine functions.

pub mod app;
pub mod clock;
pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod systems;

pub use app::build_combat_app;
pub use clock::{CombatClock, advance_clock};
pub use components::{CombatantId, CurrentTarget, ThreatTracker, spawn_hostile};
pub use events::{TargetChanged, ThreatCommand};
pub use plugin::ThreatPlugin;
pub use resources::{CombatantDirectory, ThreatSettings};
pub use schedule::{CombatPhase, CombatTick, configure_combat_schedule};
pub use systems::{apply_threat_commands, resolve_targets};
