use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;

use super::schedule::{CombatPhase, CombatTick};
use super::systems::{apply_threat_commands, resolve_targets};

/// Installs command ingestion and target resolution into the combat tick.
pub struct ThreatPlugin;

impl Plugin for ThreatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(CombatTick, apply_threat_commands.in_set(CombatPhase::Ingest));
        app.add_systems(CombatTick, resolve_targets.in_set(CombatPhase::Resolve));
    }
}
