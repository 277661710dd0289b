use bevy_app::App;
use bevy_ecs::message::{MessageRegistry, message_update_system};
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use crate::model::ThreatConfig;

use super::clock::CombatClock;
use super::events::{TargetChanged, ThreatCommand};
use super::plugin::ThreatPlugin;
use super::resources::{CombatantDirectory, ThreatSettings};
use super::schedule::{CombatPhase, configure_combat_schedule};

/// Build a headless app with the combat clock, combatant directory, message
/// types, and threat systems installed.
///
/// The caller drives ticks manually:
///
/// ```ignore
/// let mut app = build_combat_app(100, ThreatConfig::default());
/// app.world_mut().run_schedule(CombatTick);
/// ```
pub fn build_combat_app(tick_ms: u64, config: ThreatConfig) -> App {
    let mut app = App::empty();

    app.insert_resource(CombatClock::new(tick_ms));
    app.insert_resource(ThreatSettings(config));
    app.insert_resource(CombatantDirectory::new());

    MessageRegistry::register_message::<ThreatCommand>(app.world_mut());
    MessageRegistry::register_message::<TargetChanged>(app.world_mut());

    let mut schedule = configure_combat_schedule(ExecutorKind::SingleThreaded);
    schedule.add_systems(message_update_system.in_set(CombatPhase::First));
    app.add_schedule(schedule);

    app.add_plugins(ThreatPlugin);
    app
}
