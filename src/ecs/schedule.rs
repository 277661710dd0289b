use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one combat tick. Run manually via
/// `app.world_mut().run_schedule(CombatTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombatTick;

/// Ordered phases within each combat tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatPhase {
    /// Message queue rotation.
    First,
    /// Apply queued provocations and taunts.
    Ingest,
    /// Per-actor target resolution.
    Resolve,
    /// Clock advance.
    Last,
}

/// Build a `CombatTick` schedule with phase ordering and the clock system
/// installed. Threat systems hook into it through [`ThreatPlugin`].
///
/// [`ThreatPlugin`]: super::plugin::ThreatPlugin
pub fn configure_combat_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(CombatTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            CombatPhase::First,
            CombatPhase::Ingest,
            CombatPhase::Resolve,
            CombatPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_clock.in_set(CombatPhase::Last));
    schedule
}
