use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use crate::model::Millis;

/// Combat clock resource: current engine time in milliseconds plus a tick
/// counter.
///
/// The `advance_clock` system moves the clock forward at the end of each tick
/// (in `CombatPhase::Last`), so systems see the current time before it
/// advances. The engine only reads `now`; how often the host runs the tick is
/// the host's business.
#[derive(Resource, Debug, Clone)]
pub struct CombatClock {
    pub now: Millis,
    pub tick_ms: u64,
    pub tick_count: u64,
}

impl CombatClock {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            now: 0,
            tick_ms: tick_ms.max(1),
            tick_count: 0,
        }
    }

    /// Advance the clock by one tick's worth of milliseconds.
    pub fn advance(&mut self) {
        self.now = self.now.saturating_add(self.tick_ms);
        self.tick_count += 1;
    }
}

/// Bevy system that advances the combat clock, registered in
/// `CombatPhase::Last`.
pub fn advance_clock(mut clock: ResMut<CombatClock>) {
    clock.advance();
}
