use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::model::{EntityId, ThreatState};

/// The combatant id this bevy entity represents.
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombatantId(pub EntityId);

/// Per-actor threat bookkeeping. One per hostile actor, never shared.
#[derive(Component, Debug, Clone, Default)]
pub struct ThreatTracker {
    pub state: ThreatState,
}

/// The actor's resolved target, refreshed each tick by `resolve_targets`.
#[derive(Component, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentTarget(pub Option<EntityId>);

/// Spawn a hostile-capable actor with empty threat bookkeeping.
pub fn spawn_hostile(world: &mut World, id: EntityId) -> Entity {
    world
        .spawn((
            CombatantId(id),
            ThreatTracker::default(),
            CurrentTarget::default(),
        ))
        .id()
}
