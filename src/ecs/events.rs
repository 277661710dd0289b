use bevy_ecs::message::Message;

use crate::model::EntityId;
use crate::sim::TauntOptions;

/// Provocation commands fed to hostile actors by the host game.
#[derive(Message, Copy, Clone, Debug)]
pub enum ThreatCommand {
    /// Damage (or other aggro) dealt to `actor` by `source`.
    Provoke {
        actor: EntityId,
        source: EntityId,
        amount: f64,
    },
    /// Forced-target override against `actor`.
    Taunt {
        actor: EntityId,
        source: EntityId,
        opts: TauntOptions,
    },
}

/// Emitted whenever a resolution changes an actor's current target
/// (including dropping to "nothing to fight").
#[derive(Message, Copy, Clone, Debug, PartialEq)]
pub struct TargetChanged {
    pub actor: EntityId,
    pub previous: Option<EntityId>,
    pub current: Option<EntityId>,
}
