//! Bevy systems wrapping the pure engine functions.

use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::system::{Query, Res};
use tracing::warn;

use crate::model::EntityId;
use crate::sim::{ThreatHooks, apply_taunt, record_provocation, resolve};

use super::clock::CombatClock;
use super::components::{CombatantId, CurrentTarget, ThreatTracker};
use super::events::{TargetChanged, ThreatCommand};
use super::resources::{CombatantDirectory, ThreatSettings};

/// Route queued provocations and taunts to their actors' trackers.
///
/// Commands addressed to an actor with no tracker are dropped with a warning;
/// the host may race a despawn against in-flight commands.
pub fn apply_threat_commands(
    mut commands: MessageReader<ThreatCommand>,
    clock: Res<CombatClock>,
    settings: Res<ThreatSettings>,
    directory: Res<CombatantDirectory>,
    mut trackers: Query<(&CombatantId, &mut ThreatTracker)>,
) {
    let validate = |id: EntityId| directory.validity_of(id);
    let role_of = |id: EntityId| directory.role_of(id);
    let hooks = ThreatHooks {
        validate: Some(&validate),
        role_of: Some(&role_of),
    };

    for command in commands.read() {
        let actor = match *command {
            ThreatCommand::Provoke { actor, .. } | ThreatCommand::Taunt { actor, .. } => actor,
        };
        let Some((_, mut tracker)) = trackers.iter_mut().find(|(id, _)| id.0 == actor) else {
            warn!("Threat command addressed to unknown actor {}", actor);
            continue;
        };
        match *command {
            ThreatCommand::Provoke { source, amount, .. } => {
                record_provocation(
                    &mut tracker.state,
                    source,
                    amount,
                    clock.now,
                    &settings.0,
                    &hooks,
                );
            }
            ThreatCommand::Taunt { source, opts, .. } => {
                apply_taunt(&mut tracker.state, source, opts, clock.now, &settings.0, &hooks);
            }
        }
    }
}

/// Resolve every hostile actor's current target, emitting [`TargetChanged`]
/// when the selection moves (including dropping to no target).
pub fn resolve_targets(
    clock: Res<CombatClock>,
    settings: Res<ThreatSettings>,
    directory: Res<CombatantDirectory>,
    mut actors: Query<(&CombatantId, &mut ThreatTracker, &mut CurrentTarget)>,
    mut changed: MessageWriter<TargetChanged>,
) {
    let validate = |id: EntityId| directory.validity_of(id);
    let role_of = |id: EntityId| directory.role_of(id);
    let hooks = ThreatHooks {
        validate: Some(&validate),
        role_of: Some(&role_of),
    };

    for (actor, mut tracker, mut current) in actors.iter_mut() {
        let next = resolve(&mut tracker.state, clock.now, &settings.0, &hooks);
        if next != current.0 {
            changed.write(TargetChanged {
                actor: actor.0,
                previous: current.0,
                current: next,
            });
            current.0 = next;
        }
    }
}
