use std::collections::BTreeMap;

use bevy_ecs::resource::Resource;

use crate::model::{EntityId, InvalidReason, Role, ThreatConfig, Validity};

/// Engine tuning knobs as an ECS resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct ThreatSettings(pub ThreatConfig);

/// Host-maintained registry answering target legality and combat roles.
/// This is the caller-supplied judgement seam: the engine never decides
/// on its own whether someone is dead, hidden, or protected.
///
/// Unregistered ids answer `Missing` / `Unknown`, matching how a host
/// reports a despawned entity.
#[derive(Resource, Debug, Clone, Default)]
pub struct CombatantDirectory {
    roles: BTreeMap<EntityId, Role>,
    validity: BTreeMap<EntityId, Validity>,
}

impl CombatantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a combatant as a valid target with the given role.
    pub fn register(&mut self, id: EntityId, role: Role) {
        self.roles.insert(id, role);
        self.validity.insert(id, Validity::Valid);
    }

    pub fn set_validity(&mut self, id: EntityId, v: Validity) {
        self.validity.insert(id, v);
    }

    pub fn set_role(&mut self, id: EntityId, role: Role) {
        self.roles.insert(id, role);
    }

    /// Deregister entirely, as on despawn.
    pub fn deregister(&mut self, id: EntityId) {
        self.roles.remove(&id);
        self.validity.remove(&id);
    }

    pub fn validity_of(&self, id: EntityId) -> Validity {
        self.validity
            .get(&id)
            .copied()
            .unwrap_or(Validity::Invalid(InvalidReason::Missing))
    }

    pub fn role_of(&self, id: EntityId) -> Role {
        self.roles.get(&id).copied().unwrap_or(Role::Unknown)
    }
}
