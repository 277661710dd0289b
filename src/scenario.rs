//! Chained-builder test scenario: a roster of combatants plus roster-backed
//! engine calls, so tests read as "who is around and what happened" instead
//! of hand-wiring callbacks.

use std::collections::BTreeMap;

use crate::id::IdGenerator;
use crate::model::{
    EntityId, InvalidReason, Millis, Role, ThreatConfig, ThreatState, Validity,
};
use crate::sim::{self, TauntOptions, ThreatHooks};

/// One potential target as the host sees it.
#[derive(Copy, Clone, Debug)]
pub struct Combatant {
    pub role: Role,
    pub validity: Validity,
}

/// Roster of combatants backing the engine's callbacks in tests.
///
/// Unregistered ids answer `Missing` / `Unknown`, matching how a real host
/// reports a despawned entity.
#[derive(Debug, Default)]
pub struct Scenario {
    roster: BTreeMap<EntityId, Combatant>,
    ids: IdGenerator,
}

/// Typed reference to a combatant, enabling chained field mutation.
/// Call [`.id()`](CombatantRef::id) to terminate the chain.
pub struct CombatantRef<'a> {
    scenario: &'a mut Scenario,
    id: EntityId,
}

impl<'a> CombatantRef<'a> {
    fn data_mut(&mut self) -> &mut Combatant {
        self.scenario.roster.get_mut(&self.id).unwrap()
    }

    pub fn role(mut self, v: Role) -> Self {
        self.data_mut().role = v;
        self
    }

    pub fn validity(mut self, v: Validity) -> Self {
        self.data_mut().validity = v;
        self
    }

    /// Terminate the chain and return the entity ID.
    pub fn id(self) -> EntityId {
        self.id
    }
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a combatant (valid, role unknown); chain `.role()` /
    /// `.validity()` and end with `.id()`.
    pub fn combatant(&mut self) -> CombatantRef<'_> {
        let id = self.ids.next_id();
        self.roster.insert(
            id,
            Combatant {
                role: Role::Unknown,
                validity: Validity::Valid,
            },
        );
        CombatantRef { scenario: self, id }
    }

    pub fn set_validity(&mut self, id: EntityId, v: Validity) {
        if let Some(c) = self.roster.get_mut(&id) {
            c.validity = v;
        }
    }

    pub fn set_role(&mut self, id: EntityId, role: Role) {
        if let Some(c) = self.roster.get_mut(&id) {
            c.role = role;
        }
    }

    /// Deregister entirely, as a host would on despawn.
    pub fn remove(&mut self, id: EntityId) {
        self.roster.remove(&id);
    }

    pub fn validity_of(&self, id: EntityId) -> Validity {
        self.roster
            .get(&id)
            .map_or(Validity::Invalid(InvalidReason::Missing), |c| c.validity)
    }

    pub fn role_of(&self, id: EntityId) -> Role {
        self.roster.get(&id).map_or(Role::Unknown, |c| c.role)
    }

    // -- Engine calls with roster-backed hooks --

    pub fn provoke(
        &self,
        state: &mut ThreatState,
        source: EntityId,
        amount: f64,
        now: Millis,
        config: &ThreatConfig,
    ) {
        let validate = |id: EntityId| self.validity_of(id);
        let role_of = |id: EntityId| self.role_of(id);
        let hooks = ThreatHooks {
            validate: Some(&validate),
            role_of: Some(&role_of),
        };
        sim::record_provocation(state, source, amount, now, config, &hooks);
    }

    pub fn decay(&self, state: &mut ThreatState, now: Millis, config: &ThreatConfig) {
        let validate = |id: EntityId| self.validity_of(id);
        let role_of = |id: EntityId| self.role_of(id);
        let hooks = ThreatHooks {
            validate: Some(&validate),
            role_of: Some(&role_of),
        };
        sim::decay(state, now, config, &hooks);
    }

    pub fn taunt(
        &self,
        state: &mut ThreatState,
        source: EntityId,
        opts: TauntOptions,
        now: Millis,
        config: &ThreatConfig,
    ) {
        let validate = |id: EntityId| self.validity_of(id);
        let role_of = |id: EntityId| self.role_of(id);
        let hooks = ThreatHooks {
            validate: Some(&validate),
            role_of: Some(&role_of),
        };
        sim::apply_taunt(state, source, opts, now, config, &hooks);
    }

    pub fn resolve(
        &self,
        state: &mut ThreatState,
        now: Millis,
        config: &ThreatConfig,
    ) -> Option<EntityId> {
        let validate = |id: EntityId| self.validity_of(id);
        let role_of = |id: EntityId| self.role_of(id);
        let hooks = ThreatHooks {
            validate: Some(&validate),
            role_of: Some(&role_of),
        };
        sim::resolve(state, now, config, &hooks)
    }

    pub fn assist(
        &self,
        ally: &ThreatState,
        now: Millis,
        config: &ThreatConfig,
    ) -> Option<EntityId> {
        let validate = |id: EntityId| self.validity_of(id);
        let role_of = |id: EntityId| self.role_of(id);
        let hooks = ThreatHooks {
            validate: Some(&validate),
            role_of: Some(&role_of),
        };
        sim::evaluate_assist(ally, now, config, &hooks)
    }
}
