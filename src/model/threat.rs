//! The per-actor threat ledger and its bookkeeping fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EntityId;
use super::timestamp::Millis;
use super::validity::InvalidReason;

/// The previously resolved target, kept as the hysteresis anchor.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub target: EntityId,
    pub at: Millis,
}

/// Record of the last time an active override was invalidated early (target
/// died, vanished, left the room) rather than expiring naturally.
///
/// Observability only; resolution logic never reads it back.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClearedBreadcrumb {
    pub at: Millis,
    pub reason: InvalidReason,
    pub target: EntityId,
}

/// Threat bookkeeping for one hostile actor.
///
/// Owned exclusively by that actor and mutated only through the `sim`
/// operations, never field-by-field by host code. Invariant: every ledger
/// value is strictly positive; zero or negative entries are pruned on the
/// spot, never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatState {
    /// Accumulated threat per candidate.
    pub ledger: BTreeMap<EntityId, f64>,
    /// Most recent provocateur, updated on every provocation event.
    pub last_attacker: Option<EntityId>,
    pub last_aggro_at: Option<Millis>,
    /// Active forced-target window. An expired window is treated as inactive
    /// and cleared on the next resolution.
    pub forced_target: Option<EntityId>,
    pub forced_until: Option<Millis>,
    pub last_taunt_at: Option<Millis>,
    pub cleared_breadcrumb: Option<ClearedBreadcrumb>,
    /// Decay anchor. Advances only by whole-second increments so sub-second
    /// calls are no-ops and no decay debt is lost.
    pub last_decay_at: Option<Millis>,
    pub last_selection: Option<SelectionRecord>,
}

impl ThreatState {
    /// Empty state, created the first time an actor becomes hostile-capable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated threat toward `id` (0.0 when absent).
    pub fn threat_of(&self, id: EntityId) -> f64 {
        self.ledger.get(&id).copied().unwrap_or(0.0)
    }

    /// Highest threat among all entries other than `id`, if any exist.
    pub fn max_threat_excluding(&self, id: EntityId) -> Option<f64> {
        self.ledger
            .iter()
            .filter(|&(&other, _)| other != id)
            .map(|(_, &threat)| threat)
            .fold(None, |top, threat| {
                Some(top.map_or(threat, |t: f64| t.max(threat)))
            })
    }

    /// Whether a forced-target window is active at `now`.
    pub fn override_active(&self, now: Millis) -> bool {
        match (self.forced_target, self.forced_until) {
            (Some(_), Some(until)) => now < until,
            _ => false,
        }
    }
}
