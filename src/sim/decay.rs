//! Time-based threat drain.
//!
//! Decay consumes whole seconds only: a sub-second call returns the state
//! unchanged and leaves the anchor alone, so rapid successive ticks never
//! lose fractional decay debt and results stay independent of caller jitter.

use crate::model::timestamp::{advance_whole_seconds, whole_seconds_between};
use crate::model::{EntityId, InvalidReason, Millis, ThreatConfig, ThreatState, Validity};

use super::context::ThreatHooks;

/// Age the ledger forward to `now`.
///
/// Per entry the drain is `decay_per_second * elapsed * role * visibility`.
/// Candidates the host reports dead, protected, or missing are pruned
/// immediately; out-of-room and stealthed candidates drain at the harsher
/// out-of-sight multiplier. Entries at or below `prune_below` are dropped.
pub fn decay(state: &mut ThreatState, now: Millis, config: &ThreatConfig, hooks: &ThreatHooks) {
    let config = config.sanitized();
    let anchor = state.last_decay_at.or(state.last_aggro_at).unwrap_or(now);
    let elapsed = whole_seconds_between(anchor, now);
    if elapsed == 0 {
        return;
    }

    let base = config.decay_per_second * elapsed as f64;
    let ids: Vec<EntityId> = state.ledger.keys().copied().collect();
    for id in ids {
        let visibility = match hooks.validity_of(id) {
            Validity::Valid => 1.0,
            Validity::Invalid(InvalidReason::OutOfRoom | InvalidReason::Stealth) => {
                config.out_of_sight_decay
            }
            Validity::Invalid(
                InvalidReason::Dead | InvalidReason::Protected | InvalidReason::Missing,
            ) => {
                state.ledger.remove(&id);
                continue;
            }
        };
        let drain = base * config.role_decay.for_role(hooks.role_for(id)) * visibility;
        let remaining = state.threat_of(id) - drain;
        if remaining <= config.prune_below {
            state.ledger.remove(&id);
        } else {
            state.ledger.insert(id, remaining);
        }
    }

    state.last_decay_at = Some(advance_whole_seconds(anchor, elapsed));
}
