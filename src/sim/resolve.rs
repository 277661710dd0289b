//! Target resolution: override window, ranked ledger walk, legacy fallback,
//! and anti-thrash hysteresis.
//!
//! Decay is folded into the call so behavior loops can never forget to age
//! the ledger before selecting.

use std::cmp::Ordering;

use crate::model::threat::SelectionRecord;
use crate::model::{
    ClearedBreadcrumb, EntityId, InvalidReason, Millis, ThreatConfig, ThreatState, Validity,
};

use super::context::ThreatHooks;
use super::decay::decay;

/// Resolve the actor's current target, updating decay, override-expiry, and
/// selection bookkeeping in one pass. `None` is not an error; it means
/// "nothing to fight".
pub fn resolve(
    state: &mut ThreatState,
    now: Millis,
    config: &ThreatConfig,
    hooks: &ThreatHooks,
) -> Option<EntityId> {
    let config = config.sanitized();
    decay(state, now, &config, hooks);

    // Tier 1: active override window.
    if let (Some(target), Some(until)) = (state.forced_target, state.forced_until) {
        if now < until {
            match hooks.validity_of(target) {
                Validity::Valid => {
                    state.last_selection = Some(SelectionRecord { target, at: now });
                    return Some(target);
                }
                Validity::Invalid(reason) => {
                    // Don't stare at an unreachable taunter for the rest of
                    // the window: clear now and leave a breadcrumb.
                    tracing::debug!("Forced target {} invalidated early: {:?}", target, reason);
                    state.cleared_breadcrumb = Some(ClearedBreadcrumb { at: now, reason, target });
                    state.forced_target = None;
                    state.forced_until = None;
                }
            }
        } else {
            // Natural expiry: no breadcrumb.
            state.forced_target = None;
            state.forced_until = None;
        }
    }

    // Tier 2: ranked ledger walk.
    let mut winner = ranked_walk(state, hooks);

    // Tier 3: legacy fallback to the most recent provocateur.
    if winner.is_none() {
        if let Some(last) = state.last_attacker {
            if hooks.validity_of(last).is_valid() {
                winner = Some((last, state.threat_of(last)));
            }
        }
    }

    // Tier 4: hysteresis. A challenger must clearly beat the incumbent while
    // the previous selection is fresh and still legal.
    if let (Some((challenger, challenger_threat)), Some(prev)) = (winner, state.last_selection) {
        if challenger != prev.target
            && now.saturating_sub(prev.at) <= config.sticky_window_ms
            && hooks.validity_of(prev.target).is_valid()
        {
            let incumbent_threat = state.threat_of(prev.target);
            let clear_bar =
                incumbent_threat * (1.0 + config.switch_margin_pct) + config.switch_margin_flat;
            if challenger_threat < clear_bar {
                winner = Some((prev.target, incumbent_threat));
            }
        }
    }

    let chosen = winner.map(|(id, _)| id);
    state.last_selection = chosen.map(|target| SelectionRecord { target, at: now });
    chosen
}

/// Walk ledger entries by `(threat desc, id asc)` and return the first valid
/// candidate. Stealthed entries are pruned outright: stealth causes genuine
/// forgetting, so a reappearing source starts over instead of snapping back.
/// Other invalidity reasons only skip the candidate for this pass.
fn ranked_walk(state: &mut ThreatState, hooks: &ThreatHooks) -> Option<(EntityId, f64)> {
    let mut ranked: Vec<(EntityId, f64)> = state
        .ledger
        .iter()
        .map(|(&id, &threat)| (id, threat))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    for (id, threat) in ranked {
        match hooks.validity_of(id) {
            Validity::Valid => return Some((id, threat)),
            Validity::Invalid(InvalidReason::Stealth) => {
                state.ledger.remove(&id);
            }
            Validity::Invalid(
                InvalidReason::Dead
                | InvalidReason::Missing
                | InvalidReason::OutOfRoom
                | InvalidReason::Protected,
            ) => {}
        }
    }
    None
}
