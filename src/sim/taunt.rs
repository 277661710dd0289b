//! Forced-target override ("provoke"/"taunt").
//!
//! A taunt layers a time-bounded forced target on top of the ledger without
//! permanently corrupting it: the soft variant boosts the taunter but keeps
//! it strictly below the true top threat, so ordinary ranking resumes exactly
//! where it would have been once the window lapses.

use crate::model::{EntityId, MIN_TAUNT_DURATION_MS, Millis, ThreatConfig, ThreatState};

use super::context::ThreatHooks;
use super::provocation::record_provocation;

/// Gap kept between a soft taunter and the true top threat. Named rather
/// than configurable: the taunter must end strictly below, never equal.
pub const SOFT_TAUNT_MARGIN: f64 = 0.001;

/// Shape of one taunt application. `Default` mirrors the config defaults.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TauntOptions {
    pub duration_ms: u64,
    pub threat_boost: f64,
    /// Forced takeover: the taunter genuinely becomes (and stays) top threat.
    pub force_takeover: bool,
}

impl Default for TauntOptions {
    fn default() -> Self {
        Self {
            duration_ms: 4_000,
            threat_boost: 1.0,
            force_takeover: false,
        }
    }
}

impl TauntOptions {
    pub fn from_config(config: &ThreatConfig) -> Self {
        Self {
            duration_ms: config.taunt_duration_ms,
            threat_boost: config.taunt_threat_boost,
            force_takeover: config.taunt_force_takeover,
        }
    }
}

/// Apply a forced-target window for `source`.
pub fn apply_taunt(
    state: &mut ThreatState,
    source: EntityId,
    opts: TauntOptions,
    now: Millis,
    config: &ThreatConfig,
    hooks: &ThreatHooks,
) {
    let config = config.sanitized();
    let duration_ms = opts.duration_ms.max(MIN_TAUNT_DURATION_MS);
    let boost = if opts.threat_boost.is_finite() {
        opts.threat_boost.max(0.0)
    } else {
        0.0
    };

    // Zero-amount provocation: decay runs and the source becomes the
    // last attacker even though no threat lands yet.
    record_provocation(state, source, 0.0, now, &config, hooks);

    let current = state.threat_of(source);
    let raised = match state.max_threat_excluding(source) {
        Some(top_others) if opts.force_takeover => (current + boost).max(top_others + boost),
        Some(top_others) => (current + boost).min(top_others - SOFT_TAUNT_MARGIN),
        // Nothing to stay below (or above): the boost stands on its own.
        None => current + boost,
    };
    // "Raised to", never lowered: a taunter already at top keeps its threat.
    let value = raised.max(current);
    if value > 0.0 {
        state.ledger.insert(source, value);
    }

    state.forced_target = Some(source);
    state.forced_until = Some(now.saturating_add(duration_ms));
    state.last_taunt_at = Some(now);
}
