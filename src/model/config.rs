//! Engine configuration: one immutable value constructed at startup and
//! threaded into every call. No knob is ever read from ambient process state.

use serde::{Deserialize, Serialize};

use super::validity::Role;

/// Floor applied to taunt windows when a caller passes a non-positive
/// duration, so an override can never open an empty window.
pub const MIN_TAUNT_DURATION_MS: u64 = 1;

/// Per-role decay multipliers: tanks shed threat slowly, dps quickly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleDecayMultipliers {
    pub tank: f64,
    pub healer: f64,
    pub dps: f64,
    pub unknown: f64,
}

impl Default for RoleDecayMultipliers {
    fn default() -> Self {
        Self {
            tank: 0.6,
            healer: 1.0,
            dps: 1.2,
            unknown: 1.0,
        }
    }
}

impl RoleDecayMultipliers {
    pub fn for_role(&self, role: Role) -> f64 {
        match role {
            Role::Tank => self.tank,
            Role::Healer => self.healer,
            Role::Dps => self.dps,
            Role::Unknown => self.unknown,
        }
    }
}

/// All recognized engine knobs.
///
/// Every numeric field must be finite and non-negative at the point of use;
/// [`ThreatConfig::sanitized`] repairs malformed values instead of rejecting
/// them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreatConfig {
    /// Ledger drain rate, in threat per whole elapsed second.
    pub decay_per_second: f64,
    /// Entries at or below this floor are removed during decay.
    pub prune_below: f64,
    pub role_decay: RoleDecayMultipliers,
    /// Harsher drain multiplier for out-of-room and stealthed sources.
    pub out_of_sight_decay: f64,
    pub taunt_duration_ms: u64,
    pub taunt_threat_boost: f64,
    pub taunt_force_takeover: bool,
    /// How long a previous selection stays "sticky" for hysteresis.
    pub sticky_window_ms: u64,
    /// A challenger must exceed `prev * (1 + pct) + flat` to win the target.
    pub switch_margin_pct: f64,
    pub switch_margin_flat: f64,
    pub assist_window_ms: u64,
    pub assist_min_top_threat: f64,
}

impl Default for ThreatConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 1.0,
            prune_below: 0.0,
            role_decay: RoleDecayMultipliers::default(),
            out_of_sight_decay: 2.5,
            taunt_duration_ms: 4_000,
            taunt_threat_boost: 1.0,
            taunt_force_takeover: false,
            sticky_window_ms: 4_000,
            switch_margin_pct: 0.15,
            switch_margin_flat: 1.0,
            assist_window_ms: 5_000,
            assist_min_top_threat: 1.0,
        }
    }
}

impl ThreatConfig {
    /// Copy of the config with every knob clamped to a usable value.
    ///
    /// Negative and non-finite rates become 0, and a zero-length taunt window
    /// is stretched to [`MIN_TAUNT_DURATION_MS`].
    pub fn sanitized(&self) -> Self {
        Self {
            decay_per_second: non_negative(self.decay_per_second),
            prune_below: non_negative(self.prune_below),
            role_decay: RoleDecayMultipliers {
                tank: non_negative(self.role_decay.tank),
                healer: non_negative(self.role_decay.healer),
                dps: non_negative(self.role_decay.dps),
                unknown: non_negative(self.role_decay.unknown),
            },
            out_of_sight_decay: non_negative(self.out_of_sight_decay),
            taunt_duration_ms: self.taunt_duration_ms.max(MIN_TAUNT_DURATION_MS),
            taunt_threat_boost: non_negative(self.taunt_threat_boost),
            taunt_force_takeover: self.taunt_force_takeover,
            sticky_window_ms: self.sticky_window_ms,
            switch_margin_pct: non_negative(self.switch_margin_pct),
            switch_margin_flat: non_negative(self.switch_margin_flat),
            assist_window_ms: self.assist_window_ms,
            assist_min_top_threat: non_negative(self.assist_min_top_threat),
        }
    }
}

/// Clamp to a finite non-negative value (NaN, infinities, negatives become 0).
fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ThreatConfig::default();
        assert!((cfg.decay_per_second - 1.0).abs() < f64::EPSILON);
        assert!((cfg.role_decay.tank - 0.6).abs() < f64::EPSILON);
        assert!((cfg.role_decay.dps - 1.2).abs() < f64::EPSILON);
        assert!((cfg.out_of_sight_decay - 2.5).abs() < f64::EPSILON);
        assert_eq!(cfg.taunt_duration_ms, 4_000);
        assert_eq!(cfg.sticky_window_ms, 4_000);
        assert!((cfg.switch_margin_pct - 0.15).abs() < f64::EPSILON);
        assert_eq!(cfg.assist_window_ms, 5_000);
    }

    #[test]
    fn sanitized_repairs_malformed_knobs() {
        let cfg = ThreatConfig {
            decay_per_second: -3.0,
            prune_below: f64::NAN,
            out_of_sight_decay: f64::INFINITY,
            taunt_duration_ms: 0,
            switch_margin_pct: -0.5,
            ..ThreatConfig::default()
        };
        let clean = cfg.sanitized();
        assert!(clean.decay_per_second.abs() < f64::EPSILON);
        assert!(clean.prune_below.abs() < f64::EPSILON);
        assert!(clean.out_of_sight_decay.abs() < f64::EPSILON);
        assert_eq!(clean.taunt_duration_ms, MIN_TAUNT_DURATION_MS);
        assert!(clean.switch_margin_pct.abs() < f64::EPSILON);
    }

    #[test]
    fn role_lookup() {
        let mults = RoleDecayMultipliers::default();
        assert!((mults.for_role(Role::Tank) - 0.6).abs() < f64::EPSILON);
        assert!((mults.for_role(Role::Unknown) - 1.0).abs() < f64::EPSILON);
    }
}
