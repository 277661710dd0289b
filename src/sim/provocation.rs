//! Ledger updates from damage and forced-aggro events.

use crate::model::{EntityId, Millis, ThreatConfig, ThreatState};

use super::context::ThreatHooks;
use super::decay::decay;

/// Record a provocation (typically damage dealt) from `source`.
///
/// Decay runs first so stale entries shrink before the new contribution
/// lands and an old high-water mark never masks fresh damage. `amount` is
/// clamped (negative and NaN become 0) and a zero result is never stored,
/// but even a zero-amount call decays the ledger and stamps
/// `last_attacker`/`last_aggro_at`, which is what taunts rely on.
pub fn record_provocation(
    state: &mut ThreatState,
    source: EntityId,
    amount: f64,
    now: Millis,
    config: &ThreatConfig,
    hooks: &ThreatHooks,
) {
    let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };

    decay(state, now, config, hooks);

    if amount > 0.0 {
        *state.ledger.entry(source).or_insert(0.0) += amount;
    }
    state.last_attacker = Some(source);
    state.last_aggro_at = Some(now);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_threat_and_stamps_attacker() {
        let mut state = ThreatState::new();
        let cfg = ThreatConfig::default();
        record_provocation(&mut state, 1, 5.0, 0, &cfg, &ThreatHooks::none());
        assert!((state.threat_of(1) - 5.0).abs() < f64::EPSILON);
        assert_eq!(state.last_attacker, Some(1));
        assert_eq!(state.last_aggro_at, Some(0));

        record_provocation(&mut state, 1, 2.5, 500, &cfg, &ThreatHooks::none());
        assert!((state.threat_of(1) - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_and_nan_amounts_clamp_to_zero() {
        let mut state = ThreatState::new();
        let cfg = ThreatConfig::default();
        record_provocation(&mut state, 1, -10.0, 0, &cfg, &ThreatHooks::none());
        record_provocation(&mut state, 1, f64::NAN, 10, &cfg, &ThreatHooks::none());
        assert!(!state.ledger.contains_key(&1));
        // Bookkeeping still updates.
        assert_eq!(state.last_attacker, Some(1));
        assert_eq!(state.last_aggro_at, Some(10));
    }

    #[test]
    fn zero_amount_never_stores_an_entry() {
        let mut state = ThreatState::new();
        let cfg = ThreatConfig::default();
        record_provocation(&mut state, 4, 0.0, 100, &cfg, &ThreatHooks::none());
        assert!(state.ledger.is_empty());
        assert_eq!(state.last_attacker, Some(4));
    }

    #[test]
    fn decays_before_adding() {
        let mut state = ThreatState::new();
        let cfg = ThreatConfig::default();
        record_provocation(&mut state, 1, 10.0, 0, &cfg, &ThreatHooks::none());
        // 3 seconds later: the old 10 shrinks to 7 before the new 4 lands.
        record_provocation(&mut state, 1, 4.0, 3_000, &cfg, &ThreatHooks::none());
        assert!((state.threat_of(1) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn different_sources_keep_separate_entries() {
        let mut state = ThreatState::new();
        let cfg = ThreatConfig::default();
        record_provocation(&mut state, 1, 5.0, 0, &cfg, &ThreatHooks::none());
        record_provocation(&mut state, 2, 3.0, 0, &cfg, &ThreatHooks::none());
        assert!((state.threat_of(1) - 5.0).abs() < f64::EPSILON);
        assert!((state.threat_of(2) - 3.0).abs() < f64::EPSILON);
        assert_eq!(state.last_attacker, Some(2));
    }
}
