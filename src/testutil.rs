//! Shared test drivers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::model::{EntityId, Millis, ThreatConfig, ThreatState};
use crate::scenario::Scenario;
use crate::sim::TauntOptions;

/// Apply `ops` random engine operations (provoke / taunt / decay / resolve)
/// at strictly advancing timestamps. Deterministic for a given seed, so
/// invariant tests are reproducible.
pub fn churn(
    scenario: &Scenario,
    state: &mut ThreatState,
    ids: &[EntityId],
    ops: u32,
    seed: u64,
    config: &ThreatConfig,
) {
    assert!(!ids.is_empty(), "churn needs at least one combatant");
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut now: Millis = 0;
    for _ in 0..ops {
        now += rng.random_range(0..2_500);
        let source = ids[rng.random_range(0..ids.len())];
        match rng.random_range(0..4) {
            0 => scenario.provoke(state, source, rng.random_range(-5.0..25.0), now, config),
            1 => scenario.taunt(state, source, TauntOptions::default(), now, config),
            2 => scenario.decay(state, now, config),
            _ => {
                scenario.resolve(state, now, config);
            }
        }
    }
}

/// Assert the strictly-positive ledger invariant.
pub fn assert_ledger_positive(state: &ThreatState) {
    for (&id, &threat) in &state.ledger {
        assert!(
            threat > 0.0,
            "ledger entry {id} holds non-positive threat {threat}"
        );
        assert!(threat.is_finite(), "ledger entry {id} is not finite");
    }
}
