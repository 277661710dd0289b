//! Read-only assist heuristic: should this actor pile onto an ally's fight?
//!
//! Purely advisory: the ally's record is never mutated and no state is
//! shared between actors; an external behavior controller decides what to do
//! with the answer.

use crate::model::{EntityId, Millis, ThreatConfig, ThreatState};

use super::context::ThreatHooks;
use super::resolve::resolve;

/// The ally's resolved top target, but only when the ally was provoked within
/// `assist_window_ms` and that target's threat meets `assist_min_top_threat`.
pub fn evaluate_assist(
    ally: &ThreatState,
    now: Millis,
    config: &ThreatConfig,
    hooks: &ThreatHooks,
) -> Option<EntityId> {
    let config = config.sanitized();
    let provoked_at = ally.last_aggro_at?;
    if now.saturating_sub(provoked_at) > config.assist_window_ms {
        return None;
    }

    // Resolve against a scratch copy; the ally's own record stays untouched.
    let mut scratch = ally.clone();
    let target = resolve(&mut scratch, now, &config, hooks)?;
    (scratch.threat_of(target) >= config.assist_min_top_threat).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::provocation::record_provocation;

    #[test]
    fn assists_a_recently_provoked_ally() {
        let cfg = ThreatConfig::default();
        let mut ally = ThreatState::new();
        record_provocation(&mut ally, 1, 10.0, 0, &cfg, &ThreatHooks::none());

        assert_eq!(
            evaluate_assist(&ally, 2_000, &cfg, &ThreatHooks::none()),
            Some(1)
        );
    }

    #[test]
    fn ally_state_is_never_mutated() {
        let cfg = ThreatConfig::default();
        let mut ally = ThreatState::new();
        record_provocation(&mut ally, 1, 10.0, 0, &cfg, &ThreatHooks::none());

        let before = ally.clone();
        evaluate_assist(&ally, 3_000, &cfg, &ThreatHooks::none());
        assert_eq!(ally, before);
    }

    #[test]
    fn stale_provocation_is_ignored() {
        let cfg = ThreatConfig::default();
        let mut ally = ThreatState::new();
        record_provocation(&mut ally, 1, 100.0, 0, &cfg, &ThreatHooks::none());

        // Past the 5s assist window.
        assert_eq!(evaluate_assist(&ally, 5_001, &cfg, &ThreatHooks::none()), None);
    }

    #[test]
    fn weak_top_threat_is_not_worth_assisting() {
        let cfg = ThreatConfig::default();
        let mut ally = ThreatState::new();
        record_provocation(&mut ally, 1, 3.0, 0, &cfg, &ThreatHooks::none());

        // After decay the target's threat falls below the minimum of 1.
        assert_eq!(evaluate_assist(&ally, 2_500, &cfg, &ThreatHooks::none()), Some(1));
        assert_eq!(evaluate_assist(&ally, 4_900, &cfg, &ThreatHooks::none()), None);
    }

    #[test]
    fn unprovoked_ally_yields_none() {
        let cfg = ThreatConfig::default();
        let ally = ThreatState::new();
        assert_eq!(evaluate_assist(&ally, 0, &cfg, &ThreatHooks::none()), None);
    }
}
