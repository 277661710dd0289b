/// Caller-supplied clock reading in milliseconds. The engine never reads a
/// wall clock itself; every expiry is an explicit comparison against a `now`
/// passed in by the host.
pub type Millis = u64;

pub const MILLIS_PER_SECOND: Millis = 1_000;

/// Whole seconds elapsed from `anchor` to `now` (0 when `now` is earlier).
pub fn whole_seconds_between(anchor: Millis, now: Millis) -> u64 {
    now.saturating_sub(anchor) / MILLIS_PER_SECOND
}

/// Advance `anchor` by exactly `secs` whole seconds.
///
/// Deliberately not "snap to now": the sub-second remainder stays in front of
/// the anchor so the next decay call can consume it.
pub fn advance_whole_seconds(anchor: Millis, secs: u64) -> Millis {
    anchor.saturating_add(secs.saturating_mul(MILLIS_PER_SECOND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_floors() {
        assert_eq!(whole_seconds_between(0, 999), 0);
        assert_eq!(whole_seconds_between(0, 1_000), 1);
        assert_eq!(whole_seconds_between(0, 2_999), 2);
        assert_eq!(whole_seconds_between(500, 3_499), 2);
    }

    #[test]
    fn earlier_now_is_zero() {
        assert_eq!(whole_seconds_between(5_000, 3_000), 0);
    }

    #[test]
    fn advance_preserves_remainder() {
        // Anchor 500, now 3_499: 2 whole seconds consumed, 999ms remainder
        // stays in front of the new anchor.
        let anchor = advance_whole_seconds(500, 2);
        assert_eq!(anchor, 2_500);
        assert_eq!(whole_seconds_between(anchor, 3_499), 0);
        assert_eq!(whole_seconds_between(anchor, 3_500), 1);
    }
}
