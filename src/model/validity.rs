//! Target-legality and combat-role vocabulary.
//!
//! The engine knows nothing about rooms, stealth, death, or protection rules.
//! It only branches on these closed enums, answered by host callbacks. Adding
//! a reason is a compile-time-visible decision: every consumer matches
//! exhaustively.

use serde::{Deserialize, Serialize};

/// Combat role reported by the host's classifier. Shapes decay retention only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Healer,
    Dps,
    Unknown,
}

/// Why a candidate is not currently a legal target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidReason {
    Dead,
    Missing,
    OutOfRoom,
    Stealth,
    Protected,
}

/// Verdict of the host's `validate` callback for one candidate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(InvalidReason),
}

impl Validity {
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn reason(self) -> Option<InvalidReason> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(reason),
        }
    }
}
