//! Collaborator callbacks supplied by the host per call.
//!
//! The engine treats these as total: a missing callback answers
//! `Validity::Valid` / `Role::Unknown`, so a host that cannot classify a
//! candidate degrades to permissive defaults instead of failing.

use crate::model::{EntityId, Role, Validity};

/// Borrowed host callbacks for one engine call.
#[derive(Clone, Copy, Default)]
pub struct ThreatHooks<'a> {
    /// Is this candidate a legal target right now, and if not, why not.
    pub validate: Option<&'a dyn Fn(EntityId) -> Validity>,
    /// Combat-role classifier; shapes decay retention only.
    pub role_of: Option<&'a dyn Fn(EntityId) -> Role>,
}

impl<'a> ThreatHooks<'a> {
    /// No callbacks: every candidate is valid, every role unknown.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_validator(validate: &'a dyn Fn(EntityId) -> Validity) -> Self {
        Self {
            validate: Some(validate),
            role_of: None,
        }
    }

    pub fn validity_of(&self, id: EntityId) -> Validity {
        self.validate.map_or(Validity::Valid, |f| f(id))
    }

    pub fn role_for(&self, id: EntityId) -> Role {
        self.role_of.map_or(Role::Unknown, |f| f(id))
    }
}
