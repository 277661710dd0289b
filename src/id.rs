use crate::model::EntityId;

/// Monotonic combatant-id generator. Hands out each id exactly once, so a
/// roster built through it never aliases two combatants.
///
/// Hosts that assign their own ids can skip this entirely; the engine only
/// ever compares ids it is handed.
#[derive(Debug)]
pub struct IdGenerator {
    next: EntityId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue a sequence, e.g. after reloading a snapshot whose ids are
    /// already taken.
    pub fn starting_from(start: EntityId) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
