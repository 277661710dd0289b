pub mod ecs;
pub mod id;
pub mod model;
pub mod scenario;
pub mod sim;
pub mod testutil;

pub use id::IdGenerator;
pub use model::{
    ClearedBreadcrumb, EntityId, InvalidReason, Millis, Role, RoleDecayMultipliers,
    SelectionRecord, ThreatConfig, ThreatState, Validity,
};
pub use sim::{
    SOFT_TAUNT_MARGIN, TauntOptions, ThreatHooks, apply_taunt, decay, evaluate_assist,
    record_provocation, resolve,
};
