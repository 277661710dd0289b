pub mod assist;
pub mod context;
pub mod decay;
pub mod provocation;
pub mod resolve;
pub mod taunt;

pub use assist::evaluate_assist;
pub use context::ThreatHooks;
pub use decay::decay;
pub use provocation::record_provocation;
pub use resolve::resolve;
pub use taunt::{SOFT_TAUNT_MARGIN, TauntOptions, apply_taunt};
