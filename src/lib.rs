//! Aigov: Governance Lifecycle Engine for AI Services
//!
//! `aigov` tracks an AI service through a fixed multi-stage approval
//! lifecycle: planning, risk assessment, development, verification,
//! deployment and recurring operation. It provides two cooperating static
//! graphs and a small record store on top of them:
//!
//! - **Stage pipeline** ([`flow`]): the 23-stage wizard graph with linear
//!   edges, two risk-level forks and converging merge points; answers
//!   "what stage is this route, what comes next, what came before".
//! - **Lifecycle state machine** ([`lifecycle`]): 21 governance states with
//!   an explicit transition table; answers "which transitions are legal"
//!   for status badges and manual advance actions.
//! - **Record store** ([`service`]): service records carrying one current
//!   lifecycle state each, with transition-guarded mutation.
//!
//! Both graphs are process-wide immutable tables built once and read for
//! the process lifetime; every query is a pure function of the table and
//! its argument and is safe to call from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use aigov::flow::{pipeline, Forward};
//! use aigov::lifecycle::{can_transition, LegacyStatus, LifecycleState};
//! use aigov::service::{InMemoryServiceStore, RiskLevel, ServiceId, ServiceRecord};
//!
//! // Resolve a route to a stage and inspect its navigation shape.
//! let flow = pipeline();
//! let stage = flow.stage_by_path("/flow/risk-level-judge").unwrap();
//! if let Forward::Branch(choices) = stage.forward() {
//!     assert_eq!(choices.len(), 2);
//! }
//!
//! // Check transition legality before mutating anything.
//! assert!(can_transition(LifecycleState::Draft, LifecycleState::PlanningCompleted));
//!
//! // Keep records in the store; advance is guarded by the same check.
//! let store = InMemoryServiceStore::new();
//! store.insert(ServiceRecord::new(
//!     "svc-001",
//!     "Loan screening",
//!     RiskLevel::High,
//!     LegacyStatus::Planning,
//! ))?;
//! let record = store.advance(&ServiceId::new("svc-001"), LifecycleState::PlanningCompleted)?;
//! assert_eq!(record.effective_state(), LifecycleState::PlanningCompleted);
//! # Ok::<(), aigov::service::StoreError>(())
//! ```
//!
//! # Module Organization
//!
//! Each module hides one set of decisions likely to change independently:
//!
//! - [`flow`]: the stage table and its route binding (hides the table
//!   representation and the path matching rules)
//! - [`lifecycle`]: the transition tables (hides how the reverse table is
//!   obtained; it is derived, not hand-maintained)
//! - [`service`]: record ownership (hides the map used for concurrent
//!   access)
//!
//! # What this engine does NOT do
//!
//! The wizard pipeline and the lifecycle machine model overlapping but
//! distinct concepts (UI navigation vs. durable record status) and are
//! deliberately not synchronized: advancing the wizard to the deployment
//! stage does not imply a record becomes `Deployed`. Wiring the two
//! together is an integration decision of the owning application.
//! Rendering, localization lookup and persistence are likewise external;
//! every `*_key` string here is an opaque reference.

pub mod flow;
pub mod lifecycle;
pub mod service;

// Re-export commonly used types for convenience
pub use flow::{
    pipeline, Back, BranchOption, FlowError, FlowResult, Forward, Pipeline, Stage, StageId,
};
pub use lifecycle::{
    can_transition, map_legacy_status, transition_label_key, LegacyStatus, LifecycleError,
    LifecycleResult, LifecycleState,
};
pub use service::{InMemoryServiceStore, RiskLevel, ServiceId, ServiceRecord, StoreError, StoreResult};

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use aigov::prelude::*;
///
/// let flow = pipeline();
/// assert_eq!(flow.entry().id(), StageId::RequestForm);
/// ```
pub mod prelude {
    pub use crate::flow::{pipeline, Back, BranchOption, Forward, Pipeline, Stage, StageId};
    pub use crate::lifecycle::{
        can_transition, map_legacy_status, transition_label_key, LegacyStatus, LifecycleState,
    };
    pub use crate::service::{InMemoryServiceStore, RiskLevel, ServiceId, ServiceRecord};
}
