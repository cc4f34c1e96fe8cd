//! # Diwan Access
//!
//! Capability gating and the live permission-authoring overlay.
//!
//! In normal operation every protected UI fragment sits behind a
//! [`CapabilityGate`], which consults the pure [`PermissionEvaluator`] built
//! from the signed-in user's grants. When an administrator enters builder
//! mode, the same gates switch to a [`PermissionBuilderSession`]: clicks no
//! longer reach the protected fragments, they toggle the permission code on
//! the role being edited against the remote [`AuthorityStore`].
//!
//! The session is dependency-injected (constructed with an
//! `Arc<dyn AuthorityStore>`), never ambient, and the gate's two modes are an
//! explicit enum dispatch, never a runtime flag.

pub mod authority;
pub mod descriptor;
pub mod errors;
pub mod evaluator;
pub mod gate;
pub mod session;
pub mod toolbar;

pub use authority::{AuthorityStore, GrantedPermission, RoleDetail, RoleSummary, ToggleAction};
pub use descriptor::{CapabilityLevel, PermissionDescriptor};
pub use errors::AccessError;
pub use evaluator::PermissionEvaluator;
pub use gate::{CapabilityGate, GateDecision, GateInteraction, GateMode};
pub use session::{PermissionBuilderSession, ToggleOutcome};
pub use toolbar::{BuilderToolbar, RoleOption};
