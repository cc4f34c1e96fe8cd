//! The capability gate.
//!
//! A gate wraps one protected UI fragment. Per render it yields one of
//! three decisions: mount the fragment, mount the caller's fallback, or
//! mount the fragment inert under the authoring affordance. Per interaction
//! it either passes the event through or captures it into the builder
//! session's toggle for the gate's code.
//!
//! Mode is an explicit two-variant enum; there is no ambient builder flag.

use crate::descriptor::PermissionDescriptor;
use crate::errors::AccessError;
use crate::evaluator::PermissionEvaluator;
use crate::session::{PermissionBuilderSession, ToggleOutcome};

/// Which authority the gate consults this render.
#[derive(Debug, Clone, Copy)]
pub enum GateMode<'a> {
    /// Normal operation: the signed-in user's evaluator decides.
    Normal(&'a PermissionEvaluator),
    /// Builder mode: the authoring session decides and captures clicks.
    Authoring(&'a PermissionBuilderSession),
}

/// Render decision for the wrapped fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Mount the fragment normally.
    Render,
    /// The user lacks the capability: mount the fallback (or nothing).
    Fallback,
    /// Builder mode: mount the fragment inert, with a granted/not-granted
    /// affordance and pointer interaction disabled.
    Authoring {
        /// Whether the target role currently holds the code.
        granted: bool,
        /// Whether a toggle for the code is in flight.
        pending: bool,
    },
}

/// Interaction outcome when the wrapped region is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateInteraction {
    /// Normal mode, capability held: let the event reach the fragment.
    PassThrough,
    /// Normal mode, capability missing: swallow the event.
    Blocked,
    /// Builder mode: the event was captured into a toggle.
    Captured(ToggleOutcome),
}

/// Wrapping primitive placed around any protected UI fragment.
#[derive(Debug, Clone)]
pub struct CapabilityGate {
    descriptor: PermissionDescriptor,
}

impl CapabilityGate {
    /// Create a gate for one capability descriptor.
    pub fn new(descriptor: PermissionDescriptor) -> Self {
        Self { descriptor }
    }

    /// The guarded capability.
    pub fn descriptor(&self) -> &PermissionDescriptor {
        &self.descriptor
    }

    /// Decide what to mount this render.
    pub fn decide(&self, mode: &GateMode<'_>) -> GateDecision {
        match mode {
            GateMode::Normal(evaluator) => {
                if evaluator.has_permission(&self.descriptor.code) {
                    GateDecision::Render
                } else {
                    GateDecision::Fallback
                }
            }
            GateMode::Authoring(session) => GateDecision::Authoring {
                granted: session.is_granted(&self.descriptor.code),
                pending: session.is_pending(&self.descriptor.code),
            },
        }
    }

    /// Route an activation of the wrapped region.
    ///
    /// In builder mode the event never reaches the fragment; it becomes a
    /// toggle of the gate's code on the session's target role.
    pub async fn interact(&self, mode: &GateMode<'_>) -> Result<GateInteraction, AccessError> {
        match mode {
            GateMode::Normal(evaluator) => {
                if evaluator.has_permission(&self.descriptor.code) {
                    Ok(GateInteraction::PassThrough)
                } else {
                    Ok(GateInteraction::Blocked)
                }
            }
            GateMode::Authoring(session) => {
                let outcome = session.toggle_permission(&self.descriptor).await?;
                Ok(GateInteraction::Captured(outcome))
            }
        }
    }
}
