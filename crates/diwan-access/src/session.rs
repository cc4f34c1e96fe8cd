//! The permission-authoring session.
//!
//! One process-wide editing session: which role is being edited, which codes
//! that role currently holds, and the toggle path against the authority
//! store. The local `granted` set is a read-through projection of the
//! authority store, never authoritative: it is refetched in full on every
//! target change and only updated after the server reports which action a
//! toggle performed.
//!
//! State machine:
//!
//! ```text
//! Inactive → enter() → Active{no target} → set_target_role() →
//! Active{targeted} → toggle_permission()* → exit() → Inactive
//! ```
//!
//! Async calls take `&self`; the interior lock is never held across an
//! await. A generation counter stamps every reset (enter, exit, target
//! change) so a response that resolves after a reset is discarded instead of
//! corrupting the newer state.

use crate::authority::{AuthorityStore, ToggleAction};
use crate::descriptor::PermissionDescriptor;
use crate::errors::AccessError;
use diwan_core::{PermissionCode, RoleId};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Result of a toggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server performed the action and the local set now reflects it.
    Applied(ToggleAction),
    /// A request for this code is already in flight; no second request was
    /// issued.
    AlreadyPending,
    /// The session was reset (exit or target change) while the request was
    /// outstanding; the response was discarded.
    Superseded,
}

#[derive(Debug, Default)]
struct ActiveState {
    target: Option<RoleId>,
    granted: HashSet<PermissionCode>,
    pending: HashSet<PermissionCode>,
}

#[derive(Debug)]
enum SessionState {
    Inactive,
    Active(ActiveState),
}

#[derive(Debug)]
struct Inner {
    /// Bumped on every reset; in-flight responses carrying an older value
    /// are discarded.
    generation: u64,
    state: SessionState,
}

/// The process-wide builder session, dependency-injected wherever gates and
/// chrome need it.
pub struct PermissionBuilderSession {
    authority: Arc<dyn AuthorityStore>,
    inner: Mutex<Inner>,
}

impl PermissionBuilderSession {
    /// Create an inactive session bound to an authority store.
    pub fn new(authority: Arc<dyn AuthorityStore>) -> Self {
        Self {
            authority,
            inner: Mutex::new(Inner {
                generation: 0,
                state: SessionState::Inactive,
            }),
        }
    }

    /// Enter builder mode. Idempotent: entering an active session keeps its
    /// target and grants.
    pub fn enter(&self) {
        let mut inner = self.inner.lock();
        if matches!(inner.state, SessionState::Active(_)) {
            debug!("builder session already active");
            return;
        }
        debug!("entering builder mode");
        inner.generation += 1;
        inner.state = SessionState::Active(ActiveState::default());
    }

    /// Exit builder mode, clearing the target and both code sets.
    pub fn exit(&self) {
        let mut inner = self.inner.lock();
        if matches!(inner.state, SessionState::Inactive) {
            return;
        }
        debug!("exiting builder mode");
        inner.generation += 1;
        inner.state = SessionState::Inactive;
    }

    /// Whether builder mode is on.
    pub fn is_active(&self) -> bool {
        matches!(self.inner.lock().state, SessionState::Active(_))
    }

    /// The role currently being edited.
    pub fn target_role(&self) -> Option<RoleId> {
        match &self.inner.lock().state {
            SessionState::Active(active) => active.target.clone(),
            SessionState::Inactive => None,
        }
    }

    /// Whether the target role currently holds `code`.
    pub fn is_granted(&self, code: &PermissionCode) -> bool {
        match &self.inner.lock().state {
            SessionState::Active(active) => active.granted.contains(code),
            SessionState::Inactive => false,
        }
    }

    /// Whether a toggle for `code` is outstanding.
    pub fn is_pending(&self, code: &PermissionCode) -> bool {
        match &self.inner.lock().state {
            SessionState::Active(active) => active.pending.contains(code),
            SessionState::Inactive => false,
        }
    }

    /// Number of codes the target role currently holds.
    pub fn granted_count(&self) -> usize {
        match &self.inner.lock().state {
            SessionState::Active(active) => active.granted.len(),
            SessionState::Inactive => 0,
        }
    }

    /// Select the role to edit and refetch its full permission set.
    ///
    /// The previous role's codes are discarded immediately, so the UI never
    /// shows stale grants against the new target. On remote failure the
    /// target stays selected and `granted` stays empty.
    pub async fn set_target_role(&self, role: RoleId) -> Result<(), AccessError> {
        let generation = {
            let mut inner = self.inner.lock();
            let generation = inner.generation + 1;
            inner.generation = generation;
            match &mut inner.state {
                SessionState::Inactive => {
                    warn!(role = %role, "set_target_role: builder session is not active");
                    return Err(AccessError::SessionInactive);
                }
                SessionState::Active(active) => {
                    debug!(role = %role, "targeting role");
                    active.target = Some(role.clone());
                    active.granted.clear();
                    active.pending.clear();
                }
            }
            generation
        };

        let fetched = self.authority.role_detail(&role).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(role = %role, "discarding stale role refetch");
            return Ok(());
        }
        let SessionState::Active(active) = &mut inner.state else {
            return Ok(());
        };
        match fetched {
            Ok(detail) => {
                active.granted = detail
                    .permissions
                    .into_iter()
                    .map(|permission| permission.code)
                    .collect();
                debug!(role = %role, granted = active.granted.len(), "role permission set loaded");
                Ok(())
            }
            Err(err) => {
                error!(role = %role, error = %err, "role refetch failed");
                Err(err)
            }
        }
    }

    /// Toggle one permission on the target role.
    ///
    /// Requires an active session with a target. The local set is updated
    /// only from the server's report of which action occurred; it is never
    /// pre-emptively flipped. Repeated toggles for a code whose request is
    /// still in flight are de-duplicated and issue no second request.
    pub async fn toggle_permission(
        &self,
        descriptor: &PermissionDescriptor,
    ) -> Result<ToggleOutcome, AccessError> {
        let code = &descriptor.code;
        let (generation, role) = {
            let mut inner = self.inner.lock();
            let generation = inner.generation;
            match &mut inner.state {
                SessionState::Inactive => {
                    warn!(code = %code, "toggle_permission: builder session is not active");
                    return Err(AccessError::SessionInactive);
                }
                SessionState::Active(active) => {
                    let Some(role) = active.target.clone() else {
                        warn!(code = %code, "toggle_permission: no target role selected");
                        return Err(AccessError::NoTargetRole);
                    };
                    if !active.pending.insert(code.clone()) {
                        debug!(code = %code, "toggle already in flight");
                        return Ok(ToggleOutcome::AlreadyPending);
                    }
                    (generation, role)
                }
            }
        };

        let result = self.authority.toggle_permission(&role, descriptor).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            // The session was reset while the request was outstanding; its
            // pending set no longer contains this code.
            debug!(code = %code, "discarding stale toggle response");
            return match result {
                Ok(_) => Ok(ToggleOutcome::Superseded),
                Err(err) => Err(err),
            };
        }
        let SessionState::Active(active) = &mut inner.state else {
            return Ok(ToggleOutcome::Superseded);
        };
        active.pending.remove(code);
        match result {
            Ok(ToggleAction::Added) => {
                debug!(code = %code, role = %role, "permission granted");
                active.granted.insert(code.clone());
                Ok(ToggleOutcome::Applied(ToggleAction::Added))
            }
            Ok(ToggleAction::Removed) => {
                debug!(code = %code, role = %role, "permission revoked");
                active.granted.remove(code);
                Ok(ToggleOutcome::Applied(ToggleAction::Removed))
            }
            Err(err) => {
                error!(code = %code, role = %role, error = %err, "toggle failed");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for PermissionBuilderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionBuilderSession")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
