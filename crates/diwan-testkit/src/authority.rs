//! In-memory `AuthorityStore` double.

use async_trait::async_trait;
use diwan_access::{
    AccessError, AuthorityStore, GrantedPermission, PermissionDescriptor, RoleDetail, RoleSummary,
    ToggleAction,
};
use diwan_core::RoleId;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    roles: Vec<RoleDetail>,
    fail_next_detail: Option<String>,
    fail_next_toggle: Option<String>,
    detail_calls: usize,
    toggle_calls: usize,
    gate: Option<Arc<Notify>>,
}

/// Handle to release toggle requests held by [`InMemoryAuthority::hold_toggles`].
#[derive(Debug, Clone)]
pub struct ToggleGate(Arc<Notify>);

impl ToggleGate {
    /// Let exactly one held toggle request proceed.
    pub fn release_one(&self) {
        self.0.notify_one();
    }
}

/// In-memory authority store.
///
/// Toggle semantics mirror the real assign endpoint: the server flips
/// membership and reports which action it performed.
#[derive(Debug, Default)]
pub struct InMemoryAuthority {
    inner: Mutex<Inner>,
}

impl InMemoryAuthority {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with roles.
    pub fn with_roles(roles: Vec<RoleDetail>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                roles,
                ..Inner::default()
            }),
        }
    }

    /// Fail the next `role_detail` call with a remote error.
    pub fn fail_next_detail(&self, reason: impl Into<String>) {
        self.inner.lock().fail_next_detail = Some(reason.into());
    }

    /// Fail the next `toggle_permission` call with a remote error.
    pub fn fail_next_toggle(&self, reason: impl Into<String>) {
        self.inner.lock().fail_next_toggle = Some(reason.into());
    }

    /// Hold every subsequent toggle request until released through the
    /// returned gate. Lets tests park a request in flight.
    pub fn hold_toggles(&self) -> ToggleGate {
        let notify = Arc::new(Notify::new());
        self.inner.lock().gate = Some(notify.clone());
        ToggleGate(notify)
    }

    /// Number of `role_detail` calls made.
    pub fn detail_calls(&self) -> usize {
        self.inner.lock().detail_calls
    }

    /// Number of `toggle_permission` calls made.
    pub fn toggle_calls(&self) -> usize {
        self.inner.lock().toggle_calls
    }

    /// Current server-side permission codes of one role.
    pub fn codes_of(&self, role: &RoleId) -> Vec<String> {
        self.inner
            .lock()
            .roles
            .iter()
            .find(|r| r.id == *role)
            .map(|r| {
                r.permissions
                    .iter()
                    .map(|p| p.code.as_str().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl AuthorityStore for InMemoryAuthority {
    async fn list_roles(&self) -> Result<Vec<RoleSummary>, AccessError> {
        let inner = self.inner.lock();
        Ok(inner
            .roles
            .iter()
            .map(|role| RoleSummary {
                id: role.id.clone(),
                name: role.name.clone(),
                name_ar: role.name_ar.clone(),
            })
            .collect())
    }

    async fn role_detail(&self, role: &RoleId) -> Result<RoleDetail, AccessError> {
        let mut inner = self.inner.lock();
        inner.detail_calls += 1;
        if let Some(reason) = inner.fail_next_detail.take() {
            return Err(AccessError::Remote {
                endpoint: "role-detail",
                reason,
            });
        }
        inner
            .roles
            .iter()
            .find(|r| r.id == *role)
            .cloned()
            .ok_or_else(|| AccessError::RoleNotFound(role.clone()))
    }

    async fn toggle_permission(
        &self,
        role: &RoleId,
        descriptor: &PermissionDescriptor,
    ) -> Result<ToggleAction, AccessError> {
        let gate = {
            let mut inner = self.inner.lock();
            inner.toggle_calls += 1;
            inner.gate.clone()
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut inner = self.inner.lock();
        if let Some(reason) = inner.fail_next_toggle.take() {
            return Err(AccessError::Remote {
                endpoint: "toggle",
                reason,
            });
        }
        let Some(stored) = inner.roles.iter_mut().find(|r| r.id == *role) else {
            return Err(AccessError::RoleNotFound(role.clone()));
        };
        if let Some(position) = stored
            .permissions
            .iter()
            .position(|p| p.code == descriptor.code)
        {
            stored.permissions.remove(position);
            Ok(ToggleAction::Removed)
        } else {
            stored.permissions.push(GrantedPermission {
                code: descriptor.code.clone(),
                name: descriptor.name.clone(),
            });
            Ok(ToggleAction::Added)
        }
    }
}
