//! The authority store boundary.
//!
//! The remote permission-assignment service is the sole source of truth for
//! role grants. This module defines the async trait the core depends on and
//! the wire types it exchanges; concrete transports (HTTP, etc.) implement
//! the trait outside the core, and `diwan-testkit` ships an in-memory double.

use crate::descriptor::PermissionDescriptor;
use crate::errors::AccessError;
use async_trait::async_trait;
use diwan_core::{PermissionCode, RoleId};
use serde::{Deserialize, Serialize};

/// One role as returned by the role-listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    /// Role key.
    pub id: RoleId,
    /// Display name.
    pub name: String,
    /// Arabic display name.
    pub name_ar: String,
}

/// One granted permission inside a role detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedPermission {
    /// Capability code.
    pub code: PermissionCode,
    /// Human-readable name as stored by the authority.
    pub name: String,
}

/// A role including its full permission set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDetail {
    /// Role key.
    pub id: RoleId,
    /// Display name.
    pub name: String,
    /// Arabic display name.
    pub name_ar: String,
    /// Every permission currently granted to the role.
    pub permissions: Vec<GrantedPermission>,
}

/// Which action the assign/toggle endpoint performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    /// The code was granted to the role.
    Added,
    /// The code was revoked from the role.
    Removed,
}

/// Remote authority for role-to-permission assignments.
#[async_trait]
pub trait AuthorityStore: Send + Sync {
    /// List all roles for the builder's role selector.
    async fn list_roles(&self) -> Result<Vec<RoleSummary>, AccessError>;

    /// Fetch one role including its full permission set.
    async fn role_detail(&self, role: &RoleId) -> Result<RoleDetail, AccessError>;

    /// Toggle one permission on a role. The server decides whether the code
    /// was added or removed and reports which.
    async fn toggle_permission(
        &self,
        role: &RoleId,
        descriptor: &PermissionDescriptor,
    ) -> Result<ToggleAction, AccessError>;
}
