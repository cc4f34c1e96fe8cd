//! Builder toolbar view-model.
//!
//! The chrome strip shown while authoring permissions: the role selector,
//! the current target, and the session status. A pure projection of the
//! session plus the fetched role list; the frontend owns fetching via
//! [`crate::AuthorityStore::list_roles`].

use crate::authority::RoleSummary;
use crate::session::PermissionBuilderSession;
use diwan_core::RoleId;
use serde::{Deserialize, Serialize};

/// One entry in the role selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    /// Role key.
    pub id: RoleId,
    /// Display name.
    pub name: String,
    /// Arabic display name.
    pub name_ar: String,
    /// Whether this role is the session's current target.
    pub selected: bool,
}

/// Render-ready state of the authoring toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderToolbar {
    /// Whether builder mode is on.
    pub active: bool,
    /// Role selector entries.
    pub roles: Vec<RoleOption>,
    /// The role being edited, if one is selected.
    pub target: Option<RoleId>,
    /// Number of codes the target currently holds.
    pub granted_count: usize,
}

impl BuilderToolbar {
    /// Project the toolbar from the session and the fetched role list.
    pub fn project(session: &PermissionBuilderSession, roles: &[RoleSummary]) -> Self {
        let target = session.target_role();
        Self {
            active: session.is_active(),
            roles: roles
                .iter()
                .map(|role| RoleOption {
                    id: role.id.clone(),
                    name: role.name.clone(),
                    name_ar: role.name_ar.clone(),
                    selected: target.as_ref() == Some(&role.id),
                })
                .collect(),
            target,
            granted_count: session.granted_count(),
        }
    }
}
