//! Common fixtures.

use diwan_access::{GrantedPermission, RoleDetail};

/// Build a role detail with the given permission codes. Permission names
/// default to the code itself; the Arabic name mirrors the Latin one.
pub fn role(id: &str, name: &str, codes: &[&str]) -> RoleDetail {
    RoleDetail {
        id: id.into(),
        name: name.to_string(),
        name_ar: name.to_string(),
        permissions: codes
            .iter()
            .map(|code| GrantedPermission {
                code: (*code).into(),
                name: (*code).to_string(),
            })
            .collect(),
    }
}
