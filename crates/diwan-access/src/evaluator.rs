//! Pure permission evaluation for the signed-in user.

use diwan_core::PermissionCode;
use std::collections::HashSet;

/// Role name whose holders bypass all permission checks.
pub const SUPER_ADMIN_ROLE: &str = "SUPER_ADMIN";

/// Decides, from the signed-in user's flat grant set, whether a guarded
/// capability is usable. Pure and side-effect free; built once from the
/// authentication collaborator's data and replaced wholesale when the user
/// changes.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    granted: HashSet<PermissionCode>,
    super_admin: bool,
}

impl PermissionEvaluator {
    /// Build an evaluator from the user's role name and granted codes.
    ///
    /// Super-admin is derived from either the role name or the presence of
    /// the reserved [`PermissionCode::SUPER_ADMIN`] code; both are honored.
    pub fn new(role_name: &str, codes: impl IntoIterator<Item = PermissionCode>) -> Self {
        let granted: HashSet<PermissionCode> = codes.into_iter().collect();
        let super_admin = role_name == SUPER_ADMIN_ROLE
            || granted.contains(&PermissionCode::from(PermissionCode::SUPER_ADMIN));
        Self {
            granted,
            super_admin,
        }
    }

    /// Whether the user may use the capability behind `code`.
    #[must_use]
    pub fn has_permission(&self, code: &PermissionCode) -> bool {
        self.super_admin || self.granted.contains(code)
    }

    /// Whether the user bypasses all checks.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<PermissionCode> {
        list.iter().map(|c| PermissionCode::from(*c)).collect()
    }

    #[test]
    fn membership_decides_for_regular_users() {
        let evaluator = PermissionEvaluator::new("SALES", codes(&["CLIENTS_VIEW"]));
        assert!(evaluator.has_permission(&"CLIENTS_VIEW".into()));
        assert!(!evaluator.has_permission(&"CLIENTS_EXPORT".into()));
        assert!(!evaluator.is_super_admin());
    }

    #[test]
    fn super_admin_by_role_name_passes_everything() {
        let evaluator = PermissionEvaluator::new(SUPER_ADMIN_ROLE, codes(&[]));
        assert!(evaluator.is_super_admin());
        assert!(evaluator.has_permission(&"ANYTHING".into()));
    }

    #[test]
    fn super_admin_by_reserved_code_passes_everything() {
        let evaluator = PermissionEvaluator::new("SALES", codes(&[PermissionCode::SUPER_ADMIN]));
        assert!(evaluator.is_super_admin());
        assert!(evaluator.has_permission(&"ANYTHING".into()));
    }

    #[test]
    fn empty_grant_set_denies() {
        let evaluator = PermissionEvaluator::new("SALES", codes(&[]));
        assert!(!evaluator.has_permission(&"X".into()));
    }
}
