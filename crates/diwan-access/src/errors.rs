//! Access-layer errors.

use diwan_core::{ErrorCategory, RoleId};
use thiserror::Error;

/// Failures of the permission-authoring path.
///
/// None of these are fatal: validation errors are user-correctable and
/// remote failures leave local state at its last-known-good value.
#[derive(Debug, Clone, Error)]
pub enum AccessError {
    /// A toggle was attempted with no target role selected.
    #[error("no target role selected")]
    NoTargetRole,

    /// A session operation was attempted while builder mode is off.
    #[error("builder session is not active")]
    SessionInactive,

    /// The authority store does not know the requested role.
    #[error("role {0} not found")]
    RoleNotFound(RoleId),

    /// Network or server failure talking to the authority store.
    #[error("remote call to {endpoint} failed: {reason}")]
    Remote {
        /// Logical endpoint name (`roles`, `role-detail`, `toggle`).
        endpoint: &'static str,
        /// Transport- or server-reported reason.
        reason: String,
    },
}

impl AccessError {
    /// Presentation category for notification routing.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoTargetRole | Self::SessionInactive => ErrorCategory::Input,
            Self::RoleNotFound(_) => ErrorCategory::NotFound,
            Self::Remote { .. } => ErrorCategory::Network,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diwan_core::ToastLevel;

    #[test]
    fn validation_errors_route_to_info_toasts() {
        assert_eq!(AccessError::NoTargetRole.category(), ErrorCategory::Input);
        assert_eq!(
            AccessError::NoTargetRole.category().toast_severity(),
            ToastLevel::Info
        );
    }

    #[test]
    fn remote_errors_are_transient() {
        let err = AccessError::Remote {
            endpoint: "toggle",
            reason: "connection reset".to_string(),
        };
        assert!(err.category().is_transient());
    }
}
