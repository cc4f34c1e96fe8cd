//! Error presentation taxonomy.
//!
//! The core itself never aborts: every failure is either user-correctable or
//! transient. What the frontends need from an error is how to present it, so
//! this module classifies failures into categories and maps each category to
//! a notification severity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a transient notification toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToastLevel {
    /// Informational, auto-dismissed.
    Info,
    /// Degraded but recoverable.
    Warning,
    /// Operation failed; user attention required.
    Error,
}

/// High-level error categories for frontend error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// User input validation errors (correctable by the user).
    Input,
    /// Authorization/capability errors.
    Capability,
    /// Network connectivity or remote-server errors (often transient).
    Network,
    /// A referenced resource does not exist.
    NotFound,
    /// General operation failures (catch-all).
    Operation,
}

impl ErrorCategory {
    /// Whether the user can resolve this error by changing their input.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Whether this error is likely to resolve on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::NotFound)
    }

    /// The notification severity appropriate for this category.
    #[must_use]
    pub fn toast_severity(&self) -> ToastLevel {
        match self {
            Self::Input => ToastLevel::Info,
            Self::Capability => ToastLevel::Error,
            Self::Network => ToastLevel::Warning,
            Self::NotFound => ToastLevel::Warning,
            Self::Operation => ToastLevel::Error,
        }
    }

    /// Short label for logs and status lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Capability => "Permission",
            Self::Network => "Network",
            Self::NotFound => "Not Found",
            Self::Operation => "Operation",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_user_correctable() {
        assert!(ErrorCategory::Input.is_user_correctable());
        assert!(!ErrorCategory::Network.is_user_correctable());
    }

    #[test]
    fn network_errors_are_transient() {
        assert!(ErrorCategory::Network.is_transient());
        assert!(!ErrorCategory::Input.is_transient());
    }

    #[test]
    fn severity_routing() {
        assert_eq!(ErrorCategory::Input.toast_severity(), ToastLevel::Info);
        assert_eq!(ErrorCategory::Network.toast_severity(), ToastLevel::Warning);
        assert_eq!(ErrorCategory::Operation.toast_severity(), ToastLevel::Error);
    }
}
