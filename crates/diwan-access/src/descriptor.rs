//! Permission descriptors.
//!
//! A descriptor identifies one guarded capability and carries the metadata
//! the authority store needs to file it under the right screen and tab in
//! the permission-management UI.

use diwan_core::PermissionCode;
use serde::{Deserialize, Serialize};

/// Classification of what a permission code protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityLevel {
    /// A single action inside a tab (a button, a tile, a statistic).
    Action,
    /// An entire screen.
    Screen,
}

/// Descriptor of one guarded capability, as sent to the authority store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDescriptor {
    /// Opaque capability code.
    pub code: PermissionCode,
    /// Human-readable capability name.
    pub name: String,
    /// Name of the screen owning the guarded element.
    pub screen_name: String,
    /// Name of the tab owning the guarded element.
    pub tab_name: String,
    /// What the code protects.
    pub level: CapabilityLevel,
}

impl PermissionDescriptor {
    /// Create an action-level descriptor.
    pub fn action(
        code: impl Into<PermissionCode>,
        name: impl Into<String>,
        screen_name: impl Into<String>,
        tab_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            screen_name: screen_name.into(),
            tab_name: tab_name.into(),
            level: CapabilityLevel::Action,
        }
    }

    /// Create a screen-level descriptor.
    pub fn screen(
        code: impl Into<PermissionCode>,
        name: impl Into<String>,
        screen_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            screen_name: screen_name.into(),
            tab_name: String::new(),
            level: CapabilityLevel::Screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let descriptor = PermissionDescriptor::action(
            "CLIENTS_EXPORT",
            "Export clients",
            "Clients",
            "Main",
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["screenName"], "Clients");
        assert_eq!(json["tabName"], "Main");
        assert_eq!(json["level"], "action");
    }
}
