//! Identifier types used across the console core.
//!
//! All identifiers are opaque strings on the wire (the registry and the
//! authority store both speak string keys), so these are thin newtypes over
//! `String` rather than structured ids.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the underlying string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Stable key of a top-level workspace screen (e.g. `"300"`).
    ScreenId
}

string_id! {
    /// Key of a tab inside one screen's strip; unique within its screen.
    TabId
}

string_id! {
    /// Key of a role in the authority store.
    RoleId
}

string_id! {
    /// Opaque code gating one UI affordance (a button, a tile, a statistic).
    PermissionCode
}

impl PermissionCode {
    /// Reserved code whose presence marks a user as super-admin.
    pub const SUPER_ADMIN: &'static str = "SUPER_ADMIN";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(ScreenId::from("300"), ScreenId::new("300"));
        assert_ne!(ScreenId::from("300"), ScreenId::from("301"));
    }

    #[test]
    fn display_is_the_raw_string() {
        assert_eq!(TabId::from("300-MAIN").to_string(), "300-MAIN");
        assert_eq!(PermissionCode::from("X").as_str(), "X");
    }
}
