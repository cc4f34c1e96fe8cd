//! Tab content units nested inside one screen's strip.

use diwan_core::TabId;
use serde::{Deserialize, Serialize};

/// Discriminator kind of the seeded main tab.
pub const MAIN_TAB_KIND: &str = "main";

/// A unit of content inside one screen. The `kind` discriminator tells the
/// shell which content to mount; `payload` is carried opaquely for the
/// mounting component (e.g. an associated record id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Tab key, unique within its screen.
    pub id: TabId,
    /// Title shown in the tab strip.
    pub title: String,
    /// Content discriminator used by the shell to pick what to mount.
    pub kind: String,
    /// Whether the user may close this tab. Exactly one main tab per screen
    /// is non-closable.
    pub closable: bool,
    /// Opaque caller payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Tab {
    /// Create a closable tab.
    pub fn new(id: impl Into<TabId>, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: kind.into(),
            closable: true,
            payload: None,
        }
    }

    /// Create the non-closable main tab of a screen.
    pub fn main(id: impl Into<TabId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: MAIN_TAB_KIND.to_string(),
            closable: false,
            payload: None,
        }
    }

    /// Attach an opaque payload.
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Mark the tab non-closable.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.closable = false;
        self
    }
}
