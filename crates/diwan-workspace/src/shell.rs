//! Shell chrome view-models.
//!
//! The shell renders the top screen strip and the per-screen tab strip.
//! Both are pure projections of a [`WorkspaceSnapshot`]; the shell consumes
//! navigation state but never owns or mutates it.

use crate::store::WorkspaceSnapshot;
use diwan_core::{ScreenId, TabId};
use serde::{Deserialize, Serialize};

/// One rendered entry in the top screen strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenStripItem {
    /// Screen key.
    pub id: ScreenId,
    /// Strip label.
    pub title: String,
    /// Whether to render a close affordance.
    pub closable: bool,
    /// Whether this entry is foregrounded.
    pub active: bool,
}

/// The top screen strip, in open order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenStrip {
    /// Entries in strip order.
    pub items: Vec<ScreenStripItem>,
}

impl ScreenStrip {
    /// Project the screen strip from a snapshot.
    pub fn from_snapshot(snapshot: &WorkspaceSnapshot) -> Self {
        Self {
            items: snapshot
                .open_screens
                .iter()
                .map(|entry| ScreenStripItem {
                    id: entry.id.clone(),
                    title: entry.title.clone(),
                    closable: entry.closable,
                    active: entry.id == snapshot.active_screen,
                })
                .collect(),
        }
    }
}

/// One rendered entry in a screen's tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStripItem {
    /// Tab key.
    pub id: TabId,
    /// Strip label.
    pub title: String,
    /// Content discriminator for the mounting component.
    pub kind: String,
    /// Whether to render a close affordance.
    pub closable: bool,
    /// Whether this entry is foregrounded.
    pub active: bool,
}

/// The tab strip of one open screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStrip {
    /// Owning screen.
    pub screen: ScreenId,
    /// Entries in sequence order.
    pub items: Vec<TabStripItem>,
}

impl TabStrip {
    /// Project the tab strip of one screen, `None` if the screen is not open.
    pub fn for_screen(snapshot: &WorkspaceSnapshot, screen: &ScreenId) -> Option<Self> {
        if !snapshot.is_open(screen) {
            return None;
        }
        let active = snapshot.active_tab(screen);
        Some(Self {
            screen: screen.clone(),
            items: snapshot
                .tabs_for(screen)
                .iter()
                .map(|tab| TabStripItem {
                    id: tab.id.clone(),
                    title: tab.title.clone(),
                    kind: tab.kind.clone(),
                    closable: tab.closable,
                    active: Some(&tab.id) == active,
                })
                .collect(),
        })
    }
}
