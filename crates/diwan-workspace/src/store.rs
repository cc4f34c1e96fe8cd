//! The navigation state machine.
//!
//! A screen is either *closed* (absent from the open sequence) or *open*.
//! Once a screen has been opened its tab sequence is retained in memory even
//! after the screen is closed, so re-opening restores the prior tabs. The
//! home screen is opened at construction and can never be removed.
//!
//! Every operation is a total function over the current state: contract
//! violations (unknown ids, removing a non-closable tab) are logged no-ops,
//! never panics and never errors. "Unknown" for the tab operations means the
//! screen has never been opened and therefore owns no tab sequence.

use crate::registry::ScreenRegistry;
use crate::tab::Tab;
use diwan_core::{ScreenId, TabId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Runtime record of one open screen, in strip order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenScreenEntry {
    /// Screen key.
    pub id: ScreenId,
    /// Title shown in the screen strip.
    pub title: String,
    /// Whether the user may close this screen.
    pub closable: bool,
}

/// Immutable view of the workspace handed to renderers.
///
/// Tab sequences are included for open screens only; retained state of
/// closed screens is an implementation detail of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// Open screens in strip order.
    pub open_screens: Vec<OpenScreenEntry>,
    /// The foregrounded screen.
    pub active_screen: ScreenId,
    /// Tab sequence per open screen.
    pub tabs: HashMap<ScreenId, Vec<Tab>>,
    /// Foregrounded tab per open screen.
    pub active_tabs: HashMap<ScreenId, TabId>,
}

impl WorkspaceSnapshot {
    /// Tab sequence of one open screen.
    pub fn tabs_for(&self, screen: &ScreenId) -> &[Tab] {
        self.tabs.get(screen).map_or(&[], Vec::as_slice)
    }

    /// Active tab of one open screen.
    pub fn active_tab(&self, screen: &ScreenId) -> Option<&TabId> {
        self.active_tabs.get(screen)
    }

    /// Whether a screen is currently open.
    pub fn is_open(&self, screen: &ScreenId) -> bool {
        self.open_screens.iter().any(|entry| entry.id == *screen)
    }
}

/// Single source of truth for which screens/tabs are open and focused.
///
/// Owned by one controller; readers get [`WorkspaceSnapshot`] clones. The
/// five operations below are the only sanctioned way to affect navigation.
#[derive(Debug)]
pub struct WorkspaceStore {
    registry: ScreenRegistry,
    open: Vec<OpenScreenEntry>,
    active_screen: ScreenId,
    /// Retained per screen across close/re-open.
    tabs: HashMap<ScreenId, Vec<Tab>>,
    active_tab: HashMap<ScreenId, TabId>,
}

impl WorkspaceStore {
    /// Create a store with the home screen open and focused.
    pub fn new(registry: ScreenRegistry) -> Self {
        let home = registry.home().clone();
        let main = registry.main_tab_for(&home);
        let mut tabs = HashMap::new();
        let mut active_tab = HashMap::new();
        active_tab.insert(home.id.clone(), main.id.clone());
        tabs.insert(home.id.clone(), vec![main]);
        Self {
            open: vec![OpenScreenEntry {
                id: home.id.clone(),
                title: home.title.clone(),
                closable: false,
            }],
            active_screen: home.id.clone(),
            registry,
            tabs,
            active_tab,
        }
    }

    /// Open a screen, or focus it if already open.
    ///
    /// Unknown registry ids are a no-op. First-time opens seed the screen
    /// with its non-closable main tab; re-opens restore the retained tab
    /// sequence untouched.
    pub fn open_screen(&mut self, screen: &ScreenId) {
        if self.open.iter().any(|entry| entry.id == *screen) {
            debug!(screen = %screen, "screen already open, focusing");
            self.active_screen = screen.clone();
            return;
        }
        let Some(def) = self.registry.get(screen).cloned() else {
            warn!(screen = %screen, "open_screen: unknown screen id");
            return;
        };
        debug!(screen = %screen, "opening screen");
        self.open.push(OpenScreenEntry {
            id: def.id.clone(),
            title: def.title.clone(),
            closable: def.closable,
        });
        self.active_screen = def.id.clone();
        if !self.tabs.contains_key(&def.id) {
            let main = self.registry.main_tab_for(&def);
            self.active_tab.insert(def.id.clone(), main.id.clone());
            self.tabs.insert(def.id.clone(), vec![main]);
        }
    }

    /// Close a screen, removing it from the strip.
    ///
    /// The home screen cannot be closed. Tab state is retained for re-open.
    /// If the closed screen was active, focus moves to the last remaining
    /// entry in strip order, falling back to the home screen.
    pub fn close_screen(&mut self, screen: &ScreenId) {
        let Some(position) = self.open.iter().position(|entry| entry.id == *screen) else {
            warn!(screen = %screen, "close_screen: screen is not open");
            return;
        };
        if !self.open[position].closable {
            warn!(screen = %screen, "close_screen: screen is not closable");
            return;
        }
        debug!(screen = %screen, "closing screen");
        self.open.remove(position);
        if self.active_screen == *screen {
            self.active_screen = self
                .open
                .last()
                .map(|entry| entry.id.clone())
                .unwrap_or_else(|| self.registry.home().id.clone());
        }
    }

    /// Focus a tab within a screen.
    ///
    /// Callers must only pass tab ids present in the screen's sequence; an
    /// id that is not is a contract violation handled as a logged no-op.
    pub fn set_active_tab(&mut self, screen: &ScreenId, tab: &TabId) {
        let Some(sequence) = self.tabs.get(screen) else {
            warn!(screen = %screen, "set_active_tab: screen has no tab state");
            return;
        };
        if !sequence.iter().any(|t| t.id == *tab) {
            warn!(screen = %screen, tab = %tab, "set_active_tab: tab not in sequence");
            return;
        }
        debug!(screen = %screen, tab = %tab, "activating tab");
        self.active_tab.insert(screen.clone(), tab.clone());
    }

    /// Append a tab to a screen and focus it.
    ///
    /// At most one tab per id per screen: adding an id that already exists
    /// degenerates to [`Self::set_active_tab`], the existing tab is kept
    /// as-is.
    pub fn add_tab(&mut self, screen: &ScreenId, tab: Tab) {
        let Some(sequence) = self.tabs.get_mut(screen) else {
            warn!(screen = %screen, "add_tab: screen has no tab state");
            return;
        };
        if sequence.iter().any(|t| t.id == tab.id) {
            let id = tab.id.clone();
            self.set_active_tab(screen, &id);
            return;
        }
        debug!(screen = %screen, tab = %tab.id, "adding tab");
        self.active_tab.insert(screen.clone(), tab.id.clone());
        sequence.push(tab);
    }

    /// Remove a tab from a screen.
    ///
    /// The non-closable main tab can never be removed, so a sequence never
    /// empties. If the removed tab was active, focus moves to the last
    /// remaining tab, else the first.
    pub fn remove_tab(&mut self, screen: &ScreenId, tab: &TabId) {
        let Some(sequence) = self.tabs.get_mut(screen) else {
            warn!(screen = %screen, "remove_tab: screen has no tab state");
            return;
        };
        let Some(position) = sequence.iter().position(|t| t.id == *tab) else {
            warn!(screen = %screen, tab = %tab, "remove_tab: tab not in sequence");
            return;
        };
        if !sequence[position].closable {
            warn!(screen = %screen, tab = %tab, "remove_tab: tab is not closable");
            return;
        }
        debug!(screen = %screen, tab = %tab, "removing tab");
        sequence.remove(position);
        if self.active_tab.get(screen) == Some(tab) {
            // The non-closable main tab survives every removal, so the
            // sequence is never empty here.
            if let Some(next) = sequence.last().or_else(|| sequence.first()) {
                self.active_tab.insert(screen.clone(), next.id.clone());
            }
        }
    }

    /// The currently focused screen.
    pub fn active_screen(&self) -> &ScreenId {
        &self.active_screen
    }

    /// Clone an immutable view for renderers.
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let mut tabs = HashMap::with_capacity(self.open.len());
        let mut active_tabs = HashMap::with_capacity(self.open.len());
        for entry in &self.open {
            if let Some(sequence) = self.tabs.get(&entry.id) {
                tabs.insert(entry.id.clone(), sequence.clone());
            }
            if let Some(tab) = self.active_tab.get(&entry.id) {
                active_tabs.insert(entry.id.clone(), tab.clone());
            }
        }
        WorkspaceSnapshot {
            open_screens: self.open.clone(),
            active_screen: self.active_screen.clone(),
            tabs,
            active_tabs,
        }
    }
}
