//! Static screen registry.
//!
//! Screen definitions live outside the store; the store only tracks which of
//! them are open. The registry always contains exactly one non-closable home
//! screen, passed explicitly at construction.

use crate::tab::Tab;
use diwan_core::{ScreenId, TabId};
use serde::{Deserialize, Serialize};

/// Static definition of one top-level screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDef {
    /// Stable screen key.
    pub id: ScreenId,
    /// Title shown in the screen strip.
    pub title: String,
    /// Whether the user may close this screen. Only the home screen is not
    /// closable.
    pub closable: bool,
}

impl ScreenDef {
    /// Define a closable screen.
    pub fn new(id: impl Into<ScreenId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            closable: true,
        }
    }

    /// Define the non-closable home screen.
    pub fn home(id: impl Into<ScreenId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            closable: false,
        }
    }
}

/// The set of screens the console knows about.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    home: ScreenDef,
    screens: Vec<ScreenDef>,
}

impl ScreenRegistry {
    /// Build a registry from the home screen and the remaining definitions.
    ///
    /// The home definition is forced non-closable regardless of how it was
    /// constructed; any duplicate of the home id in `screens` is ignored in
    /// lookups (the home entry wins).
    pub fn new(home: ScreenDef, screens: Vec<ScreenDef>) -> Self {
        let home = ScreenDef {
            closable: false,
            ..home
        };
        Self { home, screens }
    }

    /// The permanent home screen.
    pub fn home(&self) -> &ScreenDef {
        &self.home
    }

    /// Look up a screen definition by id.
    pub fn get(&self, id: &ScreenId) -> Option<&ScreenDef> {
        if self.home.id == *id {
            return Some(&self.home);
        }
        self.screens.iter().find(|def| def.id == *id)
    }

    /// The non-closable main tab seeded when a screen is first opened.
    ///
    /// Convention: the main tab id is `{screen-id}-MAIN` and its title
    /// mirrors the screen title.
    pub fn main_tab_for(&self, def: &ScreenDef) -> Tab {
        Tab::main(TabId::new(format!("{}-MAIN", def.id)), def.title.clone())
    }
}
