//! # Diwan Workspace
//!
//! The workspace navigation engine: how many independent top-level screens
//! are open at once, which is focused, and, per screen, an ordered stack of
//! sub-tabs with its own active pointer.
//!
//! The crate is headless. [`WorkspaceStore`] is the single source of truth,
//! owned by one controller and mutated only through its named operations;
//! everything that renders does so from an immutable [`WorkspaceSnapshot`]
//! or from the chrome view-models in [`shell`] derived from one.
//!
//! ## Flow
//!
//! ```text
//! screen component → WorkspaceStore op → WorkspaceSnapshot → shell chrome
//! ```

pub mod registry;
pub mod shell;
pub mod store;
pub mod tab;

pub use registry::{ScreenDef, ScreenRegistry};
pub use shell::{ScreenStrip, ScreenStripItem, TabStrip, TabStripItem};
pub use store::{OpenScreenEntry, WorkspaceSnapshot, WorkspaceStore};
pub use tab::Tab;
