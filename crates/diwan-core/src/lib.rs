//! # Diwan Core
//!
//! Leaf crate shared by the rest of the console core. It carries:
//!
//! - Identifier newtypes ([`ScreenId`], [`TabId`], [`RoleId`],
//!   [`PermissionCode`]) so screen keys, tab keys, role ids and capability
//!   codes cannot be confused for one another.
//! - The error presentation taxonomy ([`ErrorCategory`], [`ToastLevel`])
//!   that frontends use to route failures to the right notification surface.
//!
//! No I/O, no async, no runtime dependencies.

pub mod errors;
pub mod identifiers;

pub use errors::{ErrorCategory, ToastLevel};
pub use identifiers::{PermissionCode, RoleId, ScreenId, TabId};
