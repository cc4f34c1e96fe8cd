//! Diwan testing infrastructure.
//!
//! Shared test doubles for the console core. Add to a crate's
//! dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! diwan-testkit = { workspace = true }
//! ```
//!
//! The centerpiece is [`InMemoryAuthority`], an `AuthorityStore` double with
//! scripted failures, call counters, and a gate for holding toggle requests
//! in flight so tests can exercise the session's concurrency policy
//! deterministically.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod authority;
pub mod fixtures;

pub use authority::{InMemoryAuthority, ToggleGate};
pub use fixtures::role;
