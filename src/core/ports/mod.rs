//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the hub core and wherever its
//! data actually lives. Implementations live in the `adapters` module.
//!
//! The core depends only on these traits, so tests can swap in mocks or
//! in-memory sources without touching the filesystem.

mod hub_source;

pub use hub_source::HubSource;
#[cfg(test)]
pub use hub_source::MockHubSource;
