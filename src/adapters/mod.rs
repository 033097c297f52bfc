//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON feed and JSON Lines ledger on disk
//! - `memory` - In-process source for tests and embedding
//! - `seed` - Bundled demo session written by `init`

pub mod file;
pub mod memory;
pub mod seed;

pub use file::JsonFileSource;
pub use memory::MemorySource;
