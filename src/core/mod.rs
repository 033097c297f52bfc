//! Core domain logic for the agent hub
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Message, Acknowledgment, Presence, registry)
//! - `services/` - Store, ledger, presence and pending views
//! - `ports/` - Trait definitions for backing stores
//! - `error` - Validation and storage errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{HubError, StorageError, ValidationError};
