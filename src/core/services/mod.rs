//! Business logic services
//!
//! Pure logic over in-memory data. Nothing in here performs I/O or reads
//! the clock for derived views; `now` is always passed in.
//!
//! - [`message_store`] - Sorted message log and lazy filtering
//! - [`ledger`] - Append-only acknowledgment log
//! - [`presence`] - Participant presence derivation
//! - [`pending`] - Pending-acknowledgment projection
//! - [`hub`] - The aggregate tying the above together

pub mod filter;
pub mod hub;
pub mod ledger;
pub mod message_store;
pub mod pending;
pub mod presence;

pub use filter::MessageFilter;
pub use hub::Hub;
pub use ledger::AckLedger;
pub use message_store::MessageStore;
pub use pending::{ack_state, pending_acks};
pub use presence::{DEFAULT_ACTIVITY_WINDOW_HOURS, compute_presence, default_activity_window};
