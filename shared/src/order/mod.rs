//! Order Session Module
//!
//! Types for the order-building workflow:
//! - Line items: the in-progress cart contents
//! - Customer info: the delivery form input
//! - Snapshots: the confirmed order frozen at submission time
//! - Events: facts emitted after each session mutation

pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use event::{EventPayload, SessionEvent, SessionEventType};
pub use snapshot::ConfirmedOrder;
pub use types::{CustomerInfo, FieldError, FieldErrors, LineItem, Stage};
