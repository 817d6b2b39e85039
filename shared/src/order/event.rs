//! Session events - facts emitted after session mutations
//!
//! The session manager never renders UI feedback itself; it hands each
//! mutation fact to a notifier and moves on (fire-and-forget).

use serde::{Deserialize, Serialize};

use super::types::LineItem;
use crate::util::now_millis;

/// Session event - immutable notification record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Event unique ID
    pub event_id: String,
    /// Timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Event type
    pub event_type: SessionEventType,
    /// Event payload
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEventType {
    ItemAdded,
    ItemQuantityChanged,
    ItemRemoved,
    OrderSubmitted,
    SessionReset,
}

impl std::fmt::Display for SessionEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEventType::ItemAdded => write!(f, "ITEM_ADDED"),
            SessionEventType::ItemQuantityChanged => write!(f, "ITEM_QUANTITY_CHANGED"),
            SessionEventType::ItemRemoved => write!(f, "ITEM_REMOVED"),
            SessionEventType::OrderSubmitted => write!(f, "ORDER_SUBMITTED"),
            SessionEventType::SessionReset => write!(f, "SESSION_RESET"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    ItemAdded {
        /// Line item after the add (merged quantity when `merged`)
        item: LineItem,
        /// Quantity added by this selection
        added_quantity: i32,
        /// Whether the selection merged into an existing line
        merged: bool,
    },

    ItemQuantityChanged {
        product_id: String,
        item_name: String,
        quantity: i32,
    },

    ItemRemoved {
        product_id: String,
        item_name: String,
    },

    OrderSubmitted {
        order_number: String,
        total_amount: f64,
        item_count: usize,
    },

    SessionReset {},
}

impl SessionEvent {
    /// Create a new event stamped with the current time.
    pub fn new(event_type: SessionEventType, payload: EventPayload) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: now_millis(),
            event_type,
            payload,
        }
    }
}
