//! Shared types for the storefront
//!
//! Domain types used across the workspace: product reference data,
//! order-session types (line items, customer info, confirmed snapshots,
//! session events) and company settings models.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
