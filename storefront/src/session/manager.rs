//! OrderSession - the order-building workflow engine
//!
//! Owns the in-progress cart, the workflow stage and the confirmed
//! snapshot. Mutations are synchronous and atomic; every successful
//! mutation is reported through the [`Notifier`] seam after the state
//! change is applied.
//!
//! # Workflow
//!
//! ```text
//! Browsing ──advance_to_review()──▶ Reviewing ──submit()──▶ Confirmed
//!     ▲                                                        │
//!     └──────────────────────── reset() ─────────────────────┘
//! ```
//!
//! The stage only ratchets forward. Cart operations carry no stage side
//! effect: whether the UI jumps to the review form after each add is a
//! policy decision (`Config::auto_review`), not the manager's.

use chrono::Local;
use shared::models::Product;
use shared::order::{
    ConfirmedOrder, CustomerInfo, EventPayload, FieldErrors, LineItem, SessionEvent,
    SessionEventType, Stage,
};
use shared::util::order_number;
use thiserror::Error;

use super::money;
use super::validation::validate_customer_info;
use crate::notify::{Notifier, TracingNotifier};

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Submit or review requested with an empty cart
    #[error("order has no items")]
    EmptyCart,

    /// Customer form rejected; per-field messages attached
    #[error("customer info validation failed: {0}")]
    Validation(FieldErrors),

    /// Order already confirmed; only `reset` is valid now
    #[error("order already confirmed")]
    AlreadyConfirmed,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// The order session manager
///
/// One instance per storefront run. Single-threaded by design: every
/// operation completes or is rejected synchronously, so no locking
/// discipline applies.
pub struct OrderSession {
    line_items: Vec<LineItem>,
    stage: Stage,
    confirmed: Option<ConfirmedOrder>,
    /// Orders confirmed during this session, feeds the order number
    order_count: u32,
    notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for OrderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSession")
            .field("line_items", &self.line_items)
            .field("stage", &self.stage)
            .field("confirmed", &self.confirmed)
            .field("order_count", &self.order_count)
            .finish()
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    /// Create a session reporting events to the structured log.
    pub fn new() -> Self {
        Self::with_notifier(Box::new(TracingNotifier))
    }

    /// Create a session with an explicit notifier.
    pub fn with_notifier(notifier: Box<dyn Notifier>) -> Self {
        Self {
            line_items: Vec::new(),
            stage: Stage::default(),
            confirmed: None,
            order_count: 0,
            notifier,
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn confirmed_order(&self) -> Option<&ConfirmedOrder> {
        self.confirmed.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.line_items.len()
    }

    /// Current order total: sum of `price × quantity`, 2 dp.
    ///
    /// Recomputed from the items on every call, never cached.
    pub fn compute_total(&self) -> f64 {
        money::order_total(&self.line_items)
    }

    // ── Cart mutation ───────────────────────────────────────────────

    /// Add a product selection to the cart.
    ///
    /// Repeat selection of the same product accumulates: the quantity is
    /// added to the existing line. A new product is appended, preserving
    /// first-selected order. `quantity < 1` is a caller-side validation
    /// failure; the selection is ignored and never stored.
    pub fn select_product(&mut self, product: &Product, quantity: i32) {
        if quantity < 1 {
            tracing::warn!(
                product_id = %product.id,
                quantity,
                "ignoring selection with non-positive quantity"
            );
            return;
        }

        let (item, merged) = match self
            .line_items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(item) => {
                item.quantity += quantity;
                (item.clone(), true)
            }
            None => {
                let item = LineItem::from_product(product, quantity);
                self.line_items.push(item.clone());
                (item, false)
            }
        };

        self.emit(
            SessionEventType::ItemAdded,
            EventPayload::ItemAdded {
                item,
                added_quantity: quantity,
                merged,
            },
        );
    }

    /// Replace a line's quantity in place.
    ///
    /// No-op when `new_quantity < 1` (the floor of 1 is enforced; use
    /// [`remove_item`](Self::remove_item) to delete) or when no line
    /// matches. Ordering is unchanged.
    pub fn set_quantity(&mut self, product_id: &str, new_quantity: i32) {
        if new_quantity < 1 {
            return;
        }
        let Some(item) = self
            .line_items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        else {
            return;
        };
        if item.quantity == new_quantity {
            return;
        }
        item.quantity = new_quantity;
        let (product_id, item_name) = (item.product_id.clone(), item.name.clone());

        self.emit(
            SessionEventType::ItemQuantityChanged,
            EventPayload::ItemQuantityChanged {
                product_id,
                item_name,
                quantity: new_quantity,
            },
        );
    }

    /// Delete a line if present; silent no-op otherwise. Idempotent.
    pub fn remove_item(&mut self, product_id: &str) {
        let Some(pos) = self
            .line_items
            .iter()
            .position(|item| item.product_id == product_id)
        else {
            return;
        };
        let removed = self.line_items.remove(pos);

        self.emit(
            SessionEventType::ItemRemoved,
            EventPayload::ItemRemoved {
                product_id: removed.product_id,
                item_name: removed.name,
            },
        );
    }

    // ── Stage transitions ───────────────────────────────────────────

    /// Explicit `Browsing → Reviewing` transition.
    ///
    /// Rejected while the cart is empty. Whether the UI calls this
    /// automatically after each add is configuration policy, not manager
    /// behavior.
    pub fn advance_to_review(&mut self) -> SessionResult<()> {
        if self.stage.is_confirmed() {
            return Err(SessionError::AlreadyConfirmed);
        }
        if self.line_items.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        self.stage = Stage::Reviewing;
        Ok(())
    }

    /// Validate the customer form and finalize the order.
    ///
    /// Preconditions: a non-empty cart and passing field validation. On
    /// failure the error is returned and no state changes. On success the
    /// cart is deep-copied into a [`ConfirmedOrder`] with a frozen total
    /// and submission timestamp, and the stage becomes `Confirmed`.
    pub fn submit(&mut self, info: &CustomerInfo) -> SessionResult<&ConfirmedOrder> {
        if self.stage.is_confirmed() {
            return Err(SessionError::AlreadyConfirmed);
        }
        if self.line_items.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        let errors = validate_customer_info(info, Local::now().date_naive());
        if !errors.is_empty() {
            tracing::debug!(%errors, "order submission rejected");
            return Err(SessionError::Validation(errors));
        }

        self.order_count += 1;
        let order = ConfirmedOrder::new(
            order_number(self.order_count),
            info.clone(),
            self.line_items.clone(),
            money::order_total(&self.line_items),
        );
        tracing::info!(
            order_number = %order.order_number,
            total_amount = order.total_amount,
            items = order.item_count(),
            "order confirmed"
        );

        self.emit(
            SessionEventType::OrderSubmitted,
            EventPayload::OrderSubmitted {
                order_number: order.order_number.clone(),
                total_amount: order.total_amount,
                item_count: order.item_count(),
            },
        );

        self.stage = Stage::Confirmed;
        Ok(&*self.confirmed.insert(order))
    }

    /// Start over: clear the cart, discard the snapshot, stage back to
    /// `Browsing`. Prior order data is not retained anywhere.
    pub fn reset(&mut self) {
        self.line_items.clear();
        self.confirmed = None;
        self.stage = Stage::Browsing;
        self.emit(SessionEventType::SessionReset, EventPayload::SessionReset {});
    }

    fn emit(&self, event_type: SessionEventType, payload: EventPayload) {
        self.notifier.notify(&SessionEvent::new(event_type, payload));
    }
}
