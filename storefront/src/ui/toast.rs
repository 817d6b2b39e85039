//! Toast feed
//!
//! The terminal stand-in for the original storefront's toast popups. The
//! session manager stays unaware of any of this: it reports events through
//! the [`Notifier`] seam and [`ToastNotifier`] turns them into the Polish
//! copy the toast line shows.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use shared::order::{EventPayload, SessionEvent};

use crate::notify::Notifier;

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(3);
/// Bound on queued toasts
const MAX_TOASTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    created_at: Instant,
}

/// Shared toast queue; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct ToastFeed {
    toasts: Rc<RefCell<VecDeque<Toast>>>,
}

impl ToastFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastVariant::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastVariant::Error);
    }

    fn push(&self, message: String, variant: ToastVariant) {
        let mut toasts = self.toasts.borrow_mut();
        if toasts.len() == MAX_TOASTS {
            toasts.pop_front();
        }
        toasts.push_back(Toast {
            message,
            variant,
            created_at: Instant::now(),
        });
    }

    /// Drop expired toasts; called once per UI tick.
    pub fn prune(&self) {
        let mut toasts = self.toasts.borrow_mut();
        while let Some(toast) = toasts.front() {
            if toast.created_at.elapsed() >= TOAST_TTL {
                toasts.pop_front();
            } else {
                break;
            }
        }
    }

    /// Most recent toast, if any is still alive.
    pub fn current(&self) -> Option<Toast> {
        self.toasts.borrow().back().cloned()
    }
}

/// Notifier that renders session events as toasts
///
/// Also mirrors each event into the structured log so a `LOG_DIR` run
/// keeps a full audit trail.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    feed: ToastFeed,
}

impl ToastNotifier {
    pub fn new(feed: ToastFeed) -> Self {
        Self { feed }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, event: &SessionEvent) {
        tracing::info!(event_type = %event.event_type, payload = ?event.payload, "session event");

        match &event.payload {
            EventPayload::ItemAdded { item, added_quantity, .. } => {
                self.feed.success(format!(
                    "Produkt dodany do zamówienia: {} ({} {}).",
                    item.name, added_quantity, item.unit
                ));
            }
            EventPayload::ItemQuantityChanged { item_name, quantity, .. } => {
                self.feed
                    .success(format!("Zmieniono ilość: {} ({}).", item_name, quantity));
            }
            EventPayload::ItemRemoved { item_name, .. } => {
                self.feed
                    .success(format!("Usunięto z zamówienia: {}.", item_name));
            }
            EventPayload::OrderSubmitted { order_number, total_amount, .. } => {
                self.feed.success(format!(
                    "Zamówienie {} zostało złożone. Suma: {:.2} zł.",
                    order_number, total_amount
                ));
            }
            EventPayload::SessionReset {} => {
                self.feed.success("Rozpoczęto nowe zamówienie.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{LineItem, SessionEventType};

    #[test]
    fn item_added_becomes_polish_copy() {
        let feed = ToastFeed::new();
        let notifier = ToastNotifier::new(feed.clone());

        notifier.notify(&SessionEvent::new(
            SessionEventType::ItemAdded,
            EventPayload::ItemAdded {
                item: LineItem {
                    product_id: "prod_001".to_string(),
                    name: "Schab wieprzowy".to_string(),
                    unit: "kg".to_string(),
                    price: 32.99,
                    quantity: 3,
                },
                added_quantity: 2,
                merged: true,
            },
        ));

        let toast = feed.current().unwrap();
        assert_eq!(toast.variant, ToastVariant::Success);
        assert_eq!(
            toast.message,
            "Produkt dodany do zamówienia: Schab wieprzowy (2 kg)."
        );
    }

    #[test]
    fn queue_is_bounded() {
        let feed = ToastFeed::new();
        for i in 0..20 {
            feed.success(format!("toast {i}"));
        }
        // only the newest MAX_TOASTS survive; current is the latest
        assert_eq!(feed.current().unwrap().message, "toast 19");
    }
}
