//! Notification seam
//!
//! The session manager reports every state mutation through [`Notifier`]
//! instead of rendering feedback itself. Implementations decide what a
//! notification becomes: a structured log line, a toast in the UI, or a
//! recorded value in tests. Fire-and-forget; the manager never consumes a
//! return value.

use std::cell::RefCell;
use std::rc::Rc;

use shared::order::SessionEvent;

/// Sink for session events
pub trait Notifier {
    fn notify(&self, event: &SessionEvent);
}

/// Notifier that emits structured log lines
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: &SessionEvent) {
        tracing::info!(
            event_type = %event.event_type,
            event_id = %event.event_id,
            payload = ?event.payload,
            "session event"
        );
    }
}

/// Notifier that drops every event
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &SessionEvent) {}
}

/// Notifier that records events for later inspection
///
/// Cloning shares the underlying buffer, so a test can keep one handle
/// and hand the other to the session.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &SessionEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{EventPayload, SessionEventType};

    #[test]
    fn recording_notifier_shares_buffer_across_clones() {
        let recorder = RecordingNotifier::new();
        let handle = recorder.clone();

        recorder.notify(&SessionEvent::new(
            SessionEventType::SessionReset,
            EventPayload::SessionReset {},
        ));

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.events()[0].event_type, SessionEventType::SessionReset);
    }
}
