//! Where goal and achievement notifications leave the core.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receives goal status changes and achievement unlocks.
///
/// `GoalService` and `AchievementService` call the sink only after the
/// repository has accepted the write, so a host never announces a completed
/// goal or a new badge that was not stored. Hosts forward the events to the
/// user's connected clients.
///
/// Implementations must return quickly and must not fail the caller: a
/// dropped notification leaves the stored goal or achievement untouched.
pub trait DomainEventSink: Send + Sync {
    /// One goal changing status, or one evaluation's newly earned
    /// achievements for a user.
    fn emit(&self, event: DomainEvent);

    /// Every status change found by a single `refresh_goal_statuses` pass,
    /// in goal order. Defaults to emitting them one by one.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Sink for hosts without a notification channel.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records every event it receives, for asserting on service behavior.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
