//! Event tracking for aggregate roots.

use std::fmt;

use super::Event;

/// Pending domain events raised by an aggregate.
///
/// Domain types embed an `AggregateRoot` and register events as they
/// change state. Events stay queued, in registration order, until the
/// caller takes or clears them.
pub struct AggregateRoot<E: Event> {
    events: Vec<E>,
}

impl<E: Event> AggregateRoot<E> {
    /// Creates an aggregate root with no pending events.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends copies of `other`'s pending events, returning the receiver.
    ///
    /// `other` keeps its own events.
    pub fn and_events_from(&mut self, other: &Self) -> &mut Self
    where
        E: Clone,
    {
        tracing::debug!(
            appended = other.events.len(),
            pending = self.events.len(),
            "merging domain events"
        );
        self.events.extend_from_slice(&other.events);
        self
    }

    /// Registers `event`, returning the receiver.
    pub fn and_event(&mut self, event: E) -> &mut Self {
        self.register_event(event);
        self
    }

    /// Queues `event` and returns a reference to it.
    pub fn register_event(&mut self, event: E) -> &E {
        tracing::debug!(
            event_type = event.event_type(),
            version = event.version(),
            "registered domain event"
        );
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Returns a copy of the pending events, in registration order.
    ///
    /// Changes to the returned vector do not affect the aggregate.
    #[must_use]
    pub fn domain_events(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.events.clone()
    }

    /// Returns the pending events, in registration order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Removes and returns the pending events.
    pub fn take_domain_events(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// Discards the pending events.
    pub fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}

impl<E: Event> Default for AggregateRoot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event + Clone> Clone for AggregateRoot<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: Event + fmt::Debug> fmt::Debug for AggregateRoot<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AggregateRoot")
            .field("events", &self.events)
            .finish()
    }
}
