//! Event bus for chrome notifications, built on mpsc channels.
//!
//! - A window publishes through its `EventPublisher`.
//! - The owner of the bus drains events on its own schedule.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::ChromeEvent;

/// Multi-producer, single-consumer queue of [`ChromeEvent`]s.
///
/// # Example
///
/// ```
/// use vibrant_window::events::{ChromeEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(ChromeEvent::AccessoryAdded);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<ChromeEvent>,
    receiver: Receiver<ChromeEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Publishers are cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<ChromeEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so disconnection cannot happen
            // while it is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&self) -> Vec<ChromeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone, Debug)]
pub struct EventPublisher {
    sender: Sender<ChromeEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// If the bus has been dropped nobody is listening, and the event is
    /// discarded.
    pub fn publish(&self, event: ChromeEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Appearance;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(ChromeEvent::ContentViewReplaced);
        publisher.publish(ChromeEvent::AppearanceChanged(Some(Appearance::VibrantDark)));

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                ChromeEvent::ContentViewReplaced,
                ChromeEvent::AppearanceChanged(Some(Appearance::VibrantDark)),
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(ChromeEvent::AccessoryAdded);
        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);

        // Should not panic
        publisher.publish(ChromeEvent::AccessoryAdded);
    }

    #[test]
    fn test_publisher_from_other_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || publisher.publish(ChromeEvent::ContentViewReplaced))
            .join()
            .unwrap();

        assert_eq!(bus.drain(), vec![ChromeEvent::ContentViewReplaced]);
    }
}
