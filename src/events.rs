//! Events as observed by interceptors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One outgoing event, already serialized for transport.
///
/// The internal shape of the payload is owned by the transport layer; interceptors only observe
/// the event as an opaque value with an identity and a payload size. Created by the transport
/// layer per event, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptedEvent {
    /// Unique id assigned by the transport layer.
    pub uuid: String,
    /// Name of the underlying analytics event.
    pub event_name: String,
    /// When the event was prepared for transport.
    pub timestamp: DateTime<Utc>,
    payload: Vec<u8>,
}

impl InterceptedEvent {
    /// Wraps an already-serialized event for interception.
    pub fn new(
        uuid: impl Into<String>,
        event_name: impl Into<String>,
        payload: Vec<u8>,
    ) -> InterceptedEvent {
        InterceptedEvent {
            uuid: uuid.into(),
            event_name: event_name.into(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// The serialized payload, opaque to interceptors.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Size of the serialized payload in bytes.
    pub fn payload_size(&self) -> usize {
        self.payload.len()
    }
}

/// An ordered, immutable batch of [`InterceptedEvent`]s, scoped to one interceptor notification.
///
/// Interceptors receive the batch by reference and must not retain it beyond the call; if
/// retention is needed, the interceptor must copy. Events are observed in the order the transport
/// layer inserted them.
#[derive(Debug)]
pub struct EventBatch {
    events: Vec<InterceptedEvent>,
}

impl EventBatch {
    /// Packages a set of prepared events into a batch.
    pub fn new(events: Vec<InterceptedEvent>) -> EventBatch {
        EventBatch { events }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[InterceptedEvent] {
        &self.events
    }

    /// Total size in bytes of all payloads in the batch.
    pub fn total_payload_size(&self) -> usize {
        self.events.iter().map(InterceptedEvent::payload_size).sum()
    }
}

impl std::ops::Deref for EventBatch {
    type Target = [InterceptedEvent];

    fn deref(&self) -> &Self::Target {
        self.events()
    }
}
