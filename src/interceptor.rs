use crate::events::EventBatch;

/// Capability contract for observing batches of outgoing events.
///
/// The transport pipeline calls [`on_intercept`][EventInterceptor::on_intercept] with each batch
/// right around send. This is a one-way notification for side-effecting observers (debugging,
/// visualization), not a transform: the batch is read-only and must not be retained beyond the
/// call.
///
/// Implementations must not panic; the core does not guard against it, and a panicking observer
/// would take the calling pipeline worker down with it. Hosts composing untrusted observers
/// should fail-soft per observer.
pub trait EventInterceptor {
    /// Observe one batch of prepared events, in insertion order.
    fn on_intercept(&self, events: &EventBatch);
}

/// An [`EventInterceptor`] that performs no action.
///
/// Used when no observer is configured, so call sites invoke the interceptor unconditionally
/// instead of branching on "none configured".
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpInterceptor;

impl EventInterceptor for NoOpInterceptor {
    fn on_intercept(&self, _events: &EventBatch) {}
}

impl<T: Fn(&EventBatch)> EventInterceptor for T {
    fn on_intercept(&self, events: &EventBatch) {
        self(events)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::{EventInterceptor, NoOpInterceptor};
    use crate::events::{EventBatch, InterceptedEvent};

    #[test]
    fn noop_ignores_batches() {
        let batch = EventBatch::new(vec![InterceptedEvent::new("1", "test", vec![])]);
        NoOpInterceptor.on_intercept(&batch);
    }

    #[test]
    fn closures_are_interceptors() {
        let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let interceptor = |events: &EventBatch| {
            let mut seen = seen.lock().unwrap();
            seen.extend(events.iter().map(|e| e.event_name.clone()));
        };

        let batch = EventBatch::new(vec![
            InterceptedEvent::new("1", "first", vec![]),
            InterceptedEvent::new("2", "second", vec![]),
        ]);
        interceptor.on_intercept(&batch);

        assert_eq!(*seen.lock().unwrap(), ["first", "second"]);
    }
}
