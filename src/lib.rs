//! `clickstream_core` is the event-interception and health-event gating layer of the Clickstream
//! SDK. It is a library surface embedded by the larger SDK; it owns no networking, storage, or UI.
//!
//! # Overview
//!
//! `clickstream_core` is organized as a small set of building blocks that the transport pipeline
//! and the telemetry module call into.
//!
//! [`EventInterceptor`] is the capability contract for side-observers of outgoing events. The
//! transport pipeline packages already-serialized events into an immutable [`EventBatch`] and
//! notifies the active interceptor right around send. The notification is fire-and-forget:
//! interceptors observe, they never transform.
//!
//! [`InterceptorRegistry`] is a thread-safe holder that lazily constructs and hands out the
//! process-wide interceptor instance. Construction happens at most once, even under concurrent
//! first access; when nothing was installed, callers get a [`NoOpInterceptor`] so call sites never
//! branch on "no interceptor configured".
//!
//! [`HealthEventConfig`] decides whether an internal diagnostic (*health*) event is eligible to be
//! emitted at all, based on app version, user-id sampling bucket, and configured verbosity. It is
//! an immutable snapshot: whenever remote configuration changes, the host swaps the whole value,
//! it never mutates fields in place. All of its checks fail closed—blank or malformed
//! configuration silently disables health reporting rather than over-reporting or crashing the
//! host pipeline.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. The gating operations themselves are total
//! functions and never fail; [`Error`] only surfaces at the configuration boundary
//! ([`HealthEventConfig::from_json`]).
//!
//! # Logging
//!
//! The crate uses the [`log`](https://docs.rs/log/latest/log/) crate for logging messages.
//! Consider integrating a `log`-compatible logger implementation for better visibility into SDK
//! operations.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod error;
mod events;
mod health_event_config;
mod interceptor;
mod interceptor_registry;
mod version;

pub use error::{Error, Result};
pub use events::{EventBatch, InterceptedEvent};
pub use health_event_config::{HealthEventConfig, HealthEventName, MAX_VERBOSITY_LEVEL};
pub use interceptor::{EventInterceptor, NoOpInterceptor};
pub use interceptor_registry::{InterceptorRegistry, SharedInterceptor};
pub use version::version_to_numeric;
