//! Process-wide holder for the active event interceptor. [`InterceptorRegistry`] lazily
//! constructs the interceptor on first access and hands out the same instance for the rest of the
//! process lifetime, even when first access races across threads.

use std::sync::{Arc, OnceLock};

use crate::interceptor::{EventInterceptor, NoOpInterceptor};

/// Shared handle to the active interceptor.
pub type SharedInterceptor = Arc<dyn EventInterceptor + Send + Sync>;

/// Thread-safe, initialize-once holder for the interceptor used by the event pipeline.
///
/// The slot is written at most once. [`install`][InterceptorRegistry::install] is lazy and
/// idempotent: under concurrent first access, exactly one factory runs and every caller observes
/// the instance it produced. There is no teardown or replacement; the first installed interceptor
/// lives for the process lifetime.
///
/// The embedding pipeline normally goes through [`InterceptorRegistry::global`]. Tests and hosts
/// that want isolation construct their own registry and inject it instead of relying on the
/// process-wide one.
#[derive(Default)]
pub struct InterceptorRegistry {
    instance: OnceLock<SharedInterceptor>,
}

impl InterceptorRegistry {
    /// Create an empty registry. `const`, so registries can live in statics.
    pub const fn new() -> InterceptorRegistry {
        InterceptorRegistry {
            instance: OnceLock::new(),
        }
    }

    /// The process-wide registry used by the embedding pipeline.
    pub fn global() -> &'static InterceptorRegistry {
        static GLOBAL: InterceptorRegistry = InterceptorRegistry::new();
        &GLOBAL
    }

    /// Install the interceptor, constructing it with `factory` if the slot is still empty.
    ///
    /// Returns the active instance: the one just constructed, or the one that won an earlier (or
    /// concurrent) installation. Losing a race is not an error; the point is that every caller
    /// agrees on a single instance.
    ///
    /// Note that [`get_instance`][InterceptorRegistry::get_instance] fills an empty slot with a
    /// [`NoOpInterceptor`], so hosts must install before the pipeline first asks for the
    /// interceptor.
    pub fn install<F>(&self, factory: F) -> SharedInterceptor
    where
        F: FnOnce() -> SharedInterceptor,
    {
        let mut constructed = false;
        let instance = self.instance.get_or_init(|| {
            constructed = true;
            factory()
        });
        if constructed {
            log::debug!("event interceptor installed");
        }
        Arc::clone(instance)
    }

    /// The active interceptor.
    ///
    /// If nothing was installed yet, installs and returns a [`NoOpInterceptor`], fixing the no-op
    /// as the process-lifetime instance.
    pub fn get_instance(&self) -> SharedInterceptor {
        Arc::clone(self.instance.get_or_init(|| Arc::new(NoOpInterceptor)))
    }
}
