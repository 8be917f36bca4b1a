//! One-shot UI timers that die with their owning component.
//!
//! SYSTEM CONTEXT
//! ==============
//! The submit spinner delay and the rock-break timer are fire-and-forget.
//! A `MountGuard` is created in the component body, where it registers an
//! `on_cleanup` that clears its liveness flag; a timer that fires after the
//! component unmounted is dropped instead of writing to disposed signals.
//! SSR never schedules timers.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Must be called while the owning component is being built.
    #[must_use]
    pub fn new() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self { alive }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run `f` once after `delay` if the component is still mounted.
    pub fn after<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let guard = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if guard.is_alive() {
                    f();
                } else {
                    log::debug!("timer fired after unmount; discarded");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, f);
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
