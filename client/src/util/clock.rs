//! Browser-backed [`Clock`] for panel timers.
//!
//! In the browser every tick comes from a `gloo-timers` [`Interval`]; on the
//! server there is no event loop to drive one, so [`BrowserClock`] is an
//! inert clock whose timers never fire. Panels only start timers from event
//! handlers, which never run during SSR.
//!
//! [`Interval`]: gloo_timers::callback::Interval

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::time::Duration;

use labs::clock::{Clock, TimerHandle};

#[cfg(feature = "hydrate")]
pub type BrowserClock = IntervalClock;
#[cfg(not(feature = "hydrate"))]
pub type BrowserClock = InertClock;

/// Interval length in whole milliseconds, clamped to `1..=u32::MAX`.
#[must_use]
pub fn period_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1)
}

// =============================================================================
// INTERVAL CLOCK (browser)
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalClock;

#[cfg(feature = "hydrate")]
pub struct IntervalHandle(gloo_timers::callback::Interval);

#[cfg(feature = "hydrate")]
impl Clock for IntervalClock {
    type Handle = IntervalHandle;

    fn every(&self, period: Duration, mut on_tick: Box<dyn FnMut()>) -> IntervalHandle {
        IntervalHandle(gloo_timers::callback::Interval::new(period_millis(period), move || on_tick()))
    }
}

#[cfg(feature = "hydrate")]
impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        // Dropping the returned closure releases the JS callback.
        drop(self.0.cancel());
    }
}

// =============================================================================
// INERT CLOCK (server, native tests)
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct InertClock;

#[derive(Debug)]
pub struct InertHandle;

impl Clock for InertClock {
    type Handle = InertHandle;

    fn every(&self, _period: Duration, _on_tick: Box<dyn FnMut()>) -> InertHandle {
        InertHandle
    }
}

impl TimerHandle for InertHandle {
    fn cancel(self) {}
}
