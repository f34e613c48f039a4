use std::cell::Cell;
use std::rc::Rc;

use labs::clock::Ticker;

use super::*;

#[test]
fn period_millis_clamps() {
    assert_eq!(period_millis(Duration::from_secs(1)), 1000);
    assert_eq!(period_millis(Duration::ZERO), 1);
    assert_eq!(period_millis(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
}

#[test]
fn inert_clock_never_fires_but_tracks_handle() {
    let fired = Rc::new(Cell::new(0));
    let mut ticker = Ticker::per_second(InertClock);
    let counter = Rc::clone(&fired);
    assert!(ticker.start(move || counter.set(counter.get() + 1)));
    assert!(ticker.is_running());
    assert!(ticker.stop());
    assert!(!ticker.is_running());
    assert_eq!(fired.get(), 0);
}
