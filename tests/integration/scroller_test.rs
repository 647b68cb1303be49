//! Integration tests for the auto scroller's public surface

use std::time::Duration;

use autopager::{IntermissionDuration, ScrollerState};

use crate::helpers::ScrollerHarness;

// ============================================================================
// Enable / disable
// ============================================================================

#[test]
fn second_enable_is_ignored() {
    let h = ScrollerHarness::new();
    h.scroller.enable(None);
    let timer = h.scroller.timer_id();

    h.scroller.enable(Some(IntermissionDuration::Custom(1.0)));

    assert_eq!(h.run_loop.timer_count(), 1);
    assert_eq!(h.scroller.timer_id(), timer);
    assert_eq!(h.scroller.intermission_duration(), IntermissionDuration::Short);
}

#[test]
fn disable_without_enable_never_notifies() {
    let h = ScrollerHarness::new();
    h.scroller.disable();
    h.scroller.disable();

    for _ in 0..5 {
        assert_eq!(h.tick(5.0), 0);
    }
    assert_eq!(h.delegate.count(), 0);
    assert_eq!(h.scroller.state(), ScrollerState::Stopped);
}

#[test]
fn no_tick_after_disable() {
    let h = ScrollerHarness::new();
    h.scroller.enable(None);
    assert_eq!(h.tick(5.0), 1);

    h.scroller.disable();

    assert_eq!(h.tick(5.0), 0);
    assert_eq!(h.delegate.count(), 1);
}

// ============================================================================
// Durations
// ============================================================================

#[test]
fn resolved_intervals() {
    assert_eq!(IntermissionDuration::Short.seconds(), 5.0);
    assert_eq!(IntermissionDuration::Long.seconds(), 10.0);
    assert_eq!(IntermissionDuration::Custom(7.5).seconds(), 7.5);
}

#[test]
fn long_duration_three_ticks() {
    let h = ScrollerHarness::new();
    h.scroller.enable(Some(IntermissionDuration::Long));

    for _ in 0..3 {
        assert_eq!(h.tick(10.0), 1);
    }

    assert_eq!(h.delegate.count(), 3);
    assert!(h.delegate.all_from(&h.scroller));
}

#[test]
fn duration_sticks_after_disable() {
    let h = ScrollerHarness::new();
    h.scroller.enable(Some(IntermissionDuration::Custom(7.5)));
    h.scroller.disable();

    h.scroller.enable(None);

    assert_eq!(h.scroller.intermission_duration(), IntermissionDuration::Custom(7.5));
    assert_eq!(h.scroller.interval(), Duration::from_millis(7500));
    assert_eq!(h.tick(7.0), 0);
    assert_eq!(h.tick(0.5), 1);
}

// ============================================================================
// Lifetime
// ============================================================================

#[test]
fn dropping_scroller_releases_its_timer() {
    let h = ScrollerHarness::new();
    h.scroller.enable(None);
    let ScrollerHarness {
        clock,
        run_loop,
        scroller,
        delegate,
    } = h;

    drop(scroller);

    assert_eq!(run_loop.timer_count(), 0);
    clock.advance_secs(5.0);
    assert_eq!(run_loop.fire_due(), 0);
    assert_eq!(delegate.count(), 0);
}

#[test]
fn delegate_is_not_kept_alive_by_scroller() {
    let h = ScrollerHarness::new();
    h.scroller.enable(None);
    let ScrollerHarness {
        clock,
        run_loop,
        scroller,
        delegate,
    } = h;
    let weak = std::rc::Rc::downgrade(&delegate);

    drop(delegate);

    assert!(weak.upgrade().is_none());
    clock.advance_secs(5.0);
    assert_eq!(run_loop.fire_due(), 1);
    assert!(scroller.is_enabled());
}
