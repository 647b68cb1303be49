//! Integration tests for the page container driving its auto scroller

use autopager::pager::NavigationDirection;
use autopager::runloop::{ManualClock, RunLoop};
use autopager::{IntermissionDuration, Page, PageContainer, ScrollerState};
use std::rc::Rc;

fn pager(pages: usize) -> (ManualClock, RunLoop, Rc<PageContainer>) {
    let clock = ManualClock::new();
    let run_loop = RunLoop::new(clock.clone());
    let pager = PageContainer::new(run_loop.clone(), pages);
    (clock, run_loop, pager)
}

#[test]
fn auto_scroll_walks_through_pages() {
    let (clock, run_loop, pager) = pager(5);
    pager.auto_scroller().enable(Some(IntermissionDuration::Long));

    for _ in 0..3 {
        clock.advance_secs(10.0);
        run_loop.fire_due();
    }

    assert_eq!(pager.current_index(), Some(3));
    assert_eq!(pager.auto_scroll_count(), 3);
    let change = pager.last_change().unwrap();
    assert_eq!(change.direction, NavigationDirection::Forward);
    assert!(change.automatic);
}

#[test]
fn cancel_before_first_tick_then_restart_resumes_at_short() {
    let (clock, run_loop, pager) = pager(5);
    let scroller = pager.auto_scroller();
    scroller.set_restarts_on_scroll_end(true);
    scroller.enable(None);

    clock.advance_secs(3.0);
    pager.drag_began();
    assert_eq!(scroller.state(), ScrollerState::StoppedPendingRestart);

    // Cancelled window: nothing fires however long the drag lasts
    clock.advance_secs(12.0);
    assert_eq!(run_loop.fire_due(), 0);
    assert_eq!(pager.auto_scroll_count(), 0);

    pager.drag_ended();
    assert_eq!(scroller.state(), ScrollerState::Running);
    assert_eq!(scroller.intermission_duration(), IntermissionDuration::Short);

    clock.advance_secs(4.5);
    assert_eq!(run_loop.fire_due(), 0);
    clock.advance_secs(0.5);
    assert_eq!(run_loop.fire_due(), 1);
    assert_eq!(pager.auto_scroll_count(), 1);
}

#[test]
fn drag_without_restart_policy_stays_paused() {
    let (clock, run_loop, pager) = pager(5);
    pager.auto_scroller().enable(None);

    assert!(pager.drag_to(Page::Next));

    let scroller = pager.auto_scroller();
    assert!(!scroller.is_enabled());
    assert!(scroller.is_pending_restart());
    clock.advance_secs(60.0);
    assert_eq!(run_loop.fire_due(), 0);

    // An explicit enable resumes and, by default, clears the pending resume
    scroller.enable(None);
    assert!(!scroller.is_pending_restart());
}

#[test]
fn drag_while_disabled_does_not_start_scrolling() {
    let (_clock, run_loop, pager) = pager(5);
    pager.auto_scroller().set_restarts_on_scroll_end(true);

    pager.drag_to(Page::Next);

    assert_eq!(pager.auto_scroller().state(), ScrollerState::Stopped);
    assert_eq!(run_loop.timer_count(), 0);
}

#[test]
fn auto_scroll_returns_to_first_page_at_end() {
    let (clock, run_loop, pager) = pager(3);
    pager.scroll_to(Page::Last);
    pager.auto_scroller().enable(None);

    clock.advance_secs(5.0);
    run_loop.fire_due();

    assert_eq!(pager.current_index(), Some(0));
}

#[test]
fn two_pagers_share_a_run_loop_independently() {
    let clock = ManualClock::new();
    let run_loop = RunLoop::new(clock.clone());
    let fast = PageContainer::new(run_loop.clone(), 10);
    let slow = PageContainer::new(run_loop.clone(), 10);
    fast.auto_scroller().enable(Some(IntermissionDuration::Short));
    slow.auto_scroller().enable(Some(IntermissionDuration::Long));

    for _ in 0..4 {
        clock.advance_secs(5.0);
        run_loop.fire_due();
    }

    assert_eq!(fast.current_index(), Some(4));
    assert_eq!(slow.current_index(), Some(2));
}
