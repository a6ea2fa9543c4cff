//! Tests for the drag & reorder protocol
//!
//! These tests verify drag-session behavior end to end and document the
//! protocol's design decisions.
//!
//! ## One Swap Per Crossing
//!
//! Reordering is a single pairwise swap per move event that crosses into
//! another tab's extents, never a full re-sort. The displaced tab is
//! locked while its position animation is in flight and locked tabs are
//! skipped by the hit test, so a cursor hovering over a tab that is still
//! animating cannot thrash the same swap back and forth.
//!
//! ## Pinned Tabs
//!
//! A press on a pinned tab still selects it, but arms the session with
//! `can_drag` false and never attaches the move listener; pinned tabs are
//! also skipped as swap targets. Pinned tabs therefore neither initiate
//! nor participate in drag reordering.
//!
//! ## Listener Lifecycle
//!
//! The shared move listener is attached at most once per press and
//! detached unconditionally on release, whether or not a reorder happened,
//! so stale listeners cannot leak across drag sessions.

use skiff::config::Config;
use skiff::tab::{PointerButton, TabId, TabStrip, TabStripAction};
use std::time::Duration;

fn settled_strip(n: usize) -> TabStrip {
    let mut strip = TabStrip::new(Config::default(), 800.0);
    for _ in 0..n {
        strip.add_tab();
    }
    let t0 = strip.now();
    strip.tick(t0 + Duration::from_millis(5));
    strip
}

fn ids(strip: &TabStrip) -> Vec<TabId> {
    strip.tabs().iter().map(|t| t.id).collect()
}

// ============================================================================
// Dragging slot 0 past slot 1
// ============================================================================

#[test]
fn dragging_first_tab_past_second_swaps_exactly_once() {
    // collection = [A, B, C], tabs 190 wide at 0 / 190 / 380
    let mut strip = settled_strip(3);
    let order = ids(&strip);
    let (a, b, c) = (order[0], order[1], order[2]);

    strip.press_tab(a, 40.0, PointerButton::Primary);
    // cross B's midpoint
    strip.drag_to(285.0);

    assert_eq!(ids(&strip), vec![b, a, c]);
    assert!(strip.get_tab(b).unwrap().locked);

    // B is still animating: hovering over it again must not swap back
    strip.drag_to(150.0);
    strip.drag_to(90.0);
    assert_eq!(ids(&strip), vec![b, a, c]);

    strip.release_drag();

    // lock clears after the configured duration
    let t0 = strip.now();
    strip.tick(t0 + Duration::from_millis(400));
    assert!(!strip.get_tab(b).unwrap().locked);
    assert!(!strip.get_tab(a).unwrap().locked);
}

#[test]
fn unlocked_tab_can_be_crossed_back() {
    let mut strip = settled_strip(3);
    let order = ids(&strip);
    let (a, b, c) = (order[0], order[1], order[2]);

    strip.press_tab(a, 40.0, PointerButton::Primary);
    strip.drag_to(285.0);
    assert_eq!(ids(&strip), vec![b, a, c]);

    // wait out B's animation mid-drag, then cross back over it
    let t0 = strip.now();
    strip.tick(t0 + Duration::from_millis(400));
    strip.drag_to(90.0);
    assert_eq!(ids(&strip), vec![a, b, c]);
}

#[test]
fn dragged_tab_settles_into_its_new_slot_on_release() {
    let mut strip = settled_strip(3);
    let order = ids(&strip);
    let a = order[0];

    strip.press_tab(a, 40.0, PointerButton::Primary);
    strip.drag_to(285.0);
    strip.release_drag();

    assert!(strip.drag_session().is_none());
    assert_eq!(strip.get_tab(a).unwrap().left, 190.0);

    let layout = strip.get_positions();
    for (tab, left) in strip.tabs().iter().zip(layout.tab_positions) {
        assert_eq!(tab.left, left);
    }
}

// ============================================================================
// Pinned tabs
// ============================================================================

#[test]
fn pinned_tab_never_initiates_a_reorder() {
    let mut strip = settled_strip(3);
    let order = ids(&strip);
    strip.set_pinned(order[0], true);

    strip.press_tab(order[0], 10.0, PointerButton::Primary);
    assert_eq!(strip.selected_tab_id(), Some(order[0]));

    strip.drag_to(300.0);
    strip.drag_to(500.0);
    assert_eq!(ids(&strip), order);

    strip.release_drag();
    assert_eq!(ids(&strip), order);
}

#[test]
fn pinned_tab_is_never_a_swap_target() {
    let mut strip = settled_strip(3);
    let order = ids(&strip);
    strip.set_pinned(order[1], true);

    strip.press_tab(order[0], 10.0, PointerButton::Primary);
    let pinned = strip.get_tab(order[1]).unwrap();
    let over_pinned = pinned.left + pinned.width / 2.0;
    strip.drag_to(over_pinned);

    assert_eq!(ids(&strip), order);
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn moves_without_a_press_are_ignored() {
    let mut strip = settled_strip(3);
    let before: Vec<f32> = strip.tabs().iter().map(|t| t.left).collect();

    strip.drag_to(250.0);
    let after: Vec<f32> = strip.tabs().iter().map(|t| t.left).collect();
    assert_eq!(before, after);
    assert_eq!(ids(&strip), ids(&strip));
}

#[test]
fn release_without_a_session_is_a_no_op() {
    let mut strip = settled_strip(2);
    strip.release_drag();
    assert!(strip.drag_session().is_none());
}

#[test]
fn a_new_press_rearms_after_release() {
    let mut strip = settled_strip(3);
    let order = ids(&strip);

    strip.press_tab(order[0], 40.0, PointerButton::Primary);
    strip.release_drag();

    // the old session is gone; a fresh press drags normally
    strip.press_tab(order[2], 400.0, PointerButton::Primary);
    strip.drag_to(250.0);
    assert_eq!(ids(&strip), vec![order[0], order[2], order[1]]);
}

#[test]
fn actions_drive_the_drag_protocol() {
    let mut strip = settled_strip(3);
    let order = ids(&strip);

    strip.handle(TabStripAction::Press {
        tab: order[0],
        mouse_x: 40.0,
        button: PointerButton::Primary,
    });
    strip.handle(TabStripAction::DragMove { mouse_x: 285.0 });
    strip.handle(TabStripAction::ReleaseDrag);

    assert_eq!(ids(&strip), vec![order[1], order[0], order[2]]);
    assert!(strip.drag_session().is_none());
}
