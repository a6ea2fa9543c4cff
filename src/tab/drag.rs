//! Drag session state and the pairwise reorder protocol.
//!
//! A primary-button press on a tab body arms a drag session on the strip
//! and attaches the shared mouse-move listener. While the button is held,
//! every move event lets the dragged tab follow the cursor directly and
//! hit-tests the cursor against the other tabs; a hit swaps exactly one
//! pair of order indices. The tab displaced by a swap is locked while its
//! position animation is in flight, so it cannot be re-hit and a slow
//! drag cannot thrash swaps back and forth across one boundary.

use super::strip::TabStrip;
use super::{PointerButton, TabId};
use crate::scheduler::TaskKind;
use crate::transitions::TransitionProperty;
use std::time::Duration;

/// Transient drag state, alive between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Tab the session was armed on
    pub tab: TabId,
    /// Tab's left offset at press time
    pub tab_x: f32,
    /// Cursor x at press time
    pub mouse_click_x: f32,
    /// Pinned tabs never reorder by drag
    pub can_drag: bool,
}

impl TabStrip {
    /// Button press on a tab body (not on its close affordance): arm the
    /// drag session, select the pressed tab, and attach the shared move
    /// listener. Press-to-select applies regardless of the drag outcome;
    /// the listener is only attached for draggable tabs.
    pub fn press_tab(&mut self, id: TabId, mouse_x: f32, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        let (tab_x, pinned) = match self.get_tab(id) {
            Some(tab) => (tab.left, tab.pinned),
            None => return,
        };

        self.drag = Some(DragSession {
            tab: id,
            tab_x,
            mouse_click_x: mouse_x,
            can_drag: !pinned,
        });

        self.select_tab(id);

        if !pinned {
            self.move_listener_attached = true;
        }
    }

    /// Mouse moved while the button is held: the dragged tab follows the
    /// cursor with no transition, then the cursor is hit-tested for a
    /// swap.
    pub fn drag_to(&mut self, mouse_x: f32) {
        if !self.move_listener_attached {
            return;
        }
        let Some(session) = self.drag else {
            return;
        };
        if !session.can_drag {
            return;
        }
        let Some(index) = self.index_of(session.tab) else {
            return;
        };

        let max_left =
            (self.strip_width - self.config.new_tab_button_width - self.tabs[index].width).max(0.0);
        let left = (session.tab_x + mouse_x - session.mouse_click_x).clamp(0.0, max_left);
        self.tabs[index].remove_transition(TransitionProperty::Left);
        self.tabs[index].set_left(left);

        self.find_tab_to_replace(mouse_x);
    }

    /// Hit-test the cursor against the other tabs' extents; a non-pinned
    /// hit swaps the two order indices. One pairwise swap per move event.
    pub fn find_tab_to_replace(&mut self, cursor_x: f32) {
        let Some(session) = self.drag else {
            return;
        };
        let Some(dragged_index) = self.index_of(session.tab) else {
            return;
        };
        if self.tabs[dragged_index].pinned {
            return;
        }

        let Some(over_id) = self.get_tab_from_mouse_x(session.tab, cursor_x) else {
            return;
        };
        let Some(over_index) = self.index_of(over_id) else {
            return;
        };
        if self.tabs[over_index].pinned {
            return;
        }

        self.replace_tabs(dragged_index, over_index);
    }

    /// Tab whose current extents contain `mouse_x`, excluding `excluding`
    /// and any tab whose position animation is still in flight.
    pub fn get_tab_from_mouse_x(&self, excluding: TabId, mouse_x: f32) -> Option<TabId> {
        self.tabs
            .iter()
            .find(|t| {
                t.id != excluding
                    && !t.locked
                    && mouse_x >= t.left
                    && mouse_x <= t.left + t.width
            })
            .map(|t| t.id)
    }

    /// Swap two order indices and settle whichever of the pair is not
    /// being dragged (the dragged tab keeps following the cursor).
    pub fn replace_tabs(&mut self, first: usize, second: usize) {
        if first == second || first >= self.tabs.len() || second >= self.tabs.len() {
            return;
        }

        log::debug!("Swapping tab order {} <-> {}", first, second);
        self.tabs.swap(first, second);

        let dragging = self.drag.map(|d| d.tab);
        let first_id = self.tabs[first].id;
        let second_id = self.tabs[second].id;
        if Some(first_id) != dragging {
            self.update_position(first_id);
        }
        if Some(second_id) != dragging {
            self.update_position(second_id);
        }
    }

    /// Button released: detach the shared listener unconditionally, then
    /// settle the dragged tab into its final slot.
    pub fn release_drag(&mut self) {
        self.move_listener_attached = false;
        let Some(session) = self.drag.take() else {
            return;
        };
        if session.can_drag {
            self.update_position(session.tab);
        }
    }

    /// Animate a tab into the slot the current order assigns it.
    ///
    /// The tab is locked for the duration of the animation so it cannot be
    /// used as a drop target while it is still moving.
    pub fn update_position(&mut self, id: TabId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let layout = self.get_positions();
        let Some(&new_left) = layout.tab_positions.get(index) else {
            return;
        };

        let animation = self.config.animation;
        {
            let tab = &mut self.tabs[index];
            tab.locked = true;
            tab.append_transition(TransitionProperty::Left, &animation);
            tab.set_left(new_left);
        }

        let due = self.now + Duration::from_secs_f32(animation.positioning_duration);
        self.scheduler.schedule(due, TaskKind::UnlockTab(id));

        self.update_tabs();

        // the thin leading marker separates unselected neighbours; the
        // first slot has nothing to its left
        self.tabs[index].borders.left_small = index != 0;
    }

    /// Cross-tab bookkeeping refreshed whenever the order changes: thin
    /// markers follow the order, unselected tabs carry no full borders,
    /// the background fade stays declared, and the selected tab's border
    /// rules are reapplied on top.
    pub fn update_tabs(&mut self) {
        let animation = self.config.animation;
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.append_transition(TransitionProperty::BackgroundColor, &animation);
            tab.borders.left_small = index != 0;
            if !tab.selected {
                tab.borders.right_small = true;
                tab.borders.left_full = false;
                tab.borders.right_full = false;
            }
        }
        if let Some(selected) = self.selected_tab_id.and_then(|id| self.index_of(id)) {
            self.apply_select_borders(selected);
        }
    }
}
