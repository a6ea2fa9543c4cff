//! Per-frame strip snapshot for the render layer.
//!
//! The engine owns the authoritative visual state; the style/layout layer
//! consumes a serializable projection of it once per frame and applies
//! styles from that, never mutating the strip directly. Collapsing tabs
//! that have already left the order are included so the close animation
//! stays renderable until its removal task fires.

use crate::tab::{Tab, TabBackground, TabId, TabStrip};
use serde::{Deserialize, Serialize};

/// One tab's visual state for a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
    pub pinned: bool,
    pub selected: bool,
    pub locked: bool,
    pub width: f32,
    pub left: f32,
    /// Whether the tab body renders with the selected emphasis
    pub emphasized: bool,
    pub z_index: u8,
    pub close_opacity: f32,
    pub pointer_events: bool,
    pub left_small_border: bool,
    pub right_small_border: bool,
    pub left_full_border: bool,
    pub right_full_border: bool,
    /// Composite CSS-style transition declaration
    pub transition: String,
}

impl TabSnapshot {
    fn of(tab: &Tab) -> Self {
        Self {
            id: tab.id,
            title: tab.title.clone(),
            pinned: tab.pinned,
            selected: tab.selected,
            locked: tab.locked,
            width: tab.width,
            left: tab.left,
            emphasized: tab.background == TabBackground::Emphasis,
            z_index: tab.z_index,
            close_opacity: tab.close_opacity,
            pointer_events: tab.pointer_events,
            left_small_border: tab.borders.left_small,
            right_small_border: tab.borders.right_small,
            left_full_border: tab.borders.left_full,
            right_full_border: tab.borders.right_full,
            transition: tab.transitions.declaration(),
        }
    }
}

/// The whole strip for a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripSnapshot {
    /// Tabs in display order
    pub tabs: Vec<TabSnapshot>,
    /// Tabs removed from the order that are still width-collapsing
    pub closing_tabs: Vec<TabSnapshot>,
    pub selected_tab: Option<TabId>,
    pub drag_active: bool,
}

impl StripSnapshot {
    /// Project the strip's current visual state.
    pub fn capture(strip: &TabStrip) -> Self {
        Self {
            tabs: strip.tabs().iter().map(TabSnapshot::of).collect(),
            closing_tabs: strip.closing_tabs().iter().map(TabSnapshot::of).collect(),
            selected_tab: strip.selected_tab_id(),
            drag_active: strip.drag_session().is_some(),
        }
    }
}
