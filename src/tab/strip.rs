//! Tab strip: the ordered collection and its lifecycle state machine.

use super::{PointerButton, Tab, TabId};
use crate::geometry::{self, StripLayout, TabSpec};
use crate::page::{ContentSurface, Page};
use crate::scheduler::{TaskKind, TaskQueue};
use crate::transitions::TransitionProperty;
use serde::{Deserialize, Serialize};
use skiff_config::Config;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::drag::DragSession;

/// Delay before a freshly created tab is settled into the shared layout,
/// letting construction side effects finish without animating the first
/// placement from a wrong origin.
const SETTLE_DELAY: Duration = Duration::from_millis(1);

/// Factory producing the content surface for each new tab, given the
/// address it should open at.
pub type SurfaceFactory = Box<dyn FnMut(&str) -> Box<dyn ContentSurface>>;

/// Inputs the embedding shell feeds into the strip.
#[derive(Debug, Clone, PartialEq)]
pub enum TabStripAction {
    /// Create a new tab and select it
    NewTab,
    /// Select a specific tab
    Select(TabId),
    /// Close a specific tab
    Close(TabId),
    /// Primary/secondary button press on a tab body
    Press {
        tab: TabId,
        mouse_x: f32,
        button: PointerButton,
    },
    /// Mouse moved while a button is held
    DragMove { mouse_x: f32 },
    /// Button released, ending any drag session
    ReleaseDrag,
    /// Reopen the most recently closed tab
    ReopenClosed,
    /// Pin or unpin a tab
    SetPinned(TabId, bool),
    /// Strip width changed (window resize)
    Resize { strip_width: f32 },
}

/// Idle timer driving the auto-new-tab behavior.
///
/// Every close resets `time` and arms `can_reset`; once the strip has been
/// idle long enough with more than one tab open, it opens a tab once and
/// disarms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdleTimer {
    /// Seconds since the last close-driven reset
    pub time: f32,
    /// Whether the next idle period may open a tab
    pub can_reset: bool,
}

/// Address remembered from a closed tab, for reopen support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedTab {
    pub address: String,
    pub title: String,
}

/// The ordered tab collection.
///
/// Order is the single source of truth for layout; widths and left
/// offsets are derived from it. All selection flows through
/// [`TabStrip::select_tab`] so the single-selection invariant is enforced
/// in one place, and all deferred work flows through [`TabStrip::tick`].
pub struct TabStrip {
    /// All tabs, in display order
    pub(super) tabs: Vec<Tab>,
    /// Tabs removed from the order that are still width-collapsing
    pub(super) closing_tabs: Vec<Tab>,
    /// Currently selected tab ID
    pub(super) selected_tab_id: Option<TabId>,
    /// Counter for generating unique tab IDs
    pub(super) next_tab_id: TabId,
    /// Width available to the strip
    pub(super) strip_width: f32,
    pub(super) config: Config,
    /// Transient drag session, present between press and release
    pub(super) drag: Option<DragSession>,
    /// Whether the shared mouse-move listener is attached
    pub(super) move_listener_attached: bool,
    /// Idle auto-new-tab timer
    pub timer: IdleTimer,
    /// Most recently closed tabs, newest at the back
    pub(super) closed_tabs: VecDeque<ClosedTab>,
    pub(super) scheduler: TaskQueue,
    /// The strip's notion of current time, advanced by `tick`
    pub(super) now: Instant,
    pub(super) surface_factory: SurfaceFactory,
}

impl TabStrip {
    /// Create an empty strip backed by default [`Page`] surfaces.
    pub fn new(config: Config, strip_width: f32) -> Self {
        Self::with_surface_factory(
            config,
            strip_width,
            Box::new(|address: &str| -> Box<dyn ContentSurface> { Box::new(Page::new(address)) }),
        )
    }

    /// Create an empty strip with a custom content-surface factory.
    pub fn with_surface_factory(
        config: Config,
        strip_width: f32,
        surface_factory: SurfaceFactory,
    ) -> Self {
        Self {
            tabs: Vec::new(),
            closing_tabs: Vec::new(),
            selected_tab_id: None,
            next_tab_id: 1,
            strip_width,
            config,
            drag: None,
            move_listener_attached: false,
            timer: IdleTimer::default(),
            closed_tabs: VecDeque::new(),
            scheduler: TaskQueue::new(),
            now: Instant::now(),
            surface_factory,
        }
    }

    /// Apply one shell-originated action.
    pub fn handle(&mut self, action: TabStripAction) {
        match action {
            TabStripAction::NewTab => {
                self.add_tab();
            }
            TabStripAction::Select(id) => self.select_tab(id),
            TabStripAction::Close(id) => {
                self.close_tab(id);
            }
            TabStripAction::Press {
                tab,
                mouse_x,
                button,
            } => self.press_tab(tab, mouse_x, button),
            TabStripAction::DragMove { mouse_x } => self.drag_to(mouse_x),
            TabStripAction::ReleaseDrag => self.release_drag(),
            TabStripAction::ReopenClosed => {
                self.reopen_closed_tab();
            }
            TabStripAction::SetPinned(id, pinned) => self.set_pinned(id, pinned),
            TabStripAction::Resize { strip_width } => self.resize(strip_width),
        }
    }

    /// Create a new tab, select it, and return its ID.
    pub fn add_tab(&mut self) -> TabId {
        let address = self.config.new_tab_address.clone();
        let id = self.spawn_tab(&address);
        self.select_tab(id);
        id
    }

    /// Append a tab without touching the selection.
    ///
    /// The initial left offset is fetched synchronously so the tab does
    /// not flash in at zero; widths and positions for the whole strip
    /// settle on the scheduled tick once construction side effects are
    /// done, and only then does the left transition start applying.
    pub(super) fn spawn_tab(&mut self, address: &str) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;

        let surface = (self.surface_factory)(address);
        let mut tab = Tab::new(id, surface);
        tab.append_transition(TransitionProperty::Width, &self.config.animation);

        let index = self.tabs.len();
        self.tabs.push(tab);
        let layout = self.get_positions();
        if let Some(&left) = layout.tab_positions.get(index) {
            self.tabs[index].set_left(left);
        }

        self.scheduler
            .schedule(self.now + SETTLE_DELAY, TaskKind::SettleNewTab(id));

        log::info!("Created new tab {} (total: {})", id, self.tabs.len());
        id
    }

    /// Select a tab, deselecting the previously selected tab as part of
    /// the same operation. All selection is routed through here.
    pub fn select_tab(&mut self, id: TabId) {
        if self.selected_tab_id == Some(id) {
            return;
        }
        let Some(index) = self.index_of(id) else {
            return;
        };

        if let Some(prev_id) = self.selected_tab_id.take() {
            if let Some(prev_index) = self.index_of(prev_id) {
                self.apply_deselect(prev_index);
            }
        }

        self.apply_select(index);
        self.selected_tab_id = Some(id);
        log::debug!("Selected tab {}", id);
    }

    fn apply_select(&mut self, index: usize) {
        self.tabs[index].apply_selected_style();
        self.apply_select_borders(index);
    }

    /// Order-dependent border rules for the selected tab: a full leading
    /// border unless first in order, and no thin trailing marker on the
    /// preceding tab (two emphasised borders must not double up).
    pub(super) fn apply_select_borders(&mut self, index: usize) {
        {
            let tab = &mut self.tabs[index];
            tab.borders.right_small = false;
            tab.borders.left_full = index != 0;
            tab.borders.right_full = true;
        }
        if index > 0 {
            self.tabs[index - 1].borders.right_small = false;
        }
    }

    fn apply_deselect(&mut self, index: usize) {
        self.tabs[index].apply_deselected_style();
        if index > 0 {
            self.tabs[index - 1].borders.right_small = true;
        }
    }

    /// Close a tab. Returns true if the tab existed.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        // The strip must never be observably empty: spawn the replacement
        // before the removal below. It is appended unselected, so the
        // succession logic picks it up as the next tab by order.
        if self.tabs.len() == 1 {
            let address = self.config.new_tab_address.clone();
            self.spawn_tab(&address);
        }

        let closed = ClosedTab {
            address: self.tabs[index].page.address().to_string(),
            title: self.tabs[index].title.clone(),
        };
        self.remember_closed(closed);

        self.timer.can_reset = true;

        let mut closing = self.tabs.remove(index);
        // the background must jump, not fade, during the width collapse
        closing.remove_transition(TransitionProperty::BackgroundColor);
        closing.pointer_events = false;
        closing.page.dispose();

        if closing.selected {
            self.selected_tab_id = None;
            // succession: next by order, else previous, else the first tab
            // of the mutated collection; all absent only when the strip is
            // transiently empty, which the replacement above prevents
            let successor = self
                .tabs
                .get(index)
                .map(|t| t.id)
                .or_else(|| index.checked_sub(1).and_then(|i| self.tabs.get(i)).map(|t| t.id))
                .or_else(|| self.tabs.first().map(|t| t.id));
            if let Some(next_id) = successor {
                self.select_tab(next_id);
            }
        }

        // widths only change when the trailing slot disappears; a
        // mid-strip close just shifts the neighbours left
        let was_last = index == self.tabs.len();
        if was_last {
            self.set_widths();
            self.set_positions();
        }

        if was_last && closing.width < self.config.tab_normal_width {
            // already visually collapsed, drop without animating
            log::debug!("Tab {} dropped without collapse animation", id);
        } else {
            self.animate_close(closing);
        }

        self.timer.time = 0.0;
        self.set_positions();

        log::info!("Closed tab {} (total: {})", id, self.tabs.len());
        true
    }

    /// Collapse a removed tab's width to zero and keep it renderable until
    /// the positioning duration has elapsed.
    fn animate_close(&mut self, mut tab: Tab) {
        tab.append_transition(TransitionProperty::Width, &self.config.animation);
        tab.set_width(0.0);

        let due = self.now + Duration::from_secs_f32(self.config.animation.positioning_duration);
        self.scheduler.schedule(due, TaskKind::RemoveClosingTab(tab.id));
        self.closing_tabs.push(tab);
    }

    fn remember_closed(&mut self, closed: ClosedTab) {
        log::debug!("Remembering closed tab at {}", closed.address);
        self.closed_tabs.push_back(closed);
        while self.closed_tabs.len() > self.config.max_closed_tabs {
            self.closed_tabs.pop_front();
        }
    }

    /// Address of the most recently closed tab, if any.
    pub fn last_closed_address(&self) -> Option<&str> {
        self.closed_tabs.back().map(|c| c.address.as_str())
    }

    /// Remembered closed tabs, oldest first.
    pub fn closed_tabs(&self) -> impl Iterator<Item = &ClosedTab> {
        self.closed_tabs.iter()
    }

    /// Reopen the most recently closed tab and select it.
    pub fn reopen_closed_tab(&mut self) -> Option<TabId> {
        let closed = self.closed_tabs.pop_back()?;
        log::info!("Reopening closed tab at {}", closed.address);

        let id = self.spawn_tab(&closed.address);
        if let Some(tab) = self.get_tab_mut(id) {
            tab.title = closed.title;
        }
        self.select_tab(id);
        Some(id)
    }

    /// Pin or unpin a tab. Pinned tabs keep a fixed width and opt out of
    /// drag reordering.
    pub fn set_pinned(&mut self, id: TabId, pinned: bool) {
        let Some(tab) = self.get_tab_mut(id) else {
            return;
        };
        if tab.pinned == pinned {
            return;
        }
        tab.pinned = pinned;
        log::debug!("Tab {} pinned: {}", id, pinned);
        self.set_widths();
        self.set_positions();
    }

    /// Update a tab's display title.
    pub fn set_title(&mut self, id: TabId, title: impl Into<String>) {
        if let Some(tab) = self.get_tab_mut(id) {
            tab.title = title.into();
        }
    }

    /// Strip width changed: recompute all extents.
    pub fn resize(&mut self, strip_width: f32) {
        self.strip_width = strip_width;
        self.set_widths();
        self.set_positions();
    }

    /// Left offsets for the current order, from the widths tabs currently
    /// have.
    pub fn get_positions(&self) -> StripLayout {
        let widths: Vec<f32> = self.tabs.iter().map(|t| t.width).collect();
        geometry::compute_positions(&widths)
    }

    /// Target widths for the current order and pinned flags.
    pub fn get_widths(&self) -> Vec<f32> {
        let specs: Vec<TabSpec> = self.tabs.iter().map(|t| TabSpec { pinned: t.pinned }).collect();
        geometry::compute_widths(&specs, self.strip_width, &self.config)
    }

    /// Apply computed target widths to every tab.
    pub fn set_widths(&mut self) {
        let widths = self.get_widths();
        for (tab, width) in self.tabs.iter_mut().zip(widths) {
            tab.set_width(width);
        }
    }

    /// Apply computed left offsets to every tab, animating unless the tab
    /// is still in its construction settling window.
    pub fn set_positions(&mut self) {
        let layout = self.get_positions();
        let animation = self.config.animation;
        for (tab, left) in self.tabs.iter_mut().zip(layout.tab_positions) {
            if !tab.block_left_animation {
                tab.append_transition(TransitionProperty::Left, &animation);
            }
            tab.set_left(left);
        }
    }

    /// Advance the strip clock: drain due deferred tasks and run the idle
    /// auto-new-tab check. Call once per frame with the current time.
    pub fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.now).as_secs_f32();
        self.now = now;

        for kind in self.scheduler.take_due(now) {
            self.run_task(kind);
        }

        self.timer.time += dt;
        if self.timer.can_reset
            && self.tabs.len() > 1
            && self.timer.time >= self.config.auto_new_tab_delay
        {
            self.timer.can_reset = false;
            self.timer.time = 0.0;
            log::info!("Idle timer expired, opening a tab");
            self.add_tab();
        }
    }

    /// Run one due task. Every branch tolerates the target tab having
    /// been removed since the task was scheduled.
    fn run_task(&mut self, kind: TaskKind) {
        match kind {
            TaskKind::SettleNewTab(id) => {
                if let Some(tab) = self.get_tab_mut(id) {
                    tab.block_left_animation = false;
                }
                self.set_widths();
                self.set_positions();
            }
            TaskKind::UnlockTab(id) => {
                if let Some(tab) = self.get_tab_mut(id) {
                    tab.locked = false;
                }
            }
            TaskKind::RemoveClosingTab(id) => {
                self.closing_tabs.retain(|t| t.id != id);
            }
        }
    }

    /// Get the number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Get all tabs as a slice, in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Tabs removed from the order that are still width-collapsing.
    pub fn closing_tabs(&self) -> &[Tab] {
        &self.closing_tabs
    }

    /// Get the selected tab ID.
    pub fn selected_tab_id(&self) -> Option<TabId> {
        self.selected_tab_id
    }

    /// Get a reference to the selected tab.
    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected_tab_id.and_then(|id| self.get_tab(id))
    }

    /// Get a tab by ID.
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a tab by ID.
    pub fn get_tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Position of a tab in the display order.
    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Tab preceding `id` in display order.
    pub fn previous(&self, id: TabId) -> Option<&Tab> {
        let index = self.index_of(id)?;
        index.checked_sub(1).and_then(|i| self.tabs.get(i))
    }

    /// Tab following `id` in display order.
    pub fn next(&self, id: TabId) -> Option<&Tab> {
        let index = self.index_of(id)?;
        self.tabs.get(index + 1)
    }

    /// The transient drag session, if a press is being held.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The strip's notion of current time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// The configuration the strip was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Width available to the strip.
    pub fn strip_width(&self) -> f32 {
        self.strip_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn strip() -> TabStrip {
        TabStrip::new(Config::default(), 800.0)
    }

    /// Strip with `n` tabs, settled past the construction tick.
    fn settled_strip(n: usize) -> TabStrip {
        let mut strip = strip();
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

    fn selected_count(strip: &TabStrip) -> usize {
        strip.tabs().iter().filter(|t| t.selected).count()
    }

    #[test]
    fn add_tab_selects_it() {
        let mut strip = strip();
        let a = strip.add_tab();
        assert_eq!(strip.selected_tab_id(), Some(a));

        let b = strip.add_tab();
        assert_eq!(strip.selected_tab_id(), Some(b));
        assert_eq!(selected_count(&strip), 1);
    }

    #[test]
    fn selection_routed_through_strip_is_single() {
        let mut strip = settled_strip(3);
        let order = ids(&strip);

        strip.select_tab(order[0]);
        assert_eq!(selected_count(&strip), 1);
        assert!(strip.get_tab(order[0]).unwrap().selected);

        strip.select_tab(order[2]);
        assert_eq!(selected_count(&strip), 1);
        assert!(!strip.get_tab(order[0]).unwrap().selected);
        assert!(strip.get_tab(order[2]).unwrap().selected);
    }

    #[test]
    fn select_unknown_tab_is_a_no_op() {
        let mut strip = settled_strip(2);
        let before = strip.selected_tab_id();
        strip.select_tab(999);
        assert_eq!(strip.selected_tab_id(), before);
    }

    #[test]
    fn selected_tab_borders() {
        let mut strip = settled_strip(3);
        let order = ids(&strip);

        strip.select_tab(order[1]);
        let selected = strip.get_tab(order[1]).unwrap();
        assert!(selected.borders.left_full);
        assert!(selected.borders.right_full);
        assert!(!selected.borders.right_small);
        // the predecessor's thin trailing marker is suppressed
        assert!(!strip.get_tab(order[0]).unwrap().borders.right_small);

        // first in order never shows the full leading border
        strip.select_tab(order[0]);
        assert!(!strip.get_tab(order[0]).unwrap().borders.left_full);
        // the old selection's predecessor marker is restored
        assert!(strip.get_tab(order[0]).unwrap().borders.right_small == false);
        assert!(strip.get_tab(order[1]).unwrap().borders.right_small);
    }

    #[test]
    fn close_middle_selected_tab_selects_next() {
        let mut strip = settled_strip(3);
        let order = ids(&strip);
        strip.select_tab(order[0]);

        assert!(strip.close_tab(order[0]));
        assert_eq!(ids(&strip), vec![order[1], order[2]]);
        assert_eq!(strip.selected_tab_id(), Some(order[1]));
        assert_eq!(selected_count(&strip), 1);
        assert_eq!(strip.tab_count(), 2);
    }

    #[test]
    fn close_last_selected_tab_selects_previous() {
        let mut strip = settled_strip(3);
        let order = ids(&strip);
        strip.select_tab(order[2]);

        strip.close_tab(order[2]);
        assert_eq!(strip.selected_tab_id(), Some(order[1]));
    }

    #[test]
    fn close_unselected_tab_keeps_selection() {
        let mut strip = settled_strip(3);
        let order = ids(&strip);
        strip.select_tab(order[2]);

        strip.close_tab(order[0]);
        assert_eq!(strip.selected_tab_id(), Some(order[2]));
        assert_eq!(selected_count(&strip), 1);
    }

    #[test]
    fn close_sole_tab_spawns_replacement_first() {
        let mut strip = settled_strip(1);
        let only = ids(&strip)[0];

        strip.close_tab(only);
        assert_eq!(strip.tab_count(), 1);
        let replacement = ids(&strip)[0];
        assert_ne!(replacement, only);
        assert_eq!(strip.selected_tab_id(), Some(replacement));
        assert_eq!(selected_count(&strip), 1);
    }

    #[test]
    fn close_unknown_tab_returns_false() {
        let mut strip = settled_strip(2);
        assert!(!strip.close_tab(999));
        assert_eq!(strip.tab_count(), 2);
    }

    #[test]
    fn close_resets_idle_timer() {
        let mut strip = settled_strip(3);
        let t0 = strip.now();
        strip.tick(t0 + Duration::from_secs(5));
        assert!(strip.timer.time > 0.0);

        strip.close_tab(ids(&strip)[0]);
        assert_eq!(strip.timer.time, 0.0);
        assert!(strip.timer.can_reset);
    }

    #[test]
    fn idle_timer_opens_one_tab() {
        let mut strip = settled_strip(3);
        strip.close_tab(ids(&strip)[0]);
        assert_eq!(strip.tab_count(), 2);

        let t0 = strip.now();
        strip.tick(t0 + Duration::from_secs(31));
        assert_eq!(strip.tab_count(), 3);
        assert!(!strip.timer.can_reset);

        // disarmed: a second idle period does not open another
        let t1 = strip.now();
        strip.tick(t1 + Duration::from_secs(31));
        assert_eq!(strip.tab_count(), 3);
    }

    #[test]
    fn close_remembers_address_for_reopen() {
        let mut strip = settled_strip(2);
        let order = ids(&strip);

        strip.close_tab(order[0]);
        assert_eq!(strip.last_closed_address(), Some("about:blank"));

        let reopened = strip.reopen_closed_tab().unwrap();
        assert_eq!(strip.selected_tab_id(), Some(reopened));
        assert_eq!(strip.last_closed_address(), None);
    }

    #[test]
    fn closed_tab_memory_is_capped() {
        let mut config = Config::default();
        config.max_closed_tabs = 3;
        let mut strip = TabStrip::new(config, 800.0);
        for _ in 0..6 {
            strip.add_tab();
        }

        let order = ids(&strip);
        for id in &order[..5] {
            strip.close_tab(*id);
        }
        assert_eq!(strip.closed_tabs().count(), 3);
    }

    #[test]
    fn closing_middle_tab_keeps_widths() {
        let mut strip = settled_strip(5);
        let order = ids(&strip);
        let width_before = strip.get_tab(order[4]).unwrap().width;

        strip.close_tab(order[1]);

        // neighbours keep their previously computed width until the next
        // width pass; only positions shift
        assert_eq!(strip.get_tab(order[4]).unwrap().width, width_before);
        let layout = strip.get_positions();
        for (tab, left) in strip.tabs().iter().zip(layout.tab_positions) {
            assert_eq!(tab.left, left);
        }
    }

    #[test]
    fn closing_trailing_tab_recomputes_widths() {
        let mut config = Config::default();
        config.tab_normal_width = 190.0;
        let mut strip = TabStrip::new(config, 428.0);
        for _ in 0..4 {
            strip.add_tab();
        }
        let t0 = strip.now();
        strip.tick(t0 + Duration::from_millis(5));

        let order = ids(&strip);
        let narrow = strip.get_tab(order[0]).unwrap().width;
        assert!(narrow < 190.0);

        strip.close_tab(order[3]);
        let widened = strip.get_tab(order[0]).unwrap().width;
        assert!(widened > narrow);
    }

    #[test]
    fn wide_closing_tab_collapses_before_removal() {
        let mut strip = settled_strip(2);
        let order = ids(&strip);
        assert_eq!(strip.get_tab(order[1]).unwrap().width, 190.0);

        strip.close_tab(order[1]);
        assert_eq!(strip.closing_tabs().len(), 1);
        let collapsing = &strip.closing_tabs()[0];
        assert_eq!(collapsing.width, 0.0);
        assert!(!collapsing.pointer_events);

        // dropped only after the positioning duration has elapsed
        let t0 = strip.now();
        strip.tick(t0 + Duration::from_millis(100));
        assert_eq!(strip.closing_tabs().len(), 1);
        strip.tick(t0 + Duration::from_millis(400));
        assert!(strip.closing_tabs().is_empty());
    }

    #[test]
    fn narrow_trailing_tab_is_dropped_immediately() {
        let mut strip = settled_strip(8);
        let order = ids(&strip);
        assert!(strip.get_tab(order[7]).unwrap().width < 190.0);

        strip.close_tab(order[7]);
        assert!(strip.closing_tabs().is_empty());
    }

    #[test]
    fn settle_task_tolerates_closed_tab() {
        let mut strip = strip();
        let a = strip.add_tab();
        strip.add_tab();
        // close before the settle tick fires
        strip.close_tab(a);

        let t0 = strip.now();
        strip.tick(t0 + Duration::from_millis(5));
        assert_eq!(strip.tab_count(), 1);
    }

    #[test]
    fn new_tab_gets_synchronous_position() {
        let mut strip = settled_strip(2);
        let expected = strip.get_widths().iter().sum::<f32>();
        // both settled tabs are 190 wide, so the new tab lands after them
        let c = strip.add_tab();
        assert_eq!(strip.get_tab(c).unwrap().left, expected);
        assert!(strip.get_tab(c).unwrap().block_left_animation);

        let t0 = strip.now();
        strip.tick(t0 + Duration::from_millis(5));
        assert!(!strip.get_tab(c).unwrap().block_left_animation);
    }

    #[test]
    fn layout_converges_after_settle() {
        let mut strip = settled_strip(4);
        let widths = strip.get_widths();
        let layout = strip.get_positions();
        for (tab, (width, left)) in strip
            .tabs()
            .iter()
            .zip(widths.into_iter().zip(layout.tab_positions))
        {
            assert_eq!(tab.width, width);
            assert_eq!(tab.left, left);
        }
    }

    #[test]
    fn resize_recomputes_extents() {
        let mut strip = settled_strip(4);
        strip.resize(328.0);
        let widths = strip.get_widths();
        assert!(widths[0] < 190.0);
        for (tab, width) in strip.tabs().iter().zip(widths) {
            assert_eq!(tab.width, width);
        }
    }

    #[test]
    fn neighbour_lookup_is_null_safe() {
        let mut strip = settled_strip(2);
        let order = ids(&strip);

        assert!(strip.previous(order[0]).is_none());
        assert_eq!(strip.previous(order[1]).map(|t| t.id), Some(order[0]));
        assert_eq!(strip.next(order[0]).map(|t| t.id), Some(order[1]));
        assert!(strip.next(order[1]).is_none());
        assert!(strip.previous(999).is_none());
    }

    #[test]
    fn set_pinned_recomputes_widths() {
        let mut strip = settled_strip(3);
        let order = ids(&strip);

        strip.set_pinned(order[0], true);
        assert_eq!(
            strip.get_tab(order[0]).unwrap().width,
            strip.config().tab_pinned_width
        );
    }

    #[test]
    fn set_title_updates_the_tab() {
        let mut strip = settled_strip(1);
        let id = ids(&strip)[0];
        assert_eq!(strip.get_tab(id).unwrap().title, "New tab");

        strip.set_title(id, "Release notes");
        assert_eq!(strip.get_tab(id).unwrap().title, "Release notes");
        assert_eq!(strip.selected_tab().map(|t| t.id), Some(id));
    }

    #[test]
    fn actions_drive_the_strip() {
        let mut strip = strip();
        strip.handle(TabStripAction::NewTab);
        strip.handle(TabStripAction::NewTab);
        assert_eq!(strip.tab_count(), 2);

        let order = ids(&strip);
        strip.handle(TabStripAction::Select(order[0]));
        assert_eq!(strip.selected_tab_id(), Some(order[0]));

        strip.handle(TabStripAction::Close(order[0]));
        assert_eq!(strip.tab_count(), 1);

        strip.handle(TabStripAction::Resize { strip_width: 600.0 });
        assert_eq!(strip.strip_width(), 600.0);
    }
}
