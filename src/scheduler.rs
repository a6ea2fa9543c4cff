//! Deferred state transitions for the tab strip.
//!
//! The strip's "later" work — settling a freshly created tab, unlocking a
//! repositioned tab, dropping a width-collapsed tab — is modelled as
//! explicit scheduled tasks instead of ambient timers. Tasks are
//! fire-and-forget and non-cancelable; they run when the strip is ticked
//! past their due time. A task whose target tab has been removed in the
//! meantime must be treated as a silent no-op by the runner, not an error.

use crate::tab::TabId;
use std::time::Instant;

/// Work the strip performs after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Clear `block_left_animation` on a new tab, then normalize widths
    /// and positions for the whole strip.
    SettleNewTab(TabId),
    /// Clear `locked` once a position animation has run its course.
    UnlockTab(TabId),
    /// Drop a closing tab once its width collapse has finished.
    RemoveClosingTab(TabId),
}

/// One scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due: Instant,
    pub kind: TaskKind,
}

/// Fire-and-forget task queue drained by `TabStrip::tick`.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<ScheduledTask>,
}

impl TaskQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `kind` to run at `due`.
    pub fn schedule(&mut self, due: Instant, kind: TaskKind) {
        self.tasks.push(ScheduledTask { due, kind });
    }

    /// Remove and return every task due at or before `now`, in schedule
    /// order.
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut due = Vec::new();
        self.tasks.retain(|task| {
            if task.due <= now {
                due.push(task.kind);
                false
            } else {
                true
            }
        });
        due
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
