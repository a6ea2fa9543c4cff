//! Content surface seam between the tab strip and the page layer.
//!
//! Each tab owns exactly one content surface for its whole lifetime,
//! created with the tab and disposed when the tab closes. The strip only
//! needs to show or hide the surface on selection changes, destroy its
//! backing element on close, and read the current address (remembered for
//! the reopen-closed-tab feature). How the surface renders or loads
//! content is not the strip's concern.

/// Per-tab page surface as seen by the tab strip.
pub trait ContentSurface {
    /// Make the surface visible. Called when the owning tab is selected.
    fn show(&mut self);

    /// Hide the surface. Called when the owning tab is deselected.
    fn hide(&mut self);

    /// Currently loaded address.
    fn address(&self) -> &str;

    /// Destroy the backing element. Must be idempotent; the surface is
    /// never shown again after this.
    fn dispose(&mut self);
}

/// Default in-process surface backing a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    address: String,
    visible: bool,
    disposed: bool,
}

impl Page {
    /// Create a hidden page at `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            visible: false,
            disposed: false,
        }
    }

    /// Whether the page is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the backing element has been destroyed.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl ContentSurface for Page {
    fn show(&mut self) {
        if !self.disposed {
            self.visible = true;
        }
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn dispose(&mut self) {
        self.visible = false;
        self.disposed = true;
    }
}
