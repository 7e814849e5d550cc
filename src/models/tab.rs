// ABOUTME: Tab data model grouping an ordered set of windows with one active window

use crate::models::Window;

/// An ordered group of windows with at most one designated active window.
///
/// The designation always names a member window while any windows remain:
/// adding the first window makes it active, and removing the active window
/// promotes the first remaining one (or clears the designation when none
/// are left).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tab {
    pub id: u64,
    pub windows: Vec<Window>,
    pub active_window: Option<u64>,
}

impl Tab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_window(&mut self, window: Window) {
        if self.active_window.is_none() {
            self.active_window = Some(window.id);
        }
        self.windows.push(window);
    }

    /// Remove the window with the given id, if present. Removing the active
    /// window promotes the first remaining window, or clears the designation
    /// when it was the last one.
    pub fn remove_window(&mut self, window_id: u64) {
        if let Some(pos) = self.windows.iter().position(|w| w.id == window_id) {
            self.windows.remove(pos);
            if self.active_window == Some(window_id) {
                self.active_window = self.windows.first().map(|w| w.id);
            }
        }
    }

    /// Designate a member window as active; ignored when no member window
    /// has the given id.
    pub fn set_active_window(&mut self, window_id: u64) {
        if self.windows.iter().any(|w| w.id == window_id) {
            self.active_window = Some(window_id);
        }
    }

    /// Resolve the active-window designation to the member window.
    pub fn active(&self) -> Option<&Window> {
        self.active_window
            .and_then(|id| self.windows.iter().find(|w| w.id == id))
    }
}
