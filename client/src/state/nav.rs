//! Navigation bar scroll and mobile-menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset (px) past which the bar collapses into its floating form.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_scrolled: bool,
    pub mobile_open: bool,
}

impl NavState {
    /// Recompute `is_scrolled` from the window's vertical offset.
    ///
    /// Page scroll is suspended while the mobile menu is open, so offsets
    /// reported in that window are ignored.
    pub fn on_scroll(&mut self, offset: f64) {
        if self.mobile_open {
            return;
        }
        self.is_scrolled = offset > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }
}
