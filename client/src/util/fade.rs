//! Reveal-on-scroll helpers for the `FadeIn` wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component observes viewport intersection in the browser; this module
//! holds the pure parts (slide offsets, the one-way latch, inline style) so
//! SSR renders the hidden initial frame deterministically.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

/// Distance (px) content slides in from.
pub const SLIDE_DISTANCE_PX: f64 = 40.0;
/// Root margin shrinking the viewport so content reveals a little late.
pub const ROOT_MARGIN: &str = "-10% 0px -10% 0px";

const DURATION_S: f64 = 0.7;
const EASING: &str = "cubic-bezier(0.21, 0.47, 0.32, 0.98)";

/// Side the content enters from, named by direction of travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Starting `(x, y)` translation before reveal.
    #[must_use]
    pub fn offset(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, SLIDE_DISTANCE_PX),
            Self::Down => (0.0, -SLIDE_DISTANCE_PX),
            Self::Left => (SLIDE_DISTANCE_PX, 0.0),
            Self::Right => (-SLIDE_DISTANCE_PX, 0.0),
        }
    }
}

/// Becomes visible on the first intersection and stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    pub visible: bool,
}

impl InViewLatch {
    /// Feed an intersection report. Returns `true` on the reveal edge, after
    /// which the caller may stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Inline style for the wrapper at the given reveal state.
#[must_use]
pub fn fade_style(visible: bool, direction: Direction, delay_s: f64) -> String {
    let (opacity, (x, y)) = if visible { (1, (0.0, 0.0)) } else { (0, direction.offset()) };
    format!(
        "opacity:{opacity};transform:translate({x}px,{y}px);transition:opacity {DURATION_S}s {EASING} {delay_s}s,transform {DURATION_S}s {EASING} {delay_s}s"
    )
}
