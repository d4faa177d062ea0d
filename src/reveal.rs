/// Class marking an element for the reveal-on-scroll animation.
pub const REVEAL_CLASS: &str = "scroll-reveal";

/// Intersection observer settings for reveal targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that has to be visible.
    pub threshold: f64,
    /// How far the bottom of the viewport is pulled in before an element counts as visible.
    pub bottom_margin_px: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
        }
    }
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// One-shot reveal flag for a single element. Never goes back to hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: bool,
}

impl RevealTracker {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection report. Returns `true` only on the report that
    /// first reveals the element.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}
