/// Offset past which the navigation bar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// Snapshot of the page's vertical scroll state, in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    pub fn max_offset(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Share of the page scrolled so far, always within `[0, 100]`.
    ///
    /// Pages shorter than (or as tall as) the viewport report 0.
    pub fn percent(&self) -> f64 {
        let max = self.max_offset();
        if max.is_nan() || max <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Scroll-scrubbed progress of one element between two viewport lines.
///
/// `start` is the viewport fraction the element's top must reach for the
/// progress to leave 0, `end` the fraction its bottom must reach for it to
/// hit 1. `ScrubRange::new(0.6, 0.4)` reads as "top hits 60% of the viewport"
/// to "bottom hits 40% of the viewport".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubRange {
    pub start: f64,
    pub end: f64,
}

impl ScrubRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn progress(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let start_line = self.start * viewport_height;
        let end_line = self.end * viewport_height;
        // total distance the top travels between the two trigger points
        let span = start_line - (end_line - element_height);
        if span.is_nan() || span <= 0.0 {
            return if element_top <= start_line { 1.0 } else { 0.0 };
        }
        ((start_line - element_top) / span).clamp(0.0, 1.0)
    }
}

/// Splits a shared `[0, 1]` progress across `count` staggered items.
///
/// Each item animates over a window of width `1 / (1 + spread * (count - 1))`
/// and consecutive windows start `spread` item-durations apart.
pub fn stagger(progress: f64, index: usize, count: usize, spread: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let total = 1.0 + spread * (count.saturating_sub(1)) as f64;
    let local = progress.clamp(0.0, 1.0) * total - spread * index as f64;
    local.clamp(0.0, 1.0)
}
