use std::{fmt, str::FromStr};

use thiserror::Error;

/// Margin applied to sections before their entrance animation fires.
pub const REVEAL_MARGIN: &str = "-100px";

/// One-way latch recording whether an element has ever entered the viewport.
///
/// Once `has_entered_viewport` is true it stays true for the lifetime of the
/// latch, no matter how often the element leaves and re-enters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityLatch {
    has_entered_viewport: bool,
}

impl VisibilityLatch {
    pub fn has_entered_viewport(&self) -> bool {
        self.has_entered_viewport
    }

    /// Feeds one intersection observation. Returns true only for the
    /// observation that flipped the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.has_entered_viewport || !intersecting {
            return false;
        }
        self.has_entered_viewport = true;
        true
    }

    pub fn observe_rect(&mut self, element: Rect, viewport: Rect, margin: RootMargin) -> bool {
        self.observe(margin.intersects(element, viewport))
    }
}

/// Axis-aligned box in viewport pixel coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarginError {
    #[error("margin needs between one and four values, got {0}")]
    Arity(usize),
    #[error("invalid margin value: {0}")]
    Value(String),
}

/// Viewport inset in pixels, written like a CSS margin shorthand.
///
/// Negative values shrink the viewport: `-100px` only reports an element once
/// it is 100px inside the visible area.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Grows the viewport by the margin and tests the element against it.
    /// Touching edges do not count as intersecting.
    pub fn intersects(&self, element: Rect, viewport: Rect) -> bool {
        let top = viewport.top - self.top;
        let bottom = viewport.bottom() + self.bottom;
        let left = viewport.left - self.left;
        let right = viewport.right() + self.right;
        if bottom <= top || right <= left {
            return false;
        }
        element.top < bottom
            && element.bottom() > top
            && element.left < right
            && element.right() > left
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

fn parse_px(value: &str) -> Result<f64, MarginError> {
    let number = value.strip_suffix("px").unwrap_or(value);
    number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| MarginError::Value(value.to_string()))
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Result<Vec<_>, _>>()?;
        match values[..] {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(MarginError::Arity(values.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_latch_flips_once() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.has_entered_viewport());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.has_entered_viewport());

        // leaving and re-entering never re-fires nor resets
        assert!(!latch.observe(false));
        assert!(latch.has_entered_viewport());
        assert!(!latch.observe(true));
        assert!(latch.has_entered_viewport());
    }

    #[test]
    fn test_latch_without_element_never_flips() {
        let mut latch = VisibilityLatch::default();
        for _ in 0..10 {
            latch.observe(false);
        }
        assert!(!latch.has_entered_viewport());
    }

    #[test]
    fn test_independent_latches() {
        let mut about = VisibilityLatch::default();
        let skills = VisibilityLatch::default();
        about.observe(true);
        assert!(about.has_entered_viewport());
        assert!(!skills.has_entered_viewport());
    }

    #[test]
    fn test_negative_margin_delays_trigger() {
        let margin: RootMargin = REVEAL_MARGIN.parse().unwrap();
        let mut latch = VisibilityLatch::default();

        // 50px of the section is visible: not far enough in
        let peeking = Rect::new(750.0, 0.0, 1280.0, 600.0);
        assert!(!latch.observe_rect(peeking, viewport(), margin));
        assert!(!latch.has_entered_viewport());

        // 150px visible
        let entered = Rect::new(650.0, 0.0, 1280.0, 600.0);
        assert!(latch.observe_rect(entered, viewport(), margin));

        // scrolled back out
        let gone = Rect::new(2000.0, 0.0, 1280.0, 600.0);
        assert!(!latch.observe_rect(gone, viewport(), margin));
        assert!(latch.has_entered_viewport());
    }

    #[test]
    fn test_positive_margin_fires_early() {
        let margin = RootMargin::uniform(100.0);
        let below = Rect::new(850.0, 0.0, 1280.0, 400.0);
        assert!(margin.intersects(below, viewport()));
        assert!(!RootMargin::default().intersects(below, viewport()));
    }

    #[test]
    fn test_touching_edge_is_not_intersecting() {
        let below = Rect::new(800.0, 0.0, 1280.0, 400.0);
        assert!(!RootMargin::default().intersects(below, viewport()));
    }

    #[test]
    fn test_margin_parsing() {
        assert_eq!(
            "10px 20px".parse::<RootMargin>().unwrap(),
            RootMargin {
                top: 10.0,
                right: 20.0,
                bottom: 10.0,
                left: 20.0
            }
        );
        assert_eq!(
            "1px 2px 3px 4px".parse::<RootMargin>().unwrap().to_css(),
            "1px 2px 3px 4px"
        );
        assert_eq!("0".parse::<RootMargin>().unwrap(), RootMargin::default());
        assert!(matches!(
            "".parse::<RootMargin>(),
            Err(MarginError::Arity(0))
        ));
        assert!(matches!(
            "1px 2px 3px 4px 5px".parse::<RootMargin>(),
            Err(MarginError::Arity(5))
        ));
        assert!(matches!(
            "10em".parse::<RootMargin>(),
            Err(MarginError::Value(_))
        ));
    }
}
