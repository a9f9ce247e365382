/// Latest pointer coordinates in viewport (client) pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Records raw pointer-move coordinates. No smoothing happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracker {
    enabled: bool,
    position: Option<PointerPosition>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PointerTracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            position: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning the tracker off drops the last known position.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.position = None;
        }
    }

    /// Returns false when the tracker is disabled and the event was ignored.
    pub fn record(&mut self, x: f64, y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.position = Some(PointerPosition::new(x, y));
        true
    }

    pub fn position(&self) -> Option<PointerPosition> {
        self.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Damping ratio; 1.0 is critically damped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Cursor dot follows the pointer tightly.
pub const CURSOR_DOT: SpringConfig = SpringConfig::new(400.0, 25.0);
/// Outer ring trails behind the dot.
pub const CURSOR_RING: SpringConfig = SpringConfig::new(200.0, 30.0);

const MAX_STEP_SECS: f64 = 1.0 / 240.0;
// frames longer than this (tab in background) are not simulated in full
const MAX_FRAME_SECS: f64 = 0.1;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

/// One-dimensional damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Places the spring on `position` at rest.
    pub fn jump(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `dt` seconds. Returns true once settled.
    pub fn step(&mut self, dt: f64) -> bool {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if (self.position - self.target).abs() < REST_DISTANCE
            && self.velocity.abs() < REST_VELOCITY
        {
            self.jump(self.target);
        }
        self.is_settled()
    }
}

/// Pair of springs easing a follower towards the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringFollower {
    x: Spring,
    y: Spring,
}

impl SpringFollower {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
        }
    }

    pub fn position(&self) -> PointerPosition {
        PointerPosition::new(self.x.position(), self.y.position())
    }

    pub fn set_target(&mut self, target: PointerPosition) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump(&mut self, position: PointerPosition) {
        self.x.jump(position.x);
        self.y.jump(position.y);
    }

    pub fn step(&mut self, dt: f64) -> bool {
        let x = self.x.step(dt);
        let y = self.y.step(dt);
        x && y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_records_latest_position() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.position(), None);
        assert!(tracker.record(10.0, 20.0));
        assert!(tracker.record(15.5, 22.0));
        assert_eq!(tracker.position(), Some(PointerPosition::new(15.5, 22.0)));
    }

    #[test]
    fn test_disabled_tracker_ignores_input() {
        let mut tracker = PointerTracker::new(false);
        assert!(!tracker.record(10.0, 20.0));
        assert_eq!(tracker.position(), None);

        let mut tracker = PointerTracker::default();
        tracker.record(1.0, 2.0);
        tracker.set_enabled(false);
        assert_eq!(tracker.position(), None);
        assert!(!tracker.record(3.0, 4.0));
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(CURSOR_DOT, 0.0);
        spring.set_target(300.0);
        let mut settled = false;
        for _ in 0..600 {
            if spring.step(1.0 / 60.0) {
                settled = true;
                break;
            }
        }
        assert!(settled);
        assert_eq!(spring.position(), 300.0);
    }

    #[test]
    fn test_spring_lags_behind_target() {
        let mut spring = Spring::new(CURSOR_RING, 0.0);
        spring.set_target(100.0);
        spring.step(1.0 / 60.0);
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 100.0);
    }

    #[test]
    fn test_spring_ignores_huge_frames() {
        let mut spring = Spring::new(CURSOR_DOT, 0.0);
        spring.set_target(100.0);
        spring.step(30.0);
        assert!(spring.position().is_finite());
        // negative deltas are treated as no time passing
        let before = spring;
        spring.step(-1.0);
        assert_eq!(spring, before);
    }

    #[test]
    fn test_cursor_configs() {
        assert!(CURSOR_DOT.damping_ratio() < 1.0);
        assert!(CURSOR_RING.damping_ratio() > CURSOR_DOT.damping_ratio());
    }

    #[test]
    fn test_follower_tracks_both_axes() {
        let mut follower = SpringFollower::new(CURSOR_DOT);
        follower.set_target(PointerPosition::new(40.0, -25.0));
        for _ in 0..600 {
            if follower.step(1.0 / 60.0) {
                break;
            }
        }
        assert_eq!(follower.position(), PointerPosition::new(40.0, -25.0));

        follower.jump(PointerPosition::new(5.0, 5.0));
        assert!(follower.step(1.0 / 60.0));
        assert_eq!(follower.position(), PointerPosition::new(5.0, 5.0));
    }
}
