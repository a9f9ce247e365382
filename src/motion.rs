//! Entrance animations and the reduced-motion gate.
//!
//! Every animated element describes its entrance as a [`Tween`] between two
//! [`Pose`]s. Nothing renders a tween directly: it goes through a
//! [`MotionGate`], which turns it into a [`Playback`]. With reduced motion
//! the playback is always [`Playback::Instant`] and lands on the final pose
//! without any transition or scheduled frames.

use std::fmt::Write;

/// The user's platform-level "prefers reduced motion" setting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn gate(self) -> MotionGate {
        MotionGate { preference: self }
    }
}

/// Visual state of an animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub const fn offset(x: f64, y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            y,
            ..Pose::REST
        }
    }

    pub const fn scaled(scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            scale,
            ..Pose::REST
        }
    }

    pub const fn with_opacity(self, opacity: f64) -> Pose {
        Pose { opacity, ..self }
    }

    pub const fn with_scale_x(self, scale_x: f64) -> Pose {
        Pose { scale_x, ..self }
    }

    pub const fn with_scale_y(self, scale_y: f64) -> Pose {
        Pose { scale_y, ..self }
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            scale_y: mix(self.scale_y, to.scale_y),
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        let mut transforms = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            transforms.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            transforms.push(format!("scale({})", self.scale));
        }
        if self.scale_x != 1.0 {
            transforms.push(format!("scaleX({})", self.scale_x));
        }
        if self.scale_y != 1.0 {
            transforms.push(format!("scaleY({})", self.scale_y));
        }
        if transforms.is_empty() {
            css.push_str(" transform: none;");
        } else {
            let _ = write!(css, " transform: {};", transforms.join(" "));
        }
        css
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseIn,
    Power4Out,
    CircOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Page-level curve used by the navigation bar and overlays.
    pub const SMOOTH: Easing = Easing::CubicBezier(0.33, 1.0, 0.68, 1.0);

    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::Power4Out => "cubic-bezier(0.165, 0.84, 0.44, 1)".to_string(),
            Easing::CircOut => "cubic-bezier(0, 0.55, 0.45, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseIn => t * t,
            Easing::Power4Out => 1.0 - (1.0 - t).powi(5),
            Easing::CircOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_axis(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

// solves x(s) = t by bisection, then evaluates y(s)
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut s = t;
    for _ in 0..32 {
        let x = bezier_axis(x1, x2, s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

/// Timed transition between two poses. Times are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(from: Pose, to: Pose, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Fade in while sliding from `(x, y)` to the resting position.
    pub const fn rise(x: f64, y: f64, duration_ms: f64) -> Self {
        Self::new(Pose::offset(x, y), Pose::REST, duration_ms)
    }

    pub const fn delay(self, delay_ms: f64) -> Self {
        Tween { delay_ms, ..self }
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Tween { easing, ..self }
    }

    pub const fn to(self, to: Pose) -> Self {
        Tween { to, ..self }
    }

    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Pose `elapsed_ms` after the tween was triggered.
    pub fn sample(&self, elapsed_ms: f64) -> Pose {
        if self.duration_ms <= 0.0 {
            return if elapsed_ms >= self.delay_ms {
                self.to
            } else {
                self.from
            };
        }
        let t = (elapsed_ms - self.delay_ms) / self.duration_ms;
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    pub fn transition_css(&self) -> String {
        format!(
            "transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = self.duration_ms,
            e = self.easing.css(),
            delay = self.delay_ms,
        )
    }
}

/// How an entrance actually plays once the motion preference is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Playback {
    Tweened(Tween),
    Instant(Pose),
}

impl Playback {
    /// Animation frames the playback needs at `fps`, excluding the final one.
    pub fn scheduled_frames(&self, fps: f64) -> usize {
        match self {
            Playback::Instant(_) => 0,
            Playback::Tweened(tween) => {
                let frames = (tween.total_ms() / 1000.0 * fps).ceil();
                if frames.is_finite() && frames > 1.0 {
                    frames as usize - 1
                } else {
                    0
                }
            }
        }
    }

    /// Intermediate poses between trigger and final pose at `fps`.
    pub fn frames(&self, fps: f64) -> Vec<Pose> {
        match self {
            Playback::Instant(_) => Vec::new(),
            Playback::Tweened(tween) => (1..=self.scheduled_frames(fps))
                .map(|i| tween.sample(i as f64 * 1000.0 / fps))
                .collect(),
        }
    }

    pub fn final_pose(&self) -> Pose {
        match self {
            Playback::Tweened(tween) => tween.to,
            Playback::Instant(pose) => *pose,
        }
    }

    /// Inline style for an element whose trigger is `active`.
    pub fn style(&self, active: bool) -> String {
        match self {
            Playback::Instant(pose) => format!("{} transition: none;", pose.to_css()),
            Playback::Tweened(tween) => {
                let pose = if active { tween.to } else { tween.from };
                format!("{} {}", pose.to_css(), tween.transition_css())
            }
        }
    }
}

/// Single decision point turning tweens into playbacks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionGate {
    preference: MotionPreference,
}

impl MotionGate {
    pub fn is_reduced(&self) -> bool {
        self.preference.reduced
    }

    pub fn plan(&self, tween: Tween) -> Playback {
        if self.preference.reduced {
            Playback::Instant(tween.to)
        } else {
            Playback::Tweened(tween)
        }
    }

    /// Value driven by scroll scrubbing; reduced motion pins it to the end.
    pub fn scrub(&self, progress: f64) -> f64 {
        if self.preference.reduced {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Tween {
        Tween::rise(0.0, 40.0, 600.0).delay(200.0)
    }

    #[test]
    fn test_reduced_motion_schedules_no_frames() {
        let gate = MotionPreference::new(true).gate();
        let playback = gate.plan(card());
        assert_eq!(playback, Playback::Instant(Pose::REST));
        assert_eq!(playback.scheduled_frames(60.0), 0);
        assert!(playback.frames(60.0).is_empty());

        // final state is rendered whether or not the trigger fired
        assert_eq!(playback.style(false), playback.style(true));
        assert!(playback.style(false).contains("opacity: 1;"));
        assert!(playback.style(false).contains("transition: none;"));
    }

    #[test]
    fn test_full_motion_tweens() {
        let gate = MotionPreference::default().gate();
        let playback = gate.plan(card());
        assert!(matches!(playback, Playback::Tweened(_)));
        // 800ms at 60fps
        assert_eq!(playback.scheduled_frames(60.0), 47);
        assert_eq!(playback.final_pose(), Pose::REST);

        let hidden = playback.style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 40px)"));
        assert!(hidden.contains("600ms ease-out 200ms"));
        let shown = playback.style(true);
        assert!(shown.contains("opacity: 1; transform: none;"));
    }

    #[test]
    fn test_sample_respects_delay() {
        let tween = card();
        assert_eq!(tween.sample(0.0), tween.from);
        assert_eq!(tween.sample(200.0), tween.from);
        assert_eq!(tween.sample(800.0), tween.to);
        assert_eq!(tween.sample(5000.0), tween.to);
        let mid = tween.sample(500.0);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 40.0);
    }

    #[test]
    fn test_zero_duration_tween() {
        let tween = Tween::new(Pose::HIDDEN, Pose::REST, 0.0).delay(100.0);
        assert_eq!(tween.sample(50.0), Pose::HIDDEN);
        assert_eq!(tween.sample(100.0), Pose::REST);
        assert_eq!(Playback::Tweened(tween).scheduled_frames(60.0), 5);
    }

    #[test]
    fn test_frames_are_intermediate() {
        let playback = MotionGate::default().plan(Tween::new(Pose::HIDDEN, Pose::REST, 100.0));
        let frames = playback.frames(60.0);
        assert_eq!(frames.len(), 5);
        assert!(frames.iter().all(|p| p.opacity < 1.0));
        assert!(frames.windows(2).all(|w| w[0].opacity <= w[1].opacity));
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::Power4Out,
            Easing::CircOut,
            Easing::SMOOTH,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
            assert!(easing.apply(0.5) >= 0.5, "{easing:?} should not lag linear");
        }
        assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
        assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
        assert!(Easing::EaseIn.apply(0.5) <= 0.5);
    }

    #[test]
    fn test_offset_pose_starts_hidden() {
        let from = Pose::offset(0.0, 20.0);
        assert_eq!(from.opacity, 0.0);
        assert_eq!(from.with_opacity(0.0), from);
        assert_eq!(Tween::rise(0.0, 20.0, 500.0).from, from);
        // a slide without a fade has to opt back in to full opacity
        assert_eq!(from.with_opacity(1.0).opacity, 1.0);
    }

    #[test]
    fn test_pose_css() {
        assert_eq!(Pose::REST.to_css(), "opacity: 1; transform: none;");
        assert_eq!(
            Pose::scaled(0.0).to_css(),
            "opacity: 0; transform: scale(0);"
        );
        assert_eq!(
            Pose::REST.with_scale_x(0.42).to_css(),
            "opacity: 1; transform: scaleX(0.42);"
        );
    }

    #[test]
    fn test_scrub_gate() {
        assert_eq!(MotionGate::default().scrub(0.3), 0.3);
        assert_eq!(MotionGate::default().scrub(1.7), 1.0);
        assert_eq!(MotionPreference::new(true).gate().scrub(0.3), 1.0);
    }
}
