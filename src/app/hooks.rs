use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_prefers_reduced_motion,
    use_raf_fn, use_window, use_window_scroll, use_window_size, UseIntersectionObserverOptions,
    UseRafFnCallbackArgs,
};

use crate::{
    motion::{MotionGate, MotionPreference},
    pointer::{PointerPosition, PointerTracker, SpringConfig, SpringFollower},
    scroll::{ScrollMetrics, ScrubRange},
    visibility::{RootMargin, VisibilityLatch, REVEAL_MARGIN},
};

#[derive(Clone, Copy)]
struct MotionContext(Signal<MotionGate>);

/// Tracks the system reduced-motion setting for the whole app.
pub fn provide_motion_gate() {
    let reduced = use_prefers_reduced_motion();
    let gate = Signal::derive(move || MotionPreference::new(reduced.get()).gate());
    Effect::new(move |_| log::debug!("reduced motion: {}", reduced.get()));
    provide_context(MotionContext(gate));
}

pub fn use_motion_gate() -> Signal<MotionGate> {
    use_context::<MotionContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::stored(MotionGate::default()))
}

/// Flips to true once after first render, driving mount-time entrances.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

/// One-shot visibility latch for a section.
///
/// The observer keeps its -100px margin so content only counts as visible
/// once it is well inside the viewport. Later exits never reset the latch.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let latch = RwSignal::new(VisibilityLatch::default());
    let margin = REVEAL_MARGIN.parse::<RootMargin>().unwrap_or_default();

    let observer = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            if latch.with_untracked(VisibilityLatch::has_entered_viewport) {
                return;
            }
            if entries.iter().any(|entry| entry.is_intersecting()) {
                latch.update(|l| {
                    l.observe(true);
                });
            }
        },
        UseIntersectionObserverOptions::default().root_margin(margin.to_css()),
    );

    let stop = observer.stop;
    Effect::new(move |_| {
        if latch.with(VisibilityLatch::has_entered_viewport) {
            stop();
        }
    });

    Signal::derive(move || latch.with(VisibilityLatch::has_entered_viewport))
}

/// Window scroll state shared by every scroll consumer on the page.
#[derive(Clone, Copy)]
pub struct PageScroll {
    pub offset: Signal<f64>,
    pub metrics: Signal<ScrollMetrics>,
}

/// Installs the single scroll listener for the page.
pub fn provide_page_scroll() -> PageScroll {
    let (_, y) = use_window_scroll();
    let size = use_window_size();
    let metrics = Signal::derive(move || {
        ScrollMetrics::new(y.get(), document_height(), size.height.get())
    });
    let scroll = PageScroll { offset: y, metrics };
    provide_context(scroll);
    scroll
}

pub fn use_page_scroll() -> PageScroll {
    expect_context::<PageScroll>()
}

#[cfg(feature = "hydrate")]
fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default()
}

#[cfg(not(feature = "hydrate"))]
fn document_height() -> f64 {
    0.0
}

/// Scroll-linked progress of `target` through `range`, pinned to the end
/// state when motion is reduced.
pub fn use_scrub(target: NodeRef<html::Div>, range: ScrubRange) -> Signal<f64> {
    let scroll = use_page_scroll();
    let gate = use_motion_gate();
    Signal::derive(move || {
        let viewport = scroll.metrics.get().viewport_height;
        let progress = target
            .get()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                range.progress(rect.top(), rect.height(), viewport)
            })
            .unwrap_or_default();
        gate.get().scrub(progress)
    })
}

/// Latest pointer position from a window-level pointermove listener.
pub fn use_pointer_position() -> Signal<Option<PointerPosition>> {
    let tracker = RwSignal::new(PointerTracker::default());
    let _ = use_event_listener(use_window(), ev::pointermove, move |ev| {
        tracker.update(|t| {
            t.record(f64::from(ev.client_x()), f64::from(ev.client_y()));
        });
    });
    Signal::derive(move || tracker.with(PointerTracker::position))
}

/// Spring-smoothed copy of `target`, stepped once per animation frame.
///
/// The follower snaps to the first position it sees instead of flying in
/// from the corner.
pub fn use_spring(
    target: Signal<Option<PointerPosition>>,
    config: SpringConfig,
) -> Signal<Option<PointerPosition>> {
    let follower = StoredValue::new(None::<SpringFollower>);
    let (position, set_position) = signal(None::<PointerPosition>);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(pointer) = target.get_untracked() else {
            return;
        };
        let dt = args.delta / 1000.0;
        let moved = follower.try_update_value(|f| {
            let f = f.get_or_insert_with(|| {
                let mut f = SpringFollower::new(config);
                f.jump(pointer);
                f
            });
            f.set_target(pointer);
            let before = f.position();
            f.step(dt);
            (before != f.position()).then(|| f.position())
        });
        match moved {
            Some(Some(next)) => set_position.set(Some(next)),
            _ if position.get_untracked().is_none() => set_position.set(Some(pointer)),
            _ => {}
        }
    });

    position.into()
}
