use leptos::prelude::*;

use crate::pointer::{PointerPosition, CURSOR_DOT, CURSOR_RING};

use super::hooks::{use_page_scroll, use_pointer_position, use_spring};

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let scroll = use_page_scroll();
    let percent = move || scroll.metrics.get().percent();
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 z-50 bg-gradient-primary origin-left"
            style=move || format!("transform: scaleX({});", percent() / 100.0)
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", percent())
        />
    }
}

fn cursor_style(position: Option<PointerPosition>, size: f64) -> String {
    match position {
        Some(p) => format!(
            "transform: translate({}px, {}px);",
            p.x - size / 2.0,
            p.y - size / 2.0
        ),
        None => "opacity: 0;".to_string(),
    }
}

/// Dot and trailing ring following the pointer. Only mounted when motion
/// is allowed, so dropping it releases the listener and the frame loop.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let pointer = use_pointer_position();
    let dot = use_spring(pointer, CURSOR_DOT);
    let ring = use_spring(pointer, CURSOR_RING);

    view! {
        <div
            class="hidden lg:block fixed top-0 left-0 w-2 h-2 rounded-full bg-primary pointer-events-none z-[60] mix-blend-difference"
            style=move || cursor_style(dot.get(), 8.0)
            aria-hidden="true"
        />
        <div
            class="hidden lg:block fixed top-0 left-0 w-10 h-10 rounded-full border-2 border-primary/50 pointer-events-none z-[60]"
            style=move || cursor_style(ring.get(), 40.0)
            aria-hidden="true"
        />
    }
}
