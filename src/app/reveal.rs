use leptos::prelude::*;

use crate::motion::{Easing, Pose, Tween};

use super::hooks::{use_motion_gate, use_mounted};

/// Plays `tween` once `active` turns true. Under reduced motion the end
/// pose is rendered immediately.
#[component]
pub fn Reveal(
    #[prop(into)] active: Signal<bool>,
    tween: Tween,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let gate = use_motion_gate();
    let style = move || gate.get().plan(tween).style(active.get());
    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

const CURTAIN: Tween = Tween::new(Pose::REST, Pose::REST.with_scale_y(0.0), 600.0)
    .easing(Easing::CircOut);
const PAGE_ENTER: Tween = Tween::rise(0.0, 20.0, 500.0)
    .delay(200.0)
    .easing(Easing::SMOOTH);

/// Two curtains sweep off the page while the content fades up.
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let gate = use_motion_gate();
    let mounted = use_mounted();
    let curtain = move |delay: f64| gate.get().plan(CURTAIN.delay(delay)).style(mounted.get());
    view! {
        <div
            class="fixed inset-0 z-[100] bg-gradient-primary origin-top pointer-events-none"
            style=move || curtain(0.0)
            aria-hidden="true"
        />
        <div
            class="fixed inset-0 z-[99] bg-background origin-top pointer-events-none"
            style=move || curtain(100.0)
            aria-hidden="true"
        />
        <Reveal active=mounted tween=PAGE_ENTER>
            {children()}
        </Reveal>
    }
}
