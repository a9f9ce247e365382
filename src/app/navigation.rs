use leptos::prelude::*;

use crate::{
    content::portfolio,
    motion::{Easing, Pose, Tween},
    scroll::is_scrolled,
};

use super::{
    hooks::{use_motion_gate, use_mounted, use_page_scroll},
    reveal::Reveal,
    theme::ThemeToggle,
};

const SLIDE_DOWN: Tween = Tween::new(Pose::offset(0.0, -100.0).with_opacity(1.0), Pose::REST, 600.0)
    .easing(Easing::SMOOTH);

#[component]
pub fn Navigation() -> impl IntoView {
    let site = &portfolio().site;
    let links = &portfolio().sections;
    let scroll = use_page_scroll();
    let gate = use_motion_gate();
    let mounted = use_mounted();
    let (menu_open, set_menu_open) = signal(false);

    // the header's inline style owns `transition` for the slide-down, so the
    // compact-on-scroll transition lives on the bar inside it
    let bar_class = move || {
        if is_scrolled(scroll.offset.get()) {
            "glass-strong py-4 transition-[padding,background-color] duration-300"
        } else {
            "bg-transparent py-6 transition-[padding,background-color] duration-300"
        }
    };

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-40"
            style=move || gate.get().plan(SLIDE_DOWN).style(mounted.get())
        >
            <div class=bar_class>
                <nav class="container mx-auto px-6 flex items-center justify-between">
                    <a href="#" class="text-2xl font-bold text-gradient" aria-label="Back to top">
                        {site.initials.as_str()}
                    </a>
                    <div class="hidden md:flex items-center gap-8">
                        {links
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                let tween = Tween::rise(0.0, -20.0, 400.0).delay(100.0 * i as f64);
                                view! {
                                    <Reveal active=mounted tween=tween>
                                        <a
                                            href=link.href()
                                            class="relative text-sm font-medium text-muted-foreground hover:text-foreground transition-colors group"
                                        >
                                            {link.label.as_str()}
                                            <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-primary group-hover:w-full transition-all duration-300" />
                                        </a>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                        <a
                            href="#contact"
                            class="px-4 py-2 rounded-full bg-gradient-primary text-white text-sm font-medium hover:scale-105 transition-transform"
                        >
                            "Let's Talk"
                        </a>
                    </div>
                    <div class="flex md:hidden items-center gap-4">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="w-10 h-10 flex items-center justify-center text-2xl"
                            aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </nav>
                <Show when=move || menu_open.get()>
                    <MobileMenu on_navigate=Callback::new(move |_| set_menu_open.set(false)) />
                </Show>
            </div>
        </header>
    }
}

#[component]
fn MobileMenu(on_navigate: Callback<()>) -> impl IntoView {
    let links = &portfolio().sections;
    let mounted = use_mounted();
    view! {
        <div class="md:hidden glass-strong mt-4 mx-6 rounded-2xl p-6 flex flex-col gap-4">
            {links
                .iter()
                .enumerate()
                .map(|(i, link)| {
                    let tween = Tween::rise(-20.0, 0.0, 300.0).delay(50.0 * i as f64);
                    view! {
                        <Reveal active=mounted tween=tween>
                            <a
                                href=link.href()
                                class="block text-lg font-medium hover:text-primary transition-colors"
                                on:click=move |_| on_navigate.run(())
                            >
                                {link.label.as_str()}
                            </a>
                        </Reveal>
                    }
                })
                .collect_view()}
            <a
                href="#contact"
                class="mt-2 px-4 py-3 rounded-full bg-gradient-primary text-white text-center font-medium"
                on:click=move |_| on_navigate.run(())
            >
                "Let's Talk"
            </a>
        </div>
    }
}
