use leptos::{either::Either, prelude::*};

use crate::{
    content::portfolio,
    motion::{Easing, Pose, Tween},
};

use super::super::{
    hooks::{use_motion_gate, use_mounted},
    reveal::Reveal,
};

const CHAR_STAGGER_MS: f64 = 30.0;
const CHAR_RISE: Tween = Tween::new(
    Pose::offset(0.0, 100.0),
    Pose::REST,
    800.0,
)
.delay(500.0)
.easing(Easing::Power4Out);

#[component]
pub fn Hero() -> impl IntoView {
    let content = portfolio();
    let site = &content.site;
    let gate = use_motion_gate();
    let mounted = use_mounted();
    let title = site.title.as_str();

    let title_chars = move || {
        if gate.get().is_reduced() {
            Either::Left(title)
        } else {
            Either::Right(
                title
                    .chars()
                    .enumerate()
                    .map(|(i, c)| {
                        let tween = CHAR_RISE.delay(CHAR_RISE.delay_ms + CHAR_STAGGER_MS * i as f64);
                        let glyph = if c == ' ' { '\u{a0}' } else { c };
                        view! {
                            <span
                                class="inline-block"
                                style=move || gate.get().plan(tween).style(mounted.get())
                            >
                                {glyph.to_string()}
                            </span>
                        }
                    })
                    .collect_view(),
            )
        }
    };

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 -z-10" aria-hidden="true">
                <div class="absolute top-1/4 -left-32 w-96 h-96 rounded-full bg-primary/20 blur-3xl" />
                <div class="absolute bottom-1/4 -right-32 w-96 h-96 rounded-full bg-accent/20 blur-3xl" />
            </div>
            <div class="container mx-auto px-6 text-center">
                <Reveal active=mounted tween=Tween::rise(0.0, 20.0, 600.0).delay(200.0)>
                    <p class="text-lg text-muted-foreground mb-4">
                        {content.hero.greeting.as_str()}
                        " "
                        <span class="text-gradient font-semibold">{site.name.as_str()}</span>
                    </p>
                </Reveal>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 overflow-hidden" aria-label=title>
                    {title_chars}
                </h1>
                <Reveal active=mounted tween=Tween::rise(0.0, 20.0, 600.0).delay(1200.0)>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto mb-10">
                        {content.hero.tagline.as_str()}
                    </p>
                </Reveal>
                <Reveal
                    active=mounted
                    tween=Tween::rise(0.0, 20.0, 600.0).delay(1400.0)
                    class="flex flex-col sm:flex-row gap-4 justify-center"
                >
                    <a
                        href="#projects"
                        class="px-8 py-4 rounded-full bg-gradient-primary text-white font-medium hover:scale-105 transition-transform"
                    >
                        "View My Work"
                    </a>
                    <a
                        href=site.resume.href.as_str()
                        download=site.resume.file_name.as_str()
                        class="px-8 py-4 rounded-full glass font-medium hover:scale-105 transition-transform"
                    >
                        "Download Resume"
                    </a>
                </Reveal>
                <Reveal
                    active=mounted
                    tween=Tween::rise(0.0, 20.0, 600.0).delay(1600.0)
                    class="flex justify-center gap-4 mt-10"
                >
                    {content
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href.as_str()
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=social.label.as_str()
                                    class="w-12 h-12 rounded-full glass flex items-center justify-center text-xl hover:scale-110 transition-transform"
                                >
                                    <i class=social.icon.as_str() />
                                </a>
                            }
                        })
                        .collect_view()}
                </Reveal>
                <div class="absolute bottom-10 left-1/2 -translate-x-1/2">
                    <Reveal
                        active=mounted
                        tween=Tween::new(Pose::HIDDEN, Pose::REST, 600.0).delay(2000.0)
                    >
                        <a
                            href="#about"
                            class="flex flex-col items-center gap-2 text-sm text-muted-foreground"
                        >
                            "Scroll"
                            <span class="block w-px h-12 bg-gradient-to-b from-primary to-transparent" />
                        </a>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
