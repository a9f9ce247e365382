mod about;
mod contact;
mod experience;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use leptos::prelude::*;

use crate::{content::SectionHeader, motion::Tween};

use super::reveal::Reveal;

/// Badge, two-tone heading and optional summary shared by every section.
#[component]
fn SectionHeading(header: &'static SectionHeader, icon: &'static str, active: Signal<bool>) -> impl IntoView {
    view! {
        <Reveal active=active tween=Tween::rise(0.0, 30.0, 600.0) class="text-center mb-16">
            <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass text-sm font-medium text-primary mb-6">
                <span aria-hidden="true">{icon}</span>
                {header.badge.as_str()}
            </span>
            <h2 class="text-4xl md:text-5xl font-bold mb-6">
                {header.heading.as_str()}
                " "
                <span class="text-gradient">{header.highlight.as_str()}</span>
            </h2>
            {header
                .summary
                .as_deref()
                .map(|summary| {
                    view! {
                        <p class="text-lg text-muted-foreground max-w-2xl mx-auto">{summary}</p>
                    }
                })}
        </Reveal>
    }
}
