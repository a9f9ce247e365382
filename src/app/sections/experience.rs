use leptos::{html, prelude::*};

use crate::{content::portfolio, motion::Tween, scroll::ScrubRange};

use super::{
    super::{
        hooks::{use_reveal, use_scrub},
        reveal::Reveal,
    },
    SectionHeading,
};

// the line grows while the timeline scrolls from the bottom to the middle
const LINE_SCRUB: ScrubRange = ScrubRange::new(1.0, 0.5);

#[component]
pub fn Experience() -> impl IntoView {
    let experience = &portfolio().experience;
    let section_ref = NodeRef::<html::Section>::new();
    let timeline_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(section_ref);
    let progress = use_scrub(timeline_ref, LINE_SCRUB);

    view! {
        <section id="experience" node_ref=section_ref class="py-32 relative">
            <div class="container mx-auto px-6">
                <SectionHeading header=&experience.header icon="💼" active=in_view />
                <div node_ref=timeline_ref class="relative max-w-4xl mx-auto">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-px bg-border" aria-hidden="true">
                        <div
                            class="w-full h-full bg-gradient-primary origin-top"
                            style=move || format!("transform: scaleY({});", progress.get())
                        />
                    </div>
                    {experience
                        .roles
                        .iter()
                        .enumerate()
                        .map(|(i, role)| {
                            let left = i % 2 == 0;
                            let from_x = if left { -50.0 } else { 50.0 };
                            let side = if left { "md:pr-12 md:mr-auto" } else { "md:pl-12 md:ml-auto" };
                            view! {
                                <div class="relative pl-12 md:pl-0 mb-12">
                                    <span
                                        class="absolute left-2.5 md:left-1/2 md:-translate-x-1/2 top-6 w-3 h-3 rounded-full bg-gradient-primary ring-4 ring-background"
                                        aria-hidden="true"
                                    />
                                    <Reveal
                                        active=in_view
                                        tween=Tween::rise(from_x, 0.0, 600.0).delay(200.0 * i as f64)
                                        class=format!("md:w-1/2 {side}")
                                    >
                                        <article class="glass rounded-2xl p-6">
                                            <span class="text-sm text-primary font-medium">
                                                {role.period.as_str()}
                                            </span>
                                            <h3 class="text-xl font-semibold mt-2">{role.role.as_str()}</h3>
                                            <p class="text-muted-foreground mb-4">
                                                {format!("{} · {}", role.company, role.location)}
                                            </p>
                                            <p class="mb-4">{role.description.as_str()}</p>
                                            <ul class="flex flex-wrap gap-2" aria-label="Technologies">
                                                {role
                                                    .technologies
                                                    .iter()
                                                    .map(|tech| {
                                                        view! {
                                                            <li class="px-3 py-1 rounded-full bg-muted text-xs">
                                                                {tech.as_str()}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </article>
                                    </Reveal>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
