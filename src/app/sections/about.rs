use leptos::{either::Either, html, prelude::*};

use crate::{
    content::portfolio,
    motion::Tween,
    scroll::{stagger, ScrubRange},
};

use super::{
    super::{
        hooks::{use_motion_gate, use_reveal, use_scrub},
        reveal::Reveal,
    },
    SectionHeading,
};

// words light up from the text's top reaching 80% of the viewport until its
// bottom reaches 30%
const STORY_SCRUB: ScrubRange = ScrubRange::new(0.8, 0.3);
const WORD_SPREAD: f64 = 0.5;
const DIM_OPACITY: f64 = 0.2;

#[component]
pub fn About() -> impl IntoView {
    let about = &portfolio().about;
    let section_ref = NodeRef::<html::Section>::new();
    let story_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(section_ref);
    let progress = use_scrub(story_ref, STORY_SCRUB);
    let gate = use_motion_gate();

    let words = about.story.split_whitespace().collect::<Vec<_>>();
    let count = words.len();
    let story = move || {
        if gate.get().is_reduced() {
            Either::Left(view! { <p>{about.story.as_str()}</p> })
        } else {
            Either::Right(view! {
                <p>
                    {words
                        .iter()
                        .enumerate()
                        .map(|(i, word)| {
                            let opacity = move || {
                                DIM_OPACITY
                                    + (1.0 - DIM_OPACITY)
                                        * stagger(progress.get(), i, count, WORD_SPREAD)
                            };
                            view! {
                                <span
                                    class="inline-block mr-2"
                                    style=move || format!("opacity: {};", opacity())
                                >
                                    {*word}
                                </span>
                            }
                        })
                        .collect_view()}
                </p>
            })
        }
    };

    view! {
        <section id="about" node_ref=section_ref class="py-32 relative">
            <div class="container mx-auto px-6">
                <SectionHeading header=&about.header icon="✨" active=in_view />
                <div
                    node_ref=story_ref
                    class="max-w-4xl mx-auto text-2xl md:text-3xl leading-relaxed font-medium mb-20"
                >
                    {story}
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {about
                        .features
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <Reveal
                                    active=in_view
                                    tween=Tween::rise(0.0, 50.0, 600.0).delay(200.0 + 150.0 * i as f64)
                                >
                                    <div class="h-full glass rounded-2xl p-8 hover:-translate-y-2 transition-transform">
                                        <div class="text-4xl mb-4" aria-hidden="true">
                                            {feature.icon.as_str()}
                                        </div>
                                        <h3 class="text-xl font-semibold mb-3">
                                            {feature.title.as_str()}
                                        </h3>
                                        <p class="text-muted-foreground">
                                            {feature.description.as_str()}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
