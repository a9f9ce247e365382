use leptos::{html, prelude::*};

use crate::{
    content::portfolio,
    motion::{Easing, Pose, Tween},
};

use super::{
    super::{
        hooks::{use_motion_gate, use_reveal},
        reveal::Reveal,
    },
    SectionHeading,
};

fn bar_fill(fraction: f64, index: usize) -> Tween {
    Tween::new(
        Pose::REST.with_scale_x(0.0),
        Pose::REST.with_scale_x(fraction),
        1000.0,
    )
    .delay(300.0 + 100.0 * index as f64)
    .easing(Easing::SMOOTH)
}

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &portfolio().skills;
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_reveal(section_ref);
    let gate = use_motion_gate();

    view! {
        <section id="skills" node_ref=section_ref class="py-32 relative">
            <div class="container mx-auto px-6">
                <SectionHeading header=&skills.header icon="⚙️" active=in_view />
                <div class="grid md:grid-cols-2 gap-x-16 gap-y-8 max-w-5xl mx-auto mb-20">
                    {skills
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let from_x = if i % 2 == 0 { -40.0 } else { 40.0 };
                            let fill = bar_fill(skill.fraction(), i);
                            view! {
                                <Reveal
                                    active=in_view
                                    tween=Tween::rise(from_x, 0.0, 600.0).delay(100.0 * i as f64)
                                >
                                    <div class="flex justify-between mb-2">
                                        <span class="font-medium">{skill.name.as_str()}</span>
                                        <span class="text-muted-foreground">
                                            {format!("{}%", skill.level)}
                                        </span>
                                    </div>
                                    <div
                                        class="h-2 rounded-full bg-muted overflow-hidden"
                                        role="progressbar"
                                        aria-label=skill.name.as_str()
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-valuenow=skill.level.to_string()
                                    >
                                        <div
                                            class=format!(
                                                "h-full w-full rounded-full origin-left bg-gradient-to-r {}",
                                                skill.gradient,
                                            )
                                            style=move || gate.get().plan(fill).style(in_view.get())
                                        />
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal active=in_view tween=Tween::rise(0.0, 30.0, 600.0).delay(800.0) class="text-center">
                    <h3 class="text-2xl font-semibold mb-8">"Technologies I Work With"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {skills
                            .technologies
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                let pop = Tween::new(Pose::scaled(0.8), Pose::REST, 400.0)
                                    .delay(1000.0 + 50.0 * i as f64);
                                view! {
                                    <Reveal active=in_view tween=pop class="inline-block">
                                        <span class="block px-5 py-2 rounded-full glass text-sm font-medium hover:scale-110 transition-transform">
                                            {tech.as_str()}
                                        </span>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
