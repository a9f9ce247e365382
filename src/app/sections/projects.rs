use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::{
    content::{portfolio, Project},
    motion::{Pose, Tween},
};

use super::{
    super::{
        hooks::{use_motion_gate, use_mounted, use_reveal},
        reveal::Reveal,
    },
    SectionHeading,
};

const CARD_TECHNOLOGIES: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &portfolio().projects;
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_reveal(section_ref);
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="projects" node_ref=section_ref class="py-32 relative">
            <div class="container mx-auto px-6">
                <SectionHeading header=&projects.header icon="🗂️" active=in_view />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    active=in_view
                                    tween=Tween::rise(0.0, 60.0, 600.0).delay(150.0 * i as f64)
                                >
                                    <ProjectCard
                                        project=project
                                        on_open=Callback::new(move |_| set_selected.set(Some(i)))
                                    />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selected
                    .get()
                    .and_then(|i| projects.items.get(i))
                    .map(|project| {
                        view! {
                            <ProjectModal
                                project=project
                                on_close=Callback::new(move |_| set_selected.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<()>) -> impl IntoView {
    let (shown, hidden) = project.card_technologies(CARD_TECHNOLOGIES);
    view! {
        <article
            class="group h-full glass rounded-2xl overflow-hidden cursor-pointer hover:-translate-y-2 transition-transform"
            tabindex="0"
            role="button"
            aria-label=format!("Open details for {}", project.title)
            on:click=move |_| on_open.run(())
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_open.run(());
                }
            }
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-br opacity-40 {}",
                    project.gradient,
                ) />
                <span class="absolute top-4 left-4 px-3 py-1 rounded-full glass text-xs font-medium">
                    {project.category.as_str()}
                </span>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title.as_str()}</h3>
                <p class="text-muted-foreground mb-4">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2">
                    {shown
                        .iter()
                        .map(|tech| {
                            view! { <span class="px-3 py-1 rounded-full bg-muted text-xs">{tech.as_str()}</span> }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-muted text-xs">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let mounted = use_mounted();
    let gate = use_motion_gate();
    let backdrop = Tween::new(Pose::HIDDEN, Pose::REST, 300.0);
    let dialog = Tween::new(Pose::scaled(0.9).with_opacity(0.0), Pose::REST, 300.0);

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-6 bg-black/60 backdrop-blur-sm"
            style=move || gate.get().plan(backdrop).style(mounted.get())
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative max-w-2xl w-full glass-strong rounded-3xl overflow-hidden"
                role="dialog"
                aria-modal="true"
                aria-label=project.title.as_str()
                style=move || gate.get().plan(dialog).style(mounted.get())
                on:click=|ev| ev.stop_propagation()
            >
                <img src=project.image.as_str() alt=project.title.as_str() class="w-full h-64 object-cover" />
                <button
                    type="button"
                    class="absolute top-4 right-4 w-10 h-10 rounded-full glass flex items-center justify-center"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <div class="p-8">
                    <span class="text-sm text-primary font-medium">{project.category.as_str()}</span>
                    <h3 class="text-3xl font-bold mt-2 mb-4">{project.title.as_str()}</h3>
                    <p class="text-muted-foreground mb-6">{project.long_description.as_str()}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! { <span class="px-3 py-1 rounded-full bg-muted text-sm">{tech.as_str()}</span> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
