use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::{
    contact::{ContactForm, SubmissionState, RESET_DELAY, SUBMIT_DELAY},
    content::portfolio,
    motion::Tween,
};

use super::{
    super::{
        hooks::{use_mounted, use_reveal},
        reveal::Reveal,
    },
    SectionHeading,
};

const INPUT_CLASS: &str = "w-full px-5 py-4 rounded-xl bg-muted/50 border border-border focus:outline-none focus:ring-2 focus:ring-primary transition";

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &portfolio().contact;
    let socials = &portfolio().socials;
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_reveal(section_ref);

    let form = RwSignal::new(ContactForm::default());
    let state = RwSignal::new(SubmissionState::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut next = state.get_untracked();
        if let Err(e) = form.with_untracked(|f| next.submit(f)) {
            log::debug!("contact form rejected: {e}");
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        state.set(next);
        log::info!("sending contact message");
        // no backend: delivery is simulated
        set_timeout(
            move || {
                let sent = state.try_update(SubmissionState::complete).unwrap_or(false);
                if !sent {
                    return;
                }
                form.try_update(ContactForm::clear);
                set_timeout(
                    move || {
                        state.try_update(SubmissionState::reset);
                    },
                    RESET_DELAY,
                );
            },
            SUBMIT_DELAY,
        );
    };

    let locked = move || state.get().is_locked();

    view! {
        <section id="contact" node_ref=section_ref class="py-32 relative">
            <div class="container mx-auto px-6">
                <SectionHeading header=&contact.header icon="✉️" active=in_view />
                <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <Reveal active=in_view tween=Tween::rise(-50.0, 0.0, 600.0).delay(200.0)>
                        <h3 class="text-2xl font-semibold mb-4">"Let's talk"</h3>
                        <p class="text-muted-foreground mb-8">{contact.blurb.as_str()}</p>
                        <ul class="space-y-6 mb-10">
                            {contact
                                .details
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <li class="flex items-center gap-4">
                                            <span
                                                class="w-12 h-12 rounded-xl glass flex items-center justify-center text-xl"
                                                aria-hidden="true"
                                            >
                                                {detail.icon.as_str()}
                                            </span>
                                            <div>
                                                <p class="text-sm text-muted-foreground">
                                                    {detail.label.as_str()}
                                                </p>
                                                <p class="font-medium">{detail.value.as_str()}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="flex gap-4">
                            {socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href.as_str()
                                            target="_blank"
                                            rel="noreferrer"
                                            aria-label=social.label.as_str()
                                            class="w-12 h-12 rounded-xl glass flex items-center justify-center text-xl hover:scale-110 transition-transform"
                                        >
                                            <i class=social.icon.as_str() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal active=in_view tween=Tween::rise(50.0, 0.0, 600.0).delay(400.0)>
                        <form class="glass rounded-3xl p-8 space-y-6" on:submit=on_submit novalidate=true>
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                aria-label="Your Name"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                prop:disabled=locked
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                aria-label="Your Email"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                prop:disabled=locked
                            />
                            <textarea
                                name="message"
                                rows="5"
                                placeholder="Your Message"
                                aria-label="Your Message"
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                                prop:disabled=locked
                            />
                            {move || {
                                error
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <p class="text-sm text-red-500" role="alert">
                                                {e}
                                            </p>
                                        }
                                    })
                            }}
                            <button
                                type="submit"
                                class="w-full py-4 rounded-xl bg-gradient-primary text-white font-medium hover:scale-[1.02] transition-transform disabled:opacity-70 disabled:cursor-not-allowed"
                                prop:disabled=locked
                            >
                                {move || state.get().button_label()}
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
            <Show when=move || state.get() == SubmissionState::Sent>
                <SentToast />
            </Show>
        </section>
    }
}

#[component]
fn SentToast() -> impl IntoView {
    let mounted = use_mounted();
    view! {
        <div class="fixed bottom-6 right-6 z-50" role="status">
            <Reveal active=mounted tween=Tween::rise(0.0, 20.0, 300.0)>
                <div class="glass-strong rounded-2xl px-6 py-4 shadow-lg">
                    <p class="font-semibold">"Message sent!"</p>
                    <p class="text-sm text-muted-foreground">"Thanks for reaching out. I'll get back to you soon."</p>
                </div>
            </Reveal>
        </div>
    }
}
