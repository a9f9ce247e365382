use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_location};

use crate::motion::{Easing, Pose, Tween};

use super::{hooks::use_mounted, reveal::Reveal};

const BIG_404: Tween = Tween::new(Pose::scaled(0.5), Pose::REST, 800.0).easing(Easing::SMOOTH);

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("no route for {}", pathname.get_untracked());

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    let mounted = use_mounted();
    let go_back = move |_| {
        if let Err(e) = window().history().and_then(|history| history.back()) {
            log::warn!("couldn't go back: {e:?}");
        }
    };

    view! {
        <Title text="Page Not Found" />
        <main class="min-h-screen flex items-center justify-center px-6 text-center">
            <div>
                <Reveal active=mounted tween=BIG_404>
                    <h1 class="text-[10rem] md:text-[14rem] font-bold leading-none text-gradient">
                        "404"
                    </h1>
                </Reveal>
                <Reveal active=mounted tween=Tween::rise(0.0, 20.0, 600.0).delay(300.0)>
                    <h2 class="text-3xl font-bold mb-4">"Page Not Found"</h2>
                    <p class="text-muted-foreground max-w-md mx-auto mb-10">
                        "The page you're looking for doesn't exist or has been moved."
                    </p>
                </Reveal>
                <Reveal
                    active=mounted
                    tween=Tween::rise(0.0, 20.0, 600.0).delay(500.0)
                    class="flex flex-col sm:flex-row gap-4 justify-center"
                >
                    <A
                        href="/"
                        attr:class="px-8 py-4 rounded-full bg-gradient-primary text-white font-medium hover:scale-105 transition-transform"
                    >
                        "Back to Home"
                    </A>
                    <button
                        type="button"
                        class="px-8 py-4 rounded-full glass font-medium hover:scale-105 transition-transform"
                        on:click=go_back
                    >
                        "Go Back"
                    </button>
                </Reveal>
            </div>
        </main>
    }
}
