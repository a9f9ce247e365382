use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::portfolio;

use super::{
    footer::Footer,
    hooks::{provide_page_scroll, use_motion_gate},
    indicators::{CustomCursor, ScrollProgressBar},
    navigation::Navigation,
    reveal::PageTransition,
    sections::{About, Contact, Experience, Hero, Projects, Skills},
};

#[component]
pub fn HomePage() -> impl IntoView {
    provide_page_scroll();
    let gate = use_motion_gate();

    view! {
        <Title text=portfolio().site.title.as_str() />
        <Show when=move || !gate.get().is_reduced()>
            <CustomCursor />
        </Show>
        <ScrollProgressBar />
        <PageTransition>
            <Navigation />
            <main class="overflow-x-hidden">
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </PageTransition>
    }
}
