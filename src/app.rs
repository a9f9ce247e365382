mod footer;
mod hooks;
mod homepage;
mod indicators;
mod navigation;
mod not_found;
mod reveal;
mod sections;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::portfolio,
    theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY},
};
use homepage::HomePage;
use not_found::NotFound;

// runs before first paint so a persisted dark theme doesn't flash light
fn theme_bootstrap_script() -> String {
    format!(
        "(function(){{try{{var t=localStorage.getItem('{THEME_STORAGE_KEY}');\
         if(t!=='light'&&t!=='dark'){{t=matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light';}}\
         var r=document.documentElement;r.setAttribute('{THEME_ATTRIBUTE}',t);\
         r.classList.toggle('dark',t==='dark');}}catch(e){{}}}})();"
    )
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <script inner_html=theme_bootstrap_script() />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    hooks::provide_motion_gate();
    theme::provide_theme();

    let site = &portfolio().site;

    view! {
        <Title formatter=move |title| format!("{} - {title}", site.name) />
        <Meta name="description" content=site.description.as_str() />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
