use leptos::prelude::*;

use crate::content::{copyright_year, portfolio};

#[component]
pub fn Footer() -> impl IntoView {
    let content = portfolio();
    let site = &content.site;

    view! {
        <footer class="py-12 border-t border-border">
            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center justify-between gap-6">
                <a href="#" class="text-2xl font-bold text-gradient" aria-label="Back to top">
                    {site.initials.as_str()}
                </a>
                <nav class="flex flex-wrap justify-center gap-6" aria-label="Footer">
                    {content
                        .sections
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href()
                                    class="text-sm text-muted-foreground hover:text-foreground transition-colors"
                                >
                                    {link.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex gap-4">
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
                                    class="text-muted-foreground hover:text-foreground transition-colors text-xl"
                                >
                                    <i class=social.icon.as_str() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="text-center text-sm text-muted-foreground mt-8">
                {format!("© {} {}. All rights reserved.", copyright_year(), site.name)}
            </p>
        </footer>
    }
}
