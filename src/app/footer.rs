use chrono::Datelike;
use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::content::SocialLink;

#[component]
pub fn Footer(owner: &'static str, socials: &'static [SocialLink]) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="relative py-8 md:py-12 bg-gray-900 border-t border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-center gap-6 md:gap-8">
                    <div class="flex gap-6">
                        {socials
                            .iter()
                            .map(|social| {
                                let external = social.is_external();
                                view! {
                                    <a
                                        href=social.href.clone()
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        aria-label=social.label.clone()
                                        class="text-gray-400 hover:text-cyan-400 transition-colors text-xl md:text-2xl"
                                    >
                                        <IconGlyph icon=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-gray-500 text-xs md:text-sm text-center">
                        {format!("© {year} {owner}. All rights reserved.")}
                    </p>
                </div>
            </div>
        </footer>
    }
}
