use leptos::prelude::*;

use super::{icon::IconGlyph, nav::Section};
use crate::content::Highlight;

#[component]
pub fn About(summary: &'static str, highlights: &'static [Highlight]) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="relative py-16 md:py-24 bg-[#101625]">
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/5 to-purple-500/5"></div>
            <div class="container mx-auto px-4 relative">
                <h2 class="text-3xl md:text-4xl font-bold mb-8 md:mb-16 text-center">"About Me"</h2>
                <div class="max-w-4xl mx-auto">
                    <p class="text-lg md:text-xl text-gray-300 leading-relaxed mb-8 md:mb-12 text-center px-4">
                        {summary}
                    </p>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8 px-4">
                        {highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="backdrop-blur-md bg-white/5 p-6 md:p-8 rounded-xl border border-white/10 hover:border-cyan-500/50 transition-all duration-300">
                                        <IconGlyph icon=h.icon class="block text-3xl md:text-4xl mb-4" />
                                        <h3 class="text-lg md:text-xl font-semibold mb-3">
                                            {h.title.clone()}
                                        </h3>
                                        <p class="text-gray-400 text-sm md:text-base">
                                            {h.description.clone()}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
