use leptos::prelude::*;

use super::{icon::IconGlyph, nav::Section};
use crate::content::Profile;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <header class="relative h-screen flex items-center justify-center bg-gradient-to-b from-gray-900 via-gray-900 to-gray-800">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/20 to-purple-500/20"></div>
            </div>
            <div class="relative z-10 text-center px-4 max-w-4xl mx-auto">
                <IconGlyph icon=profile.icon class="block text-6xl md:text-7xl mb-6 md:mb-8" />
                <h1 class="text-4xl md:text-6xl font-bold mb-4 md:mb-6 text-gradient-shine">
                    {profile.name.clone()}
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-8 md:mb-12">
                    {profile.tagline.clone()}
                </p>
                <div class="flex flex-col md:flex-row justify-center gap-4 md:gap-6">
                    <a
                        href=Section::Projects.href()
                        class="px-6 md:px-8 py-3 rounded-full bg-gradient-to-r from-cyan-500 to-cyan-600 hover:from-cyan-400 hover:to-cyan-500 text-white font-semibold transition-all duration-300 hover:shadow-lg hover:shadow-cyan-500/25"
                    >
                        "View Projects"
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="px-6 md:px-8 py-3 rounded-full border border-cyan-500 hover:bg-cyan-500/10 text-cyan-400 font-semibold transition-all duration-300"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>
        </header>
    }
}
