use leptos::prelude::*;

use super::{icon::IconGlyph, nav::Section};
use crate::carousel::Carousel;
use crate::content::{Icon, Project};

const NAV_BUTTON_CLASS: &str = "p-2 rounded-full bg-gray-800/50 backdrop-blur-sm border border-white/10 text-white/75 hover:text-white hover:bg-gray-700/50 hover:border-cyan-500/50 transition-all duration-300";

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(projects));

    let prev = move |_| {
        carousel.update(Carousel::retreat);
        log::debug!("carousel moved back to {}", carousel.with_untracked(Carousel::start));
    };
    let next = move |_| {
        carousel.update(Carousel::advance);
        log::debug!("carousel moved forward to {}", carousel.with_untracked(Carousel::start));
    };

    view! {
        <section id=Section::Projects.id() class="relative py-16 md:py-20 bg-gray-900/60">
            <div class="container relative mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold mb-8 md:mb-12 text-center">
                    "Featured Projects"
                </h2>
                <div class="relative max-w-6xl mx-auto px-4">
                    <button
                        on:click=prev
                        class=format!("hidden md:block absolute left-0 top-1/2 -translate-y-1/2 -translate-x-12 z-10 {NAV_BUTTON_CLASS}")
                        aria-label="Previous project"
                    >
                        <IconGlyph icon=Icon::ChevronLeft class="block w-6 h-6 leading-6 text-2xl" />
                    </button>
                    <button
                        on:click=next
                        class=format!("hidden md:block absolute right-0 top-1/2 -translate-y-1/2 translate-x-12 z-10 {NAV_BUTTON_CLASS}")
                        aria-label="Next project"
                    >
                        <IconGlyph icon=Icon::ChevronRight class="block w-6 h-6 leading-6 text-2xl" />
                    </button>
                    <div class="flex md:hidden justify-center gap-4 mb-6">
                        <button on:click=prev class=NAV_BUTTON_CLASS aria-label="Previous project">
                            <IconGlyph icon=Icon::ChevronLeft class="block w-5 h-5 leading-5 text-xl" />
                        </button>
                        <button on:click=next class=NAV_BUTTON_CLASS aria-label="Next project">
                            <IconGlyph icon=Icon::ChevronRight class="block w-5 h-5 leading-5 text-xl" />
                        </button>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                        {move || {
                            carousel
                                .with(|c| {
                                    c.visible()
                                        .map(|project| view! { <ProjectCard project /> })
                                        .collect_view()
                                })
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group relative backdrop-blur-md bg-white/10 rounded-xl overflow-hidden border border-white/10 transition-all duration-300 hover:bg-white/20 hover:border-cyan-500/50 hover:shadow-lg hover:shadow-cyan-500/20">
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity"></div>
            <div class="relative p-6 md:p-8">
                <IconGlyph
                    icon=project.icon
                    class="block text-3xl md:text-4xl mb-4 md:mb-6 transform transition-transform group-hover:scale-110"
                />
                <h3 class="font-bold text-lg md:text-xl mb-2 md:mb-3 text-white">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-300 mb-4 md:mb-6 text-sm md:text-base">
                    {project.description.clone()}
                </p>
                <a
                    href=project.link.clone()
                    class="inline-flex items-center gap-2 text-cyan-400 hover:text-cyan-300 transition-colors text-sm md:text-base"
                >
                    "View Details"
                    <IconGlyph icon=Icon::ExternalLink />
                </a>
            </div>
        </div>
    }
}
