use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::{icon::IconGlyph, nav::Section};
use crate::content::StackGroup;
use crate::reveal::{Direction, RevealState, ROOT_MARGIN, THRESHOLD};

#[component]
pub fn TechStack(groups: &'static [StackGroup]) -> impl IntoView {
    view! {
        <section id=Section::Stack.id() class="relative py-16 md:py-20 bg-gray-900/60">
            <div class="container mx-auto px-4 relative">
                <h2 class="text-3xl md:text-4xl font-bold mb-8 md:mb-12 text-center">"Tech Stack"</h2>
                <div class="max-w-5xl mx-auto space-y-6 md:space-y-8 px-4">
                    {groups.iter().map(|group| view! { <StackCard group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StackCard(group: &'static StackGroup) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let reveal = RwSignal::new(RevealState::new(group.direction));

    // observer is disconnected when this card's owner is disposed
    use_intersection_observer_with_options(
        card_ref,
        move |entries, _| {
            for entry in entries {
                let is_intersecting = entry.is_intersecting();
                let changed = reveal
                    .try_update(|r| r.observe(is_intersecting))
                    .unwrap_or(false);
                if changed {
                    log::debug!(
                        "{} {}",
                        group.title,
                        if is_intersecting { "revealed" } else { "hidden" }
                    );
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![THRESHOLD])
            .root_margin(ROOT_MARGIN.to_string()),
    );

    let justify = match group.direction {
        Direction::Left => "flex justify-start",
        Direction::Right => "flex justify-end",
    };

    view! {
        <div class=justify>
            <div
                node_ref=card_ref
                class=move || {
                    format!(
                        "w-full group relative backdrop-blur-md bg-white/10 rounded-xl overflow-hidden border border-white/10 transition-all duration-300 hover:bg-white/20 hover:border-cyan-500/50 hover:shadow-lg hover:shadow-cyan-500/20 animate-on-scroll {}",
                        reveal.with(RevealState::animation_class),
                    )
                }
            >
                <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity"></div>
                <div class="relative p-6 md:p-8">
                    <IconGlyph
                        icon=group.icon
                        class="block text-3xl md:text-4xl mb-4 md:mb-6 transform transition-transform group-hover:scale-110"
                    />
                    <h3 class="text-lg md:text-xl font-semibold mb-4">{group.title.clone()}</h3>
                    <ul class="flex flex-wrap gap-3 md:gap-4 text-gray-300 text-sm md:text-base">
                        {group
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <li class="flex items-center gap-2 bg-white/5 px-3 md:px-4 py-2 rounded-lg">
                                        <IconGlyph icon=skill.icon />
                                        {skill.name.clone()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
