use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::intro::{Intro, PROMPT_DELAY};

#[component]
pub fn Splash(intro: RwSignal<Intro>) -> impl IntoView {
    // the timer is cleared when this component's owner is disposed
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            intro.update(Intro::prompt_elapsed);
            log::debug!("intro prompt shown");
        },
        PROMPT_DELAY.as_millis() as f64,
    );

    // effects only run in the browser, so nothing is scheduled during SSR
    Effect::watch(|| (), move |_, _, _| start(()), true);

    let dismiss = move |_| {
        if intro.try_update(Intro::dismiss).unwrap_or(false) {
            log::debug!("intro dismissed");
        }
    };

    view! {
        <Show when=move || intro.with(Intro::is_visible)>
            <div class="terminal-overlay">
                <div class="text-cyan-400 mb-4">
                    <p class="terminal-text">"Initializing secure connection..."</p>
                </div>
                <Show when=move || intro.with(Intro::shows_prompt)>
                    <button
                        on:click=dismiss
                        class="mt-4 px-6 py-2 bg-cyan-500/20 border border-cyan-500/50 rounded-lg text-cyan-400 hover:bg-cyan-500/30 transition-all duration-300 animate-pulse"
                    >
                        "Click to continue"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
