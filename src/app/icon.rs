use leptos::{either::Either, prelude::*};

use crate::content::{Glyph, Icon};

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon.glyph() {
        Glyph::Text(text) => Either::Left(view! {
            <span class=class aria-hidden="true">
                {text}
            </span>
        }),
        Glyph::Class(name) => Either::Right(view! {
            <i class=format!("{name} {class}") aria-hidden="true"></i>
        }),
    }
}
