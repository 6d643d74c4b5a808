mod about;
mod contact;
mod footer;
mod hero;
mod icon;
mod nav;
mod projects;
mod splash;
mod tech_stack;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, SiteContent};
use crate::intro::Intro;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::Nav;
use projects::Projects;
use splash::Splash;
use tech_stack::TechStack;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match site_content() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <p class="p-8 text-center text-gray-300">"This page couldn't be loaded."</p>
                },
            )
        }
    }
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    let intro = RwSignal::new(Intro::new());
    let profile = &content.profile;

    view! {
        <Title text=format!("{} - Portfolio", profile.name) />
        <Splash intro />
        <div
            class="min-h-screen bg-gray-900 text-gray-100"
            style:visibility=move || {
                if intro.with(Intro::is_visible) { "hidden" } else { "visible" }
            }
        >
            <Nav />
            <Hero profile />
            <About summary=profile.summary.as_str() highlights=content.highlights.as_slice() />
            <div class="relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/10 to-purple-500/10"></div>
                <TechStack groups=content.stack.as_slice() />
                <Projects projects=content.projects.as_slice() />
            </div>
            <Contact recipient=profile.email.as_str() />
            <Footer owner=profile.name.as_str() socials=content.socials.as_slice() />
        </div>
    }
}
