use leptos::prelude::*;

/// Anchored sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Stack,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Stack,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Stack => "tech-stack",
            Section::Projects => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Stack => "Stack",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="fixed top-4 md:top-8 left-1/2 -translate-x-1/2 z-50 w-[90%] md:w-auto backdrop-blur-md bg-white/10 rounded-full border border-white/20 shadow-lg shadow-black/5">
            <div class="px-3 md:px-6 py-2">
                <ul class="flex items-center justify-between md:gap-4 text-xs md:text-sm">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class="px-2 py-1 text-gray-300 hover:text-white transition-all duration-300"
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
