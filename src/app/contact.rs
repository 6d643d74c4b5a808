use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use super::{icon::IconGlyph, nav::Section};
use crate::contact::{ContactError, ContactForm, Field, MailtoLink};
use crate::content::Icon;

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-white/10 border border-white/20 rounded-lg focus:outline-none focus:ring-2 focus:ring-cyan-500 focus:border-transparent text-white placeholder-gray-400";

/// Hands the link to the browser. Whether a mail client picks it up can't be observed.
fn open_mail_client(link: &MailtoLink) -> Result<(), ContactError> {
    window()
        .location()
        .set_href(&link.href())
        .map_err(|e| ContactError::Navigation(format!("{e:?}")))
}

#[component]
pub fn Contact(recipient: &'static str) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let link = form.write().submit(recipient);
        match open_mail_client(&link) {
            Ok(()) => log::info!("opened mail client for {}", link.recipient()),
            Err(e) => log::error!("{e}"),
        }
    };

    view! {
        <section id=Section::Contact.id() class="relative py-16 md:py-24 bg-gray-900">
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/5 to-purple-500/5"></div>
            <div class="container mx-auto px-4 relative">
                <h2 class="text-3xl md:text-4xl font-bold mb-8 md:mb-12 text-center">"Get in Touch"</h2>
                <div class="max-w-lg mx-auto px-4">
                    <form on:submit=on_submit class="space-y-6">
                        <div class="backdrop-blur-md bg-white/5 p-6 md:p-8 rounded-xl border border-white/10">
                            <div class="space-y-4 md:space-y-6">
                                {Field::ALL
                                    .into_iter()
                                    .map(|field| view! { <FormField field form /> })
                                    .collect_view()}
                                <button
                                    type="submit"
                                    class="w-full px-6 py-3 bg-gradient-to-r from-cyan-500 to-cyan-600 hover:from-cyan-400 hover:to-cyan-500 text-white font-semibold rounded-lg transition-all duration-300 hover:shadow-lg hover:shadow-cyan-500/25 flex items-center justify-center gap-2"
                                >
                                    "Send Message"
                                    <IconGlyph icon=Icon::Send />
                                </button>
                            </div>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: Event| form.write().set(field, event_target_value(&ev));

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium text-gray-300 mb-2">
                {field.label()}
            </label>
            {if field.is_multiline() {
                Either::Left(
                    view! {
                        <textarea
                            id=field.id()
                            name=field.id()
                            rows=4
                            class=format!("{INPUT_CLASS} resize-none")
                            placeholder=field.placeholder()
                            required=true
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=field.input_type()
                            id=field.id()
                            name=field.id()
                            class=INPUT_CLASS
                            placeholder=field.placeholder()
                            required=true
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        </div>
    }
}
