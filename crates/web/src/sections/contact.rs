// =============================================================================
// NexusCorp Web - Contact Section
// =============================================================================
// Submitting only acknowledges. Nothing is read, sent, or stored.
// =============================================================================

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use nexus_common::{contact, CATALOG};

use crate::components::{Icon, SectionHeading, TextArea, TextInput};
use crate::state::AppState;

#[component]
pub fn ContactSection() -> impl IntoView {
    let notices = expect_context::<AppState>().notices;
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if notices.post(contact::acknowledge).is_none() {
            log::warn!("Notice host unavailable; acknowledgement not shown");
        }
        if let Some(form) = form_ref.get_untracked() {
            form.reset();
        }
    };

    view! {
        <section id="contact" class="py-24 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16">
                    // Pitch and channels
                    <div>
                        <SectionHeading eyebrow="Contact Us" title="Ready to elevate your business?" title_class="mb-8" />
                        <p class="text-slate-600 mb-12 text-lg">
                            "Get in touch with our expert advisors to discuss how NexusCorp can help your organization reach its full potential."
                        </p>

                        <div class="space-y-6">
                            {CATALOG
                                .contact_channels
                                .iter()
                                .map(|channel| view! {
                                    <div class="flex gap-4">
                                        <div class="w-12 h-12 bg-white rounded-xl shadow-sm flex items-center justify-center text-blue-600 shrink-0">
                                            <Icon glyph=channel.kind />
                                        </div>
                                        <div>
                                            <div class="text-sm font-bold text-slate-400 uppercase tracking-widest">{channel.title}</div>
                                            <div class="text-lg font-bold text-slate-900">{channel.value}</div>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Form
                    <div class="bg-white p-10 rounded-3xl shadow-xl shadow-slate-200/50">
                        <form node_ref=form_ref on:submit=on_submit class="space-y-6 contact-form">
                            <div class="grid sm:grid-cols-2 gap-6">
                                <TextInput label="First Name" name="first-name" required=true />
                                <TextInput label="Last Name" name="last-name" required=true />
                            </div>
                            <TextInput label="Work Email" name="email" input_type="email" required=true />
                            <TextArea label="Message" name="message" rows=4 required=true />
                            <button
                                type="submit"
                                class="w-full bg-blue-600 text-white font-bold py-4 rounded-xl hover:bg-blue-700 transition-all shadow-lg shadow-blue-500/30"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
