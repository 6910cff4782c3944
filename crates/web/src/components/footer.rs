// =============================================================================
// NexusCorp Web - Footer Component
// =============================================================================

use leptos::prelude::*;
use nexus_common::CATALOG;

use crate::components::common::BrandMark;
use crate::components::icons::{Glyph, Icon};

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Page footer with link columns and the newsletter field.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-white py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-4 gap-12 mb-16">
                    // Brand Column
                    <div>
                        <BrandMark class=Signal::stored("mb-6 block".to_string()) />
                        <p class="text-slate-400 text-sm leading-relaxed">
                            "Global leaders in corporate strategy and digital transformation. Empowering businesses to thrive in the modern age."
                        </p>
                    </div>

                    // Links Columns
                    {CATALOG
                        .footer_columns
                        .iter()
                        .map(|column| view! {
                            <div>
                                <h5 class="font-bold mb-6">{column.heading}</h5>
                                <ul class="space-y-4 text-slate-400 text-sm">
                                    {column
                                        .links
                                        .iter()
                                        .map(|label| view! {
                                            <li><a href="#" class="hover:text-blue-400">{*label}</a></li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}

                    <NewsletterField />
                </div>

                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row-reverse justify-between items-center gap-4 text-slate-500 text-xs">
                    <div class="flex gap-6">
                        {CATALOG
                            .legal_links
                            .iter()
                            .map(|label| view! { <a href="#" class="hover:text-white">{*label}</a> })
                            .collect_view()}
                    </div>
                    <p>"© 2023 NexusCorp Global Holdings. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

// -----------------------------------------------------------------------------
// Newsletter Field
// -----------------------------------------------------------------------------

/// Email field and button with no handler. The button is not a submit
/// button.
#[component]
pub fn NewsletterField() -> impl IntoView {
    view! {
        <div class="newsletter">
            <h5 class="font-bold mb-6">"Newsletter"</h5>
            <p class="text-slate-400 text-sm mb-4">"Stay updated with our latest industry insights."</p>
            <div class="flex gap-2">
                <input
                    type="email"
                    placeholder="Email"
                    class="bg-slate-800 border-none rounded-lg px-4 py-2 text-sm w-full"
                />
                <button type="button" class="bg-blue-600 p-2 rounded-lg hover:bg-blue-700" aria-label="Subscribe">
                    <Icon glyph=Glyph::ArrowRight class="w-4 h-4" />
                </button>
            </div>
        </div>
    }
}
