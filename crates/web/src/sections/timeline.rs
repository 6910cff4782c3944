// =============================================================================
// NexusCorp Web - Company Timeline
// =============================================================================

use leptos::prelude::*;
use nexus_common::CATALOG;

use crate::components::SectionHeading;

/// Milestones in authored order.
#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section class="py-24 bg-blue-900 text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-16">
                    <SectionHeading eyebrow="Our History" title="A decade of driving change" on_dark=true />
                </div>

                <div class="relative">
                    <div class="hidden lg:block absolute top-1/2 left-0 w-full h-0.5 bg-blue-800"></div>
                    <div class="grid lg:grid-cols-4 gap-8">
                        {CATALOG
                            .timeline
                            .iter()
                            .map(|entry| view! {
                                <div class="relative timeline-entry">
                                    <div class="hidden lg:block absolute top-1/2 left-0 -translate-y-1/2 w-4 h-4 bg-blue-500 rounded-full border-4 border-blue-900 z-10"></div>
                                    <div class="bg-blue-800/50 p-8 rounded-2xl border border-blue-700 hover:bg-blue-800 transition-colors">
                                        <span class="text-3xl font-black text-blue-400 mb-4 block">{entry.year}</span>
                                        <h4 class="text-xl font-bold mb-2">{entry.title}</h4>
                                        <p class="text-blue-100/70 text-sm leading-relaxed">{entry.description}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
