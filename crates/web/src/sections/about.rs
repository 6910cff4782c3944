// =============================================================================
// NexusCorp Web - About Section
// =============================================================================

use leptos::prelude::*;
use nexus_common::catalog::EXPERIENCE_BADGE;
use nexus_common::CATALOG;

use crate::components::{Glyph, Icon, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    // Image with experience badge
                    <div class="relative">
                        <div class="relative rounded-2xl overflow-hidden shadow-2xl">
                            <img src=CATALOG.images.about alt="Our Team" class="w-full h-[600px] object-cover" />
                            <div class="absolute inset-0 bg-blue-900/10 mix-blend-multiply"></div>
                        </div>
                        <div class="absolute -bottom-10 -right-10 bg-blue-600 p-10 rounded-2xl text-white hidden md:block">
                            <div class="text-4xl font-bold mb-2">{EXPERIENCE_BADGE.value}</div>
                            <div class="text-sm font-medium opacity-80 max-w-[8rem]">{EXPERIENCE_BADGE.label}</div>
                        </div>
                    </div>

                    // Copy
                    <div>
                        <SectionHeading
                            eyebrow="About NexusCorp"
                            title="We build the bridge between corporate ambition and technological reality."
                            title_class="mb-8 leading-tight"
                        />
                        <p class="text-lg text-slate-600 mb-8">
                            "NexusCorp was founded on the principle that strategy without execution is just a daydream. We partner with leaders to solve their most complex challenges and seize their greatest opportunities."
                        </p>

                        <div class="space-y-4 mb-10">
                            {CATALOG
                                .about_pillars
                                .iter()
                                .map(|pillar| view! {
                                    <div class="flex items-center gap-3">
                                        <div class="bg-blue-100 p-1 rounded-full">
                                            <Icon glyph=Glyph::CheckCircle class="w-5 h-5 text-blue-600" />
                                        </div>
                                        <span class="font-medium text-slate-700">{*pillar}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>

                        <div class="border-t border-slate-100 pt-10">
                            <div class="grid grid-cols-2 gap-8">
                                {CATALOG
                                    .company_stats
                                    .iter()
                                    .map(|stat| view! {
                                        <div>
                                            <div class="text-3xl font-bold text-slate-900">{stat.value}</div>
                                            <div class="text-sm text-slate-500">{stat.label}</div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
