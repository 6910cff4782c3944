// =============================================================================
// NexusCorp Web - Team Roster
// =============================================================================

use leptos::prelude::*;
use nexus_common::CATALOG;

use crate::components::{Glyph, Icon, SectionHeading};

#[component]
pub fn TeamSection() -> impl IntoView {
    view! {
        <section id="team" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-end mb-16 gap-8">
                    <div class="max-w-2xl">
                        <SectionHeading eyebrow="Executive Leadership" title="Guided by visionaries, fueled by experts" />
                    </div>
                    <button type="button" class="text-blue-600 font-bold flex items-center gap-2 hover:gap-3 transition-all join-team">
                        "Join our team"
                        <Icon glyph=Glyph::ArrowRight class="w-5 h-5" />
                    </button>
                </div>

                <div class="grid md:grid-cols-3 gap-12">
                    {CATALOG
                        .team
                        .iter()
                        .map(|member| view! {
                            <div class="group team-member">
                                <div class="relative aspect-square rounded-3xl overflow-hidden mb-6">
                                    <img
                                        src=member.image
                                        alt=member.name
                                        class="w-full h-full object-cover grayscale group-hover:grayscale-0 transition-all duration-700"
                                    />
                                    <div class="absolute inset-0 bg-blue-900/10 group-hover:bg-transparent transition-colors"></div>
                                </div>
                                <h4 class="text-2xl font-bold text-slate-900">{member.name}</h4>
                                <p class="text-blue-600 font-semibold mb-4">{member.role}</p>
                                <p class="text-slate-600 leading-relaxed">{member.bio}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
