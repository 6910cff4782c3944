// =============================================================================
// NexusCorp Web - Hero Section
// =============================================================================

use leptos::prelude::*;
use nexus_common::CATALOG;

use crate::components::{Glyph, Icon};

/// Full-height banner with headline and calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden">
            // Background
            <div class="absolute inset-0">
                <img src=CATALOG.images.hero alt="Modern Architecture" class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-gradient-to-r from-blue-900/90 via-blue-900/60 to-transparent"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="max-w-2xl">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-blue-500/20 border border-blue-400/30 text-blue-300 text-xs font-bold uppercase tracking-wider mb-6">
                        "Pioneering Corporate Excellence"
                    </span>
                    <h1 class="text-5xl md:text-7xl font-bold text-white leading-tight mb-6">
                        "Transforming vision into "
                        <span class="text-blue-400">"measurable impact"</span>
                    </h1>
                    <p class="text-xl text-blue-100/80 mb-10 leading-relaxed">
                        "NexusCorp provides the strategic backbone for global enterprises seeking to lead in a rapidly evolving digital landscape."
                    </p>

                    // CTA Buttons
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href="#contact"
                            class="bg-blue-600 text-white px-8 py-4 rounded-xl font-bold flex items-center justify-center gap-2 hover:bg-blue-700 transition-all shadow-xl shadow-blue-500/20 group"
                        >
                            "Consult with us"
                            <Icon glyph=Glyph::ChevronRight class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                        </a>
                        <a
                            href="#case-studies"
                            class="bg-white/10 backdrop-blur-md text-white border border-white/20 px-8 py-4 rounded-xl font-bold text-center hover:bg-white/20 transition-all"
                        >
                            "View Case Studies"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
