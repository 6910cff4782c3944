// =============================================================================
// NexusCorp Web - Services Grid
// =============================================================================

use leptos::prelude::*;
use nexus_common::{ServiceOffering, CATALOG};

use crate::components::{Icon, SectionHeading};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-24 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <SectionHeading eyebrow="Our Expertise" title="Comprehensive solutions for modern business" />
                    <p class="text-slate-600 text-lg mt-6">
                        "We provide specialized services across three core pillars to ensure holistic growth and efficiency."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {CATALOG
                        .services
                        .iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static ServiceOffering) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-sm hover:shadow-xl transition-all group service-card" data-service=service.id>
            <div class="h-48 overflow-hidden">
                <img
                    src=service.image
                    alt=service.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="p-8">
                <div class="w-12 h-12 bg-blue-50 rounded-xl flex items-center justify-center text-blue-600 mb-6 group-hover:bg-blue-600 group-hover:text-white transition-colors">
                    <Icon glyph=service.icon />
                </div>
                <h4 class="text-xl font-bold text-slate-900 mb-4">{service.title}</h4>
                <p class="text-slate-600 mb-6 text-sm leading-relaxed">{service.description}</p>
                <ul class="space-y-3">
                    {service
                        .features
                        .iter()
                        .map(|feature| view! {
                            <li class="flex items-center gap-2 text-xs font-semibold text-slate-500 uppercase">
                                <div class="w-1.5 h-1.5 bg-blue-400 rounded-full"></div>
                                {*feature}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
