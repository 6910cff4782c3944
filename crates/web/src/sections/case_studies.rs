// =============================================================================
// NexusCorp Web - Case Study Showcase
// =============================================================================
// Every case study is rendered in order. The selector only decides which one
// carries the `active` class; no control changes it.
// =============================================================================

use leptos::prelude::*;
use nexus_common::{CaseStudy, CaseStudySelector, CATALOG};

use crate::components::SectionHeading;

#[component]
pub fn CaseStudies() -> impl IntoView {
    let selector = RwSignal::new(CaseStudySelector::new());

    view! {
        <section id="case-studies" class="py-24 bg-slate-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-16">
                    <SectionHeading eyebrow="Success Stories" title="Tangible results for global leaders" on_dark=true />
                </div>

                {CATALOG
                    .case_studies
                    .iter()
                    .enumerate()
                    .map(|(index, case)| {
                        let active = move || selector.with(|s| s.is_active(index));
                        view! { <CaseStudyCard case=case active=Signal::derive(active) /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CaseStudyCard(case: &'static CaseStudy, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <article class="grid lg:grid-cols-2 gap-16 items-center case-study" class:active=move || active.get() data-case=case.id>
            <div class="space-y-8">
                <p class="text-slate-400 text-sm font-semibold">{case.client}</p>
                <div class="bg-blue-800/30 p-8 rounded-2xl border border-blue-700">
                    <span class="text-blue-400 font-bold text-xs uppercase tracking-widest">"The Challenge"</span>
                    <p class="mt-2 text-xl">{case.challenge}</p>
                </div>
                <div class="bg-blue-500/10 p-8 rounded-2xl border border-blue-500/20">
                    <span class="text-blue-400 font-bold text-xs uppercase tracking-widest">"The Solution"</span>
                    <p class="mt-2 text-xl">{case.solution}</p>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div class="bg-slate-800 p-8 rounded-2xl text-center">
                    <span class="text-slate-400 text-xs uppercase font-bold">"Before"</span>
                    <div class="mt-4 text-2xl font-bold text-slate-300">{case.before}</div>
                </div>
                <div class="bg-blue-600 p-8 rounded-2xl text-center">
                    <span class="text-blue-200 text-xs uppercase font-bold">"After"</span>
                    <div class="mt-4 text-2xl font-bold text-white">{case.after}</div>
                </div>
                <div class="col-span-2 bg-slate-800/50 p-12 rounded-2xl flex items-center justify-center">
                    <div class="text-center">
                        <div class="text-5xl font-bold text-blue-400 mb-2">{case.impact.value}</div>
                        <div class="text-slate-400 font-medium">{case.impact.label}</div>
                    </div>
                </div>
            </div>
        </article>
    }
}
