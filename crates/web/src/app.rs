// =============================================================================
// NexusCorp Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{Footer, Navbar, NoticeHost};
use crate::sections::{
    About, BlogSection, CaseStudies, ContactSection, Hero, ServicesSection, TeamSection, Timeline,
};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root component. Composes every section in page order.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Notice host shared with the sections
    provide_context(AppState::default());

    view! {
        <Title text="NexusCorp | Strategy, Analytics & Digital Transformation" />
        <Meta
            name="description"
            content="NexusCorp provides the strategic backbone for global enterprises seeking to lead in a rapidly evolving digital landscape."
        />

        <div class="min-h-screen bg-white font-sans selection:bg-blue-100 selection:text-blue-900">
            <NoticeHost />
            <Navbar />
            <Hero />
            <About />
            <Timeline />
            <ServicesSection />
            <CaseStudies />
            <TeamSection />
            <BlogSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
