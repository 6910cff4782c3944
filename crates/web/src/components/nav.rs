// =============================================================================
// NexusCorp Web - Navigation Bar
// =============================================================================
// Fixed bar that turns compact once the page scrolls past the threshold.
// Mobile-responsive with a hamburger toggle and drop-down link list.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;
use nexus_common::{NavState, CATALOG};

use crate::components::common::BrandMark;
use crate::components::icons::{Glyph, Icon};
use crate::utils::{class_when, scroll_offset};

/// Top navigation bar with scroll styling and mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new());

    // Every scroll event re-evaluates, but only a threshold crossing notifies.
    let listener = window_event_listener(ev::scroll, move |_| {
        let offset = scroll_offset();
        nav.maybe_update(|state| state.on_scroll(offset));
    });
    on_cleanup(move || listener.remove());

    let compact = Memo::new(move |_| nav.with(|state| state.is_compact()));
    let menu_open = Memo::new(move |_| nav.with(|state| state.is_menu_open()));

    let bar_class = move || {
        class_when(
            "fixed top-0 w-full z-50 transition-all duration-300",
            compact.get(),
            "bg-white/90 backdrop-blur-md shadow-sm py-3",
            "bg-transparent py-5",
        )
    };
    let brand_class = Signal::derive(move || {
        let colour = if compact.get() { "text-blue-900" } else { "text-white" };
        colour.to_string()
    });
    let link_class = move || {
        class_when(
            "text-sm font-medium transition-colors hover:text-blue-500",
            compact.get(),
            "text-slate-700",
            "text-white/90",
        )
    };
    let toggle_class = move || if compact.get() { "text-slate-900" } else { "text-white" };

    view! {
        <nav class=bar_class data-compact=move || compact.get().to_string()>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center">
                    // Logo
                    <div class="flex items-center">
                        <BrandMark class=brand_class />
                    </div>

                    // Desktop nav links (hidden on mobile)
                    <div class="hidden md:flex items-center space-x-8">
                        {CATALOG
                            .nav_links
                            .iter()
                            .map(|link| view! { <a href=link.href() class=link_class>{link.label}</a> })
                            .collect_view()}
                        <a
                            href="#contact"
                            class="bg-blue-600 text-white px-5 py-2 rounded-full text-sm font-semibold hover:bg-blue-700 transition-all shadow-lg shadow-blue-500/20"
                        >
                            "Get Started"
                        </a>
                    </div>

                    // Hamburger button (mobile only)
                    <div class="md:hidden">
                        <button
                            class=toggle_class
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| nav.update(|state| state.toggle_menu())
                        >
                            {move || if menu_open.get() {
                                view! { <Icon glyph=Glyph::Close /> }.into_any()
                            } else {
                                view! { <Icon glyph=Glyph::Menu /> }.into_any()
                            }}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white border-b mobile-menu">
                    <div class="px-4 py-6 space-y-4">
                        {CATALOG
                            .nav_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="block text-lg font-medium text-slate-900"
                                        on:click=move |_| nav.update(|state| state.select_link())
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
