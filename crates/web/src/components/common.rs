// =============================================================================
// NexusCorp Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Section Heading
// 2. Brand Mark
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Section Heading
// -----------------------------------------------------------------------------

/// Small uppercase eyebrow above a large title.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    /// Lighter palette for sections on a dark background.
    #[prop(optional)]
    on_dark: bool,
    /// Extra classes appended to the title.
    #[prop(optional)]
    title_class: &'static str,
) -> impl IntoView {
    let eyebrow_class = if on_dark {
        "text-blue-400 font-bold tracking-widest uppercase text-sm mb-4"
    } else {
        "text-blue-600 font-bold tracking-widest uppercase text-sm mb-4"
    };
    let title_class = if on_dark {
        format!("text-4xl font-bold {}", title_class)
    } else {
        format!("text-4xl font-bold text-slate-900 {}", title_class)
    };

    view! {
        <h2 class=eyebrow_class>{eyebrow}</h2>
        <h3 class=title_class>{title}</h3>
    }
}

// -----------------------------------------------------------------------------
// 2. Brand Mark
// -----------------------------------------------------------------------------

/// Two-tone wordmark. `class` may change over time (the navbar recolours it).
#[component]
pub fn BrandMark(#[prop(into)] class: Signal<String>) -> impl IntoView {
    view! {
        <span class=move || format!("text-2xl font-bold tracking-tighter {}", class.get())>
            "NEXUS"<span class="text-blue-500">"CORP"</span>
        </span>
    }
}
