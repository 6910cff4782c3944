// =============================================================================
// NexusCorp Web - Inline SVG Icons
// =============================================================================

use leptos::prelude::*;
use nexus_common::{ChannelKind, ServiceIcon};

/// Stroke icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Close,
    ChevronRight,
    ArrowRight,
    Search,
    Calendar,
    CheckCircle,
    Info,
    Phone,
    Mail,
    MapPin,
    Briefcase,
    BarChart,
    Layout,
}

impl Glyph {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::ChevronRight => &["m9 18 6-6-6-6"],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Search => &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z", "m21 21-4.3-4.3"],
            Glyph::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Glyph::Info => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 16v-4",
                "M12 8h.01",
            ],
            Glyph::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
            Glyph::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            Glyph::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            Glyph::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Glyph::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Glyph::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
        }
    }
}

impl From<ServiceIcon> for Glyph {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Briefcase => Glyph::Briefcase,
            ServiceIcon::BarChart => Glyph::BarChart,
            ServiceIcon::Layout => Glyph::Layout,
        }
    }
}

impl From<ChannelKind> for Glyph {
    fn from(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::Phone => Glyph::Phone,
            ChannelKind::Email => Glyph::Mail,
            ChannelKind::Address => Glyph::MapPin,
        }
    }
}

#[component]
pub fn Icon(
    #[prop(into)] glyph: Glyph,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() { "w-6 h-6".to_string() } else { class };

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
