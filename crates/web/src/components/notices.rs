// =============================================================================
// NexusCorp Web - Notice Host
// =============================================================================
// Renders the live notice queue at top centre. Mounted once by the root.
// =============================================================================

use leptos::prelude::*;
use nexus_common::{Notice, NoticeLevel};

use crate::components::icons::{Glyph, Icon};
use crate::state::AppState;

/// Icon and icon colour for each level.
fn level_icon(level: NoticeLevel) -> (Glyph, &'static str) {
    match level {
        NoticeLevel::Success => (Glyph::CheckCircle, "w-5 h-5 text-green-600"),
        NoticeLevel::Info => (Glyph::Info, "w-5 h-5 text-blue-600"),
    }
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<AppState>().notices;
    let queue = notices.queue();

    view! {
        <div
            class="fixed top-4 left-1/2 -translate-x-1/2 z-[100] flex flex-col gap-2 notice-host"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<Notice>>())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let (glyph, icon_class) = level_icon(notice.level);
                    view! {
                        <div
                            class=format!(
                                "notice notice-{} flex items-center gap-3 bg-white border border-slate-200 shadow-lg rounded-xl px-4 py-3 text-sm text-slate-900",
                                notice.level.as_str(),
                            )
                            data-notice-id=id.to_string()
                        >
                            <Icon glyph=glyph class=icon_class />
                            <span class="notice-message">{notice.message}</span>
                            <button
                                type="button"
                                class="text-slate-400 hover:text-slate-700"
                                aria-label="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                <Icon glyph=Glyph::Close class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
