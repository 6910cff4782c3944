// =============================================================================
// NexusCorp Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================
// Fields are uncontrolled: nothing reads their values. Only the browser's
// native `required` / `type=email` checks apply.
// =============================================================================

use leptos::prelude::*;

const FIELD_CLASS: &str =
    "w-full px-4 py-3 rounded-xl border border-slate-200 focus:outline-none focus:ring-2 focus:ring-blue-500";

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Single-line input with label.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <label class="block space-y-2">
            <span class="text-sm font-bold text-slate-700">{label}</span>
            <input name=name type=input_type class=FIELD_CLASS required=required />
        </label>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <label class="block space-y-2">
            <span class="text-sm font-bold text-slate-700">{label}</span>
            <textarea name=name rows=rows class=FIELD_CLASS required=required></textarea>
        </label>
    }
}
