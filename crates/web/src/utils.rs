// =============================================================================
// NexusCorp Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Class Utilities
// =============================================================================

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Current vertical scroll offset, or `0.0` if it cannot be read.
pub fn scroll_offset() -> f64 {
    let Some(window) = web_sys::window() else {
        log::warn!("No window object available");
        return 0.0;
    };
    window.scroll_y().unwrap_or_else(|e| {
        log::warn!("Failed to read scroll offset: {:?}", e);
        0.0
    })
}

// -----------------------------------------------------------------------------
// 2. Class Utilities
// -----------------------------------------------------------------------------

/// Join a base class list with whichever variant applies.
pub fn class_when(base: &str, condition: bool, on: &str, off: &str) -> String {
    format!("{} {}", base, if condition { on } else { off })
}
