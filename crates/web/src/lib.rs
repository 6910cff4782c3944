// =============================================================================
// NexusCorp Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. Startup
// 4. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod sections;
pub mod services;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. Startup
// -----------------------------------------------------------------------------

use nexus_common::{SiteConfig, CATALOG};

/// Install the panic hook and console logger, then sanity-check the content.
pub fn init(config: &SiteConfig) {
    console_error_panic_hook::set_once();

    let level = if config.environment.is_development() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Ignore if a logger is already installed (e.g. `mount` after `main`).
    let _ = console_log::init_with_level(level);

    if let Err(e) = CATALOG.validate() {
        log::warn!("Site content failed validation: {}", e);
    }
}

// -----------------------------------------------------------------------------
// 4. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    init(&SiteConfig::from_build_env());
    log::info!("Mounting NexusCorp site...");
    leptos::mount::mount_to_body(app::App);
}
