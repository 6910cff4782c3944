// =============================================================================
// NexusCorp Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use nexus_common::SiteConfig;
use nexus_web::App;

fn main() {
    let config = SiteConfig::from_build_env();

    // Panic hook, logger and content check
    nexus_web::init(&config);

    log::info!("Starting NexusCorp site ({:?})", config.environment);

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}
