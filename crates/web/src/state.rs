// =============================================================================
// NexusCorp Web - Application State
// =============================================================================
// Table of Contents:
// 1. App State
// =============================================================================
// Section state (nav flags, blog query, case selector) stays inside each
// section. Only the notice host is shared.
// =============================================================================

use nexus_common::SiteConfig;

use crate::services::NoticeService;

// -----------------------------------------------------------------------------
// 1. App State
// -----------------------------------------------------------------------------

/// Application state provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Transient acknowledgement notices.
    pub notices: NoticeService,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            notices: NoticeService::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&SiteConfig::from_build_env())
    }
}
