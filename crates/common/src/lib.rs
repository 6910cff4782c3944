// =============================================================================
// NexusCorp Common - Shared Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================
// Everything in this crate is platform independent so it can be unit tested
// on the host; the browser-facing crate only renders it.
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod blog;
pub mod case_study;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod notice;
pub mod types;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use blog::filter_posts;
pub use case_study::CaseStudySelector;
pub use catalog::{Catalog, CATALOG};
pub use config::{Environment, SiteConfig};
pub use error::CatalogError;
pub use nav::{NavState, SCROLL_THRESHOLD};
pub use notice::{Notice, NoticeId, NoticeLevel, NoticeQueue};
pub use types::*;
