// =============================================================================
// NexusCorp Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Page Chrome (nav, footer, notices)
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod icons;
pub mod nav;
pub mod notices;

pub use common::{BrandMark, SectionHeading};
pub use footer::{Footer, NewsletterField};
pub use forms::{TextArea, TextInput};
pub use icons::{Glyph, Icon};
pub use nav::Navbar;
pub use notices::NoticeHost;
