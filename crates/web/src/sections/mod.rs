// =============================================================================
// NexusCorp Web - Page Sections
// =============================================================================
// Listed in page order.
// =============================================================================

pub mod hero;
pub mod about;
pub mod timeline;
pub mod services;
pub mod case_studies;
pub mod team;
pub mod blog;
pub mod contact;

pub use about::About;
pub use blog::BlogSection;
pub use case_studies::CaseStudies;
pub use contact::ContactSection;
pub use hero::Hero;
pub use services::ServicesSection;
pub use team::TeamSection;
pub use timeline::Timeline;
