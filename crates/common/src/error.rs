// =============================================================================
// NexusCorp Common - Error Types
// =============================================================================

use thiserror::Error;

/// Broken uniqueness invariant in the authored site content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate service id: {0}")]
    DuplicateServiceId(&'static str),

    #[error("Duplicate blog post id: {0}")]
    DuplicateBlogPostId(&'static str),

    #[error("Duplicate case study id: {0}")]
    DuplicateCaseStudyId(&'static str),

    #[error("Duplicate team member name: {0}")]
    DuplicateTeamMember(&'static str),

    #[error("Duplicate timeline year: {0}")]
    DuplicateTimelineYear(&'static str),
}
